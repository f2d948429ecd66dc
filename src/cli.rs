use clap::Parser;
use std::path::PathBuf;

/// Default directory for coverage artifacts, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "coverage-report";

#[derive(Parser, Debug, Clone)]
#[command(name = "example-coverage")]
#[command(about = "Export example-conversion coverage as JSON reports and a plain-text digest")]
#[command(version)]
pub struct CliArgs {
    /// Coverage record written by the conversion engine (JSON)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: PathBuf,

    /// Directory to write byExample.json, byLanguage.json, summary.json and shortSummary.txt
    #[arg(long, short = 'o', value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Override the provider name stored in the record
    #[arg(long, value_name = "NAME")]
    pub provider_name: Option<String>,

    /// Override the provider version stored in the record
    #[arg(long, value_name = "VERSION")]
    pub provider_version: Option<String>,

    /// Print shortSummary.txt to stdout after a successful export
    #[arg(long)]
    pub print_summary: bool,

    /// Remove previously exported reports from the output directory before exporting
    #[arg(long)]
    pub clean: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.provider_name
            && name.trim().is_empty()
        {
            return Err("--provider-name cannot be empty".to_string());
        }

        if self.output_dir.is_file() {
            return Err(format!("Output directory {} exists and is a file", self.output_dir.display()));
        }

        Ok(())
    }
}
