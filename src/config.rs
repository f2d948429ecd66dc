/// Configuration resolution module
///
/// This module handles:
/// - Building an ExportPlan from CLI arguments
/// - Loading the Coverage Record and applying provider identity overrides
use crate::cli::CliArgs;
use crate::types::{CoverageRecord, load_record};
use log::debug;
use std::path::PathBuf;

/// Everything one export run needs, resolved upfront
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub provider_name: Option<String>,
    pub provider_version: Option<String>,
    pub print_summary: bool,
    pub clean: bool,
}

/// Build a complete ExportPlan from CLI arguments
pub fn build_export_plan(args: &CliArgs) -> Result<ExportPlan, String> {
    debug!("Building export plan from CLI args");

    if !args.input.is_file() {
        return Err(format!("Coverage record not found: {}", args.input.display()));
    }

    Ok(ExportPlan {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        provider_name: args.provider_name.as_ref().map(|s| s.trim().to_string()),
        provider_version: args.provider_version.as_ref().map(|s| s.trim().to_string()),
        print_summary: args.print_summary,
        clean: args.clean,
    })
}

/// Load the record named by the plan and stamp any identity overrides onto it
pub fn load_planned_record(plan: &ExportPlan) -> Result<CoverageRecord, String> {
    let mut record = load_record(&plan.input).map_err(|e| e.to_string())?;

    if let Some(ref name) = plan.provider_name {
        debug!("Overriding provider name {:?} -> {:?}", record.provider_name, name);
        record.provider_name = name.clone();
    }
    if let Some(ref version) = plan.provider_version {
        debug!("Overriding provider version {:?} -> {:?}", record.provider_version, version);
        record.provider_version = version.clone();
    }

    Ok(record)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
