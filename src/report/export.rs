//! Report export to the coverage output directory.
//!
//! This module writes the four coverage artifacts:
//! - `byExample.json` - newline-delimited JSON, one object per example
//! - `byLanguage.json` - statistics keyed by target language
//! - `summary.json` - provider-wide statistics
//! - `shortSummary.txt` - plain-text digest
//!
//! Each `byExample.json` object is tab-indented and spans several lines, so
//! consumers must split the file on JSON object boundaries, not on lines.
//!
//! `summary.json` and `shortSummary.txt` are fixed names picked up by the CI
//! pipeline (upload for long-term analysis, and the job's terminal view).

use super::simple::format_short_summary;
use super::stats::{flatten_examples, summarize_by_language, summarize_provider};
use crate::types::CoverageRecord;
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BY_EXAMPLE_FILE: &str = "byExample.json";
pub const BY_LANGUAGE_FILE: &str = "byLanguage.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const SHORT_SUMMARY_FILE: &str = "shortSummary.txt";

/// Every artifact `export` writes, in write order
pub const REPORT_FILES: [&str; 4] = [BY_EXAMPLE_FILE, BY_LANGUAGE_FILE, SUMMARY_FILE, SHORT_SUMMARY_FILE];

/// Errors that can occur while exporting coverage reports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory could not be created or accessed.
    #[error("failed to create output directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be converted to JSON.
    #[error("failed to serialize {file}: {source}")]
    SerializationFailed {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A report file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Export every coverage view into `output_dir`.
///
/// Runs per-example, per-language, provider-wide and digest exports in that
/// order and stops at the first error. Files written before the failure are
/// left in place.
pub fn export(record: &CoverageRecord, output_dir: &Path) -> Result<(), ExportError> {
    info!(
        "Exporting coverage for {} {} ({} examples) to {:?}",
        record.provider_name,
        record.provider_version,
        record.examples.len(),
        output_dir
    );

    export_by_example(record, output_dir)?;
    export_by_language(record, output_dir)?;
    export_summary(record, output_dir)?;
    export_short_summary(record, output_dir)?;

    Ok(())
}

/// Write `byExample.json`: each example serialized on its own, joined by newlines.
pub fn export_by_example(record: &CoverageRecord, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = prepare_output(output_dir, BY_EXAMPLE_FILE)?;

    let mut contents = Vec::new();
    for report in flatten_examples(record) {
        contents.extend(to_tab_indented_json(&report, BY_EXAMPLE_FILE)?);
        contents.push(b'\n');
    }

    write_owner_only(&path, &contents)?;
    Ok(path)
}

/// Write `byLanguage.json`: one object keyed by language name.
pub fn export_by_language(record: &CoverageRecord, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = prepare_output(output_dir, BY_LANGUAGE_FILE)?;
    let statistics = summarize_by_language(record);
    write_owner_only(&path, &to_tab_indented_json(&statistics, BY_LANGUAGE_FILE)?)?;
    Ok(path)
}

/// Write `summary.json`: the provider-wide statistic.
pub fn export_summary(record: &CoverageRecord, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = prepare_output(output_dir, SUMMARY_FILE)?;
    let statistic = summarize_provider(record);
    write_owner_only(&path, &to_tab_indented_json(&statistic, SUMMARY_FILE)?)?;
    Ok(path)
}

/// Write `shortSummary.txt`: the plain-text digest.
pub fn export_short_summary(record: &CoverageRecord, output_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = prepare_output(output_dir, SHORT_SUMMARY_FILE)?;
    write_owner_only(&path, format_short_summary(record).as_bytes())?;
    Ok(path)
}

/// Remove previously exported artifacts from `output_dir`.
///
/// Only the four known report files are deleted; anything else in the
/// directory (and the directory itself) is left alone. Returns how many files
/// were removed.
pub fn clean_outputs(output_dir: &Path) -> Result<usize, ExportError> {
    let mut removed = 0;
    for file_name in REPORT_FILES {
        let path = output_dir.join(file_name);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed stale report {:?}", path);
                removed += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => return Err(ExportError::WriteFailed { path, source }),
        }
    }
    Ok(removed)
}

/// Ensure `output_dir` exists (owner-only on Unix) and return the target path.
fn prepare_output(output_dir: &Path, file_name: &str) -> Result<PathBuf, ExportError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
        .create(output_dir)
        .map_err(|source| ExportError::DirectoryCreationFailed { path: output_dir.to_path_buf(), source })?;

    debug!("Output directory ready: {:?}", output_dir);
    Ok(output_dir.join(file_name))
}

/// Serialize with one tab per indentation level.
fn to_tab_indented_json<T: Serialize + ?Sized>(value: &T, file: &str) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .map_err(|source| ExportError::SerializationFailed { file: file.to_string(), source })?;
    Ok(buf)
}

/// Create or truncate `path` (mode 0600 on Unix) and write `contents`.
fn write_owner_only(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let write_err = |source| ExportError::WriteFailed { path: path.to_path_buf(), source };
    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;

    debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
