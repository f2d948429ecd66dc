/// Core data structures for conversion coverage
///
/// This module defines the Coverage Record handed to the exporter by the
/// conversion engine: the provider identity, every example encountered, and
/// one conversion result per target language attempted for each example.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of converting one example into one target language.
///
/// Variants are ordered by escalating severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Success,
    Warning,
    Failure,
    Fatal,
}

impl Severity {
    pub fn is_success(&self) -> bool {
        matches!(self, Severity::Success)
    }
}

/// The result of one conversion attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConversionResult {
    pub target_language: String,
    #[serde(default)]
    pub severity: Severity,
    /// Free-text failure reason, ignored for successful attempts
    #[serde(default)]
    pub error_detail: String,
    /// More than one structurally distinct translation was produced
    #[serde(default)]
    pub multiple_translations: bool,
}

#[cfg(test)]
impl ConversionResult {
    pub fn success(target_language: impl Into<String>) -> Self {
        ConversionResult {
            target_language: target_language.into(),
            severity: Severity::Success,
            error_detail: String::new(),
            multiple_translations: false,
        }
    }

    pub fn failure(target_language: impl Into<String>, severity: Severity, error_detail: impl Into<String>) -> Self {
        ConversionResult {
            target_language: target_language.into(),
            severity,
            error_detail: error_detail.into(),
            multiple_translations: false,
        }
    }

    /// Mark this attempt as ambiguous (several valid translations)
    pub fn with_multiple_translations(mut self) -> Self {
        self.multiple_translations = true;
        self
    }
}

/// One code snippet and every conversion attempted for it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Example {
    pub name: String,
    #[serde(default)]
    pub original_source: String,
    #[serde(default)]
    pub conversion_attempts: Vec<ConversionResult>,
}

impl Example {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, original_source: impl Into<String>) -> Self {
        Example { name: name.into(), original_source: original_source.into(), conversion_attempts: Vec::new() }
    }

    /// True if any attempt produced more than one translation
    pub fn is_duplicated(&self) -> bool {
        self.conversion_attempts.iter().any(|attempt| attempt.multiple_translations)
    }

    /// True if at least one attempt did not succeed
    #[cfg(test)]
    pub fn has_failures(&self) -> bool {
        self.conversion_attempts.iter().any(|attempt| !attempt.severity.is_success())
    }

    /// Attempts with a severity other than Success, in recorded order
    pub fn failed_attempts(&self) -> impl Iterator<Item = &ConversionResult> {
        self.conversion_attempts.iter().filter(|attempt| !attempt.severity.is_success())
    }
}

/// Everything the conversion engine recorded for one provider.
///
/// Examples are keyed by name so iteration is always name-ordered, which keeps
/// every exported artifact reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageRecord {
    pub provider_name: String,
    pub provider_version: String,
    #[serde(default)]
    pub examples: BTreeMap<String, Example>,
}

impl CoverageRecord {
    #[cfg(test)]
    pub fn new(provider_name: impl Into<String>, provider_version: impl Into<String>) -> Self {
        CoverageRecord {
            provider_name: provider_name.into(),
            provider_version: provider_version.into(),
            examples: BTreeMap::new(),
        }
    }

    /// Record one conversion attempt, creating the example on first sight.
    ///
    /// The original source is only stored when the example is first created.
    #[cfg(test)]
    pub fn record_conversion(&mut self, example_name: &str, original_source: &str, result: ConversionResult) {
        self.examples
            .entry(example_name.to_string())
            .or_insert_with(|| Example::new(example_name, original_source))
            .conversion_attempts
            .push(result);
    }

    /// Insert a fully built example, replacing any previous one with the same name
    #[cfg(test)]
    pub fn insert_example(&mut self, example: Example) {
        self.examples.insert(example.name.clone(), example);
    }

    /// Total number of conversion attempts across all examples
    pub fn total_conversions(&self) -> usize {
        self.examples.values().map(|example| example.conversion_attempts.len()).sum()
    }
}

/// Errors raised while loading a serialized Coverage Record
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read coverage record {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse coverage record {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a Coverage Record from a JSON file
pub fn load_record(path: &Path) -> Result<CoverageRecord, RecordError> {
    let contents = fs::read_to_string(path).map_err(|source| RecordError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&contents).map_err(|source| RecordError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "data_structures_test.rs"]
mod data_structures_test;
