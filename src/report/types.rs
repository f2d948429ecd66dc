//! Report type definitions for the exported artifacts.
//!
//! These are the serialized shapes of the per-example, per-language and
//! provider-wide reports. Field names are PascalCase on the wire because the
//! CI tooling that consumes `summary.json` keys on them.

use crate::types::ConversionResult;
use serde::Serialize;

/// A count together with its share of the relevant total, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NumPct {
    pub number: usize,
    pub pct: f64,
}

impl NumPct {
    /// Fill in `pct` from `number` and the aggregation total.
    pub fn compute_pct(&mut self, total: usize) {
        self.pct = percentage(self.number, total);
    }
}

/// `count / total * 100`, defined as 0.0 when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 * 100.0 }
}

/// One distinct error message and how many attempts reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorMessage {
    pub reason: String,
    pub count: usize,
}

/// Conversion outcomes counted by severity.
///
/// Shared by the per-language and provider-wide reports; flattened into
/// both so the serialized shape carries `Successes`, `Warnings`, ... directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeverityCounts {
    pub successes: NumPct,
    pub warnings: NumPct,
    pub failures: NumPct,
    pub fatals: NumPct,
}

impl SeverityCounts {
    pub fn compute_pcts(&mut self, total: usize) {
        self.successes.compute_pct(total);
        self.warnings.compute_pct(total);
        self.failures.compute_pct(total);
        self.fatals.compute_pct(total);
    }

    /// Sum of all four counters
    pub fn counted(&self) -> usize {
        self.successes.number + self.warnings.number + self.failures.number + self.fatals.number
    }
}

/// Statistics for a single target language (`byLanguage.json` values).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageStatistic {
    pub total: usize,
    #[serde(flatten)]
    pub counts: SeverityCounts,
    pub frequent_errors: Vec<ErrorMessage>,
}

/// Statistics for the provider as a whole (`summary.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderStatistic {
    pub name: String,
    pub version: String,
    pub examples: usize,
    pub total_conversions: usize,
    #[serde(flatten)]
    pub counts: SeverityCounts,
    pub conversion_errors: Vec<ErrorMessage>,
}

/// One line of `byExample.json`.
///
/// `OriginalSource` and `FailedLanguages` are only present when at least one
/// conversion of the example did not succeed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExampleReport<'a> {
    pub provider_name: &'a str,
    pub provider_version: &'a str,
    pub example_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_source: Option<&'a str>,
    pub is_duplicated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_languages: Vec<&'a ConversionResult>,
}

/// Success counts for one language in the plain-text digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuccessTally {
    pub successes: usize,
    pub total: usize,
}

impl SuccessTally {
    pub fn rate(&self) -> f64 {
        percentage(self.successes, self.total)
    }
}
