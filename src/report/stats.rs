//! Statistics and aggregation over a Coverage Record.
//!
//! Every view is computed independently from the same read-only record:
//! - per-example flattening (`flatten_examples`)
//! - per-language statistics (`summarize_by_language`)
//! - provider-wide statistics (`summarize_provider`)
//! - success tallies for the plain-text digest (`tally_successes`)

use super::types::{ErrorMessage, ExampleReport, LanguageStatistic, ProviderStatistic, SeverityCounts, SuccessTally};
use crate::types::{ConversionResult, CoverageRecord, Severity};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Running totals for one aggregation bucket.
///
/// The error histogram borrows reasons from the record; it only lives for the
/// duration of one summarize call.
#[derive(Default)]
struct Tally<'a> {
    total: usize,
    counts: SeverityCounts,
    histogram: HashMap<&'a str, usize>,
}

impl<'a> Tally<'a> {
    fn add(&mut self, result: &'a ConversionResult) {
        self.total += 1;
        match result.severity {
            Severity::Success => self.counts.successes.number += 1,
            Severity::Warning => self.counts.warnings.number += 1,
            Severity::Failure => self.counts.failures.number += 1,
            Severity::Fatal => self.counts.fatals.number += 1,
        }
        if !result.severity.is_success() {
            *self.histogram.entry(result.error_detail.as_str()).or_default() += 1;
        }
    }

    /// Compute percentages and the sorted error list.
    fn finish(mut self) -> (usize, SeverityCounts, Vec<ErrorMessage>) {
        debug_assert_eq!(self.counts.counted(), self.total);
        self.counts.compute_pcts(self.total);
        (self.total, self.counts, sort_errors(self.histogram))
    }
}

/// Flatten an error histogram into a list sorted by descending count.
///
/// Equal counts are ordered by descending (reverse-lexicographic) reason so the
/// output never depends on hash iteration order.
pub fn sort_errors(histogram: HashMap<&str, usize>) -> Vec<ErrorMessage> {
    let mut errors: Vec<ErrorMessage> =
        histogram.into_iter().map(|(reason, count)| ErrorMessage { reason: reason.to_string(), count }).collect();
    errors.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.reason.cmp(&a.reason)));
    errors
}

/// Build one report entry per example, in example-name order.
pub fn flatten_examples(record: &CoverageRecord) -> Vec<ExampleReport<'_>> {
    record
        .examples
        .values()
        .map(|example| {
            let failed_languages: Vec<&ConversionResult> = example.failed_attempts().collect();
            ExampleReport {
                provider_name: &record.provider_name,
                provider_version: &record.provider_version,
                example_name: &example.name,
                original_source: if failed_languages.is_empty() {
                    None
                } else {
                    Some(example.original_source.as_str())
                },
                is_duplicated: example.is_duplicated(),
                failed_languages,
            }
        })
        .collect()
}

/// Aggregate every conversion attempt by target language.
pub fn summarize_by_language(record: &CoverageRecord) -> BTreeMap<String, LanguageStatistic> {
    let mut tallies: BTreeMap<&str, Tally<'_>> = BTreeMap::new();

    for example in record.examples.values() {
        for result in &example.conversion_attempts {
            tallies.entry(result.target_language.as_str()).or_default().add(result);
        }
    }

    debug!("Aggregated {} target languages for {}", tallies.len(), record.provider_name);

    tallies
        .into_iter()
        .map(|(language, tally)| {
            let (total, counts, frequent_errors) = tally.finish();
            (language.to_string(), LanguageStatistic { total, counts, frequent_errors })
        })
        .collect()
}

/// Aggregate every conversion attempt into one provider-wide statistic.
pub fn summarize_provider(record: &CoverageRecord) -> ProviderStatistic {
    let mut tally = Tally::default();

    for example in record.examples.values() {
        for result in &example.conversion_attempts {
            tally.add(result);
        }
    }

    let (total_conversions, counts, conversion_errors) = tally.finish();
    ProviderStatistic {
        name: record.provider_name.clone(),
        version: record.provider_version.clone(),
        examples: record.examples.len(),
        total_conversions,
        counts,
        conversion_errors,
    }
}

/// Count successes overall and per language, for the plain-text digest.
///
/// Returns the provider-wide tally and per-language tallies keyed (and
/// therefore ordered) by language name.
pub fn tally_successes(record: &CoverageRecord) -> (SuccessTally, BTreeMap<&str, SuccessTally>) {
    let mut overall = SuccessTally::default();
    let mut by_language: BTreeMap<&str, SuccessTally> = BTreeMap::new();

    for example in record.examples.values() {
        for result in &example.conversion_attempts {
            let language = by_language.entry(result.target_language.as_str()).or_default();
            overall.total += 1;
            language.total += 1;
            if result.severity.is_success() {
                overall.successes += 1;
                language.successes += 1;
            }
        }
    }

    (overall, by_language)
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
