/// Tests for coverage aggregation
#[cfg(test)]
mod tests {
    use crate::report::stats::*;
    use crate::report::types::SeverityCounts;
    use crate::types::{ConversionResult, CoverageRecord, Example, Severity};
    use std::collections::HashMap;

    const EPSILON: f64 = 1e-9;

    /// Provider "aws" with one example converted to python (ok) and go (failed)
    fn create_aws_record() -> CoverageRecord {
        let mut record = CoverageRecord::new("aws", "5.0.0");
        record.record_conversion("ex1", "resource \"aws_s3_bucket\" \"b\" {}", ConversionResult::success("python"));
        record.record_conversion("ex1", "", ConversionResult::failure("go", Severity::Failure, "parse error"));
        record
    }

    /// A record covering every severity across three languages
    fn create_mixed_record() -> CoverageRecord {
        let mut record = CoverageRecord::new("gcp", "1.2.3");
        record.record_conversion("a", "a-src", ConversionResult::success("python"));
        record.record_conversion("a", "", ConversionResult::failure("go", Severity::Warning, "unused import"));
        record.record_conversion("a", "", ConversionResult::failure("csharp", Severity::Fatal, "panic"));
        record.record_conversion("b", "b-src", ConversionResult::success("python"));
        record.record_conversion("b", "", ConversionResult::failure("go", Severity::Failure, "bad type"));
        record.record_conversion("b", "", ConversionResult::failure("csharp", Severity::Failure, "bad type"));
        record.record_conversion("c", "c-src", ConversionResult::failure("python", Severity::Warning, "unused import"));
        record.record_conversion("c", "", ConversionResult::success("go").with_multiple_translations());
        record
    }

    fn assert_counts_consistent(counts: &SeverityCounts, total: usize) {
        assert_eq!(counts.counted(), total, "severity counters must add up to the total");
        let pct_sum = counts.successes.pct + counts.warnings.pct + counts.failures.pct + counts.fatals.pct;
        if total > 0 {
            assert!((pct_sum - 100.0).abs() < EPSILON, "percentages sum to {}", pct_sum);
        } else {
            assert_eq!(pct_sum, 0.0);
        }
    }

    #[test]
    fn test_aws_scenario_by_example() {
        let record = create_aws_record();
        let reports = flatten_examples(&record);

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.provider_name, "aws");
        assert_eq!(report.example_name, "ex1");
        assert!(!report.is_duplicated);
        assert_eq!(report.original_source, Some("resource \"aws_s3_bucket\" \"b\" {}"));
        assert_eq!(report.failed_languages.len(), 1);
        assert_eq!(report.failed_languages[0].target_language, "go");
        assert_eq!(report.failed_languages[0].severity, Severity::Failure);
        assert_eq!(report.failed_languages[0].error_detail, "parse error");
    }

    #[test]
    fn test_aws_scenario_by_language() {
        let stats = summarize_by_language(&create_aws_record());

        assert_eq!(stats.len(), 2);
        assert_eq!(stats["python"].total, 1);
        assert_eq!(stats["python"].counts.successes.pct, 100.0);
        assert!(stats["python"].frequent_errors.is_empty());
        assert_eq!(stats["go"].total, 1);
        assert_eq!(stats["go"].counts.failures.number, 1);
        assert_eq!(stats["go"].counts.failures.pct, 100.0);
        assert_eq!(stats["go"].frequent_errors.len(), 1);
        assert_eq!(stats["go"].frequent_errors[0].reason, "parse error");
        assert_eq!(stats["go"].frequent_errors[0].count, 1);
    }

    #[test]
    fn test_aws_scenario_provider() {
        let stat = summarize_provider(&create_aws_record());

        assert_eq!(stat.name, "aws");
        assert_eq!(stat.version, "5.0.0");
        assert_eq!(stat.examples, 1);
        assert_eq!(stat.total_conversions, 2);
        assert_eq!(stat.counts.successes.pct, 50.0);
        assert_eq!(stat.counts.failures.pct, 50.0);
    }

    #[test]
    fn test_all_success_example_has_no_failure_detail() {
        let mut record = CoverageRecord::new("aws", "1.0.0");
        record.record_conversion("ok", "src", ConversionResult::success("python"));
        record.record_conversion("ok", "", ConversionResult::success("go"));

        let reports = flatten_examples(&record);
        assert_eq!(reports[0].original_source, None);
        assert!(reports[0].failed_languages.is_empty());
    }

    #[test]
    fn test_is_duplicated_reflects_any_attempt() {
        let record = create_mixed_record();
        let reports = flatten_examples(&record);
        let duplicated: Vec<(&str, bool)> = reports.iter().map(|r| (r.example_name, r.is_duplicated)).collect();
        assert_eq!(duplicated, vec![("a", false), ("b", false), ("c", true)]);
    }

    #[test]
    fn test_counts_add_up_per_language_and_overall() {
        let record = create_mixed_record();

        for (language, stat) in summarize_by_language(&record) {
            assert!(stat.total > 0, "{} should have attempts", language);
            assert_counts_consistent(&stat.counts, stat.total);
        }

        let provider = summarize_provider(&record);
        assert_eq!(provider.total_conversions, 8);
        assert_eq!(provider.examples, 3);
        assert_counts_consistent(&provider.counts, provider.total_conversions);
        assert_eq!(provider.counts.successes.number, 3);
        assert_eq!(provider.counts.warnings.number, 2);
        assert_eq!(provider.counts.failures.number, 2);
        assert_eq!(provider.counts.fatals.number, 1);
    }

    #[test]
    fn test_provider_errors_sorted_by_count_then_reverse_reason() {
        let provider = summarize_provider(&create_mixed_record());
        let errors: Vec<(&str, usize)> =
            provider.conversion_errors.iter().map(|e| (e.reason.as_str(), e.count)).collect();

        assert_eq!(errors, vec![("unused import", 2), ("bad type", 2), ("panic", 1)]);
    }

    #[test]
    fn test_equal_counts_are_reverse_alphabetical() {
        let mut record = CoverageRecord::new("aws", "1.0.0");
        record.record_conversion("x", "", ConversionResult::failure("go", Severity::Failure, "alpha"));
        record.record_conversion("y", "", ConversionResult::failure("go", Severity::Fatal, "beta"));

        let stats = summarize_by_language(&record);
        let reasons: Vec<&str> = stats["go"].frequent_errors.iter().map(|e| e.reason.as_str()).collect();
        assert_eq!(reasons, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_success_detail_is_not_counted() {
        let mut record = CoverageRecord::new("aws", "1.0.0");
        let mut ok = ConversionResult::success("go");
        ok.error_detail = "stale detail".to_string();
        record.record_conversion("x", "", ok);

        assert!(summarize_provider(&record).conversion_errors.is_empty());
        assert!(summarize_by_language(&record)["go"].frequent_errors.is_empty());
    }

    #[test]
    fn test_sort_errors_orders_histogram() {
        let histogram: HashMap<&str, usize> = [("a", 1), ("c", 3), ("b", 3), ("d", 2)].into_iter().collect();
        let reasons: Vec<String> = sort_errors(histogram).into_iter().map(|e| e.reason).collect();
        assert_eq!(reasons, vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_empty_record() {
        let record = CoverageRecord::new("empty", "0.0.0");

        assert!(flatten_examples(&record).is_empty());
        assert!(summarize_by_language(&record).is_empty());

        let provider = summarize_provider(&record);
        assert_eq!(provider.examples, 0);
        assert_eq!(provider.total_conversions, 0);
        assert_counts_consistent(&provider.counts, 0);
        assert_eq!(provider.counts.successes.pct, 0.0);
        assert!(!provider.counts.successes.pct.is_nan());

        let (overall, by_language) = tally_successes(&record);
        assert_eq!(overall.total, 0);
        assert_eq!(overall.rate(), 0.0);
        assert!(by_language.is_empty());
    }

    #[test]
    fn test_example_without_attempts() {
        let mut record = CoverageRecord::new("aws", "1.0.0");
        record.insert_example(Example::new("lonely", "src"));

        let provider = summarize_provider(&record);
        assert_eq!(provider.examples, 1);
        assert_eq!(provider.total_conversions, 0);
        assert_eq!(provider.counts.fatals.pct, 0.0);

        let reports = flatten_examples(&record);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].original_source, None);
    }

    #[test]
    fn test_tally_successes() {
        let record = create_mixed_record();
        let (overall, by_language) = tally_successes(&record);

        assert_eq!(overall.successes, 3);
        assert_eq!(overall.total, 8);
        let languages: Vec<&str> = by_language.keys().copied().collect();
        assert_eq!(languages, vec!["csharp", "go", "python"]);
        assert_eq!(by_language["python"].successes, 2);
        assert_eq!(by_language["python"].total, 3);
        assert_eq!(by_language["csharp"].successes, 0);
    }
}
