//! Simple plain-text digest of conversion coverage.
//!
//! This is the short summary shown in CI terminal output. It carries counts
//! and success rates only; the JSON reports hold the detail.

use super::stats::tally_successes;
use crate::types::CoverageRecord;
use std::fmt::Write;

/// Render the digest: provider header, blank line, then one line per
/// target language in alphabetical order.
pub fn format_short_summary(record: &CoverageRecord) -> String {
    let (overall, by_language) = tally_successes(record);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        out,
        "Provider:     {}\nSuccess rate: {:.2}% ({}/{})\n\n",
        record.provider_name,
        overall.rate(),
        overall.successes,
        overall.total
    );

    for (language, tally) in &by_language {
        let _ = writeln!(
            out,
            "Converted {:.2}% of {} examples ({}/{})",
            tally.rate(),
            language,
            tally.successes,
            tally.total
        );
    }

    out
}
