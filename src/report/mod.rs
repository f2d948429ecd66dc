//! Coverage report generation - aggregation and export.
//!
//! This module handles:
//! - Flattening the Coverage Record into per-example entries
//! - Per-language and provider-wide statistics with error histograms
//! - The plain-text digest for CI terminals
//! - Writing all four artifacts to the output directory
//!
//! # Module Organization
//!
//! - `types` - Serialized report shapes (NumPct, ErrorMessage, LanguageStatistic, ProviderStatistic)
//! - `stats` - Aggregation passes over the record
//! - `simple` - Plain-text digest rendering
//! - `export` - File output and the fail-fast export sequence

mod export;
mod simple;
mod stats;
mod types;

pub use export::{clean_outputs, export};
pub use simple::format_short_summary;
