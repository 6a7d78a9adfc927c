use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder stored when a book has no availability element.
pub const UNKNOWN_AVAILABILITY: &str = "unknown";

/// One normalized catalog entry.
///
/// Field order here is the column order of the CSV output and the key order
/// of the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub availability: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    EmptyTitle,
    MissingPrice,
    MissingAvailability,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::MissingTitle => "title link not found",
            SkipReason::EmptyTitle => "title attribute is empty",
            SkipReason::MissingPrice => "price element not found",
            SkipReason::MissingAvailability => "availability element not found",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    /// Zero-based position of the container in the document.
    pub index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub records: Vec<BookRecord>,
    pub skipped: Vec<SkippedItem>,
}

impl ExtractionReport {
    pub fn containers_seen(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub cheapest: BookRecord,
    pub most_expensive: BookRecord,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<BookRecord>,
    pub summary: Option<PriceSummary>,
    pub csv_output: String,
    pub json_output: String,
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub records_saved: usize,
    pub csv_path: String,
    pub json_path: String,
    pub summary: Option<PriceSummary>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Saved(LoadReport),
    NothingToSave,
}
