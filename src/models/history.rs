//! Scraped watch/read history records.

use super::entry::ListKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One watched-episode or read-chapter event, with the time the site
/// recorded it. Timestamps travel as epoch seconds on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMark {
    pub number: u32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub at: DateTime<Utc>,
}

/// The scraped history for one title. The combination engine joins
/// these against list/export entries by `id` and `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub title: String,
    pub kind: ListKind,
    #[serde(default)]
    pub marks: Vec<HistoryMark>,
}
