//! Adapter for scraped per-title history documents.

use super::error::ParseError;
use crate::models::history::HistoryEntry;

/// Parses one history document: the watch/read events for one title.
pub fn parse_history(payload: &str) -> Result<HistoryEntry, ParseError> {
    Ok(serde_json::from_str(payload)?)
}
