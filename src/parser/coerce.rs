//! Scalar coercions for the site's loose field encodings.
//!
//! All sentinel recognition lives here so the XML and JSON adapters
//! never re-implement it.

use super::error::ParseError;
use chrono::NaiveDate;

/// The export writes this in place of an unset date.
const EMPTY_DATE: &str = "0000-00-00";

/// Parses a `YYYY-MM-DD` date string. The empty string, the all-zero
/// sentinel and calendar-invalid values all mean "no date" upstream, so
/// every failure degrades to `None` rather than an error.
#[must_use]
pub fn parse_short_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() || text == EMPTY_DATE {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Parses the site's boolean tokens, case-insensitively. Unlike dates,
/// an unrecognized token here is a schema change worth surfacing, so it
/// fails instead of defaulting.
pub fn strtobool(text: &str) -> Result<bool, ParseError> {
    match text.to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "t" | "true" | "on" => Ok(true),
        "0" | "n" | "no" | "f" | "false" | "off" => Ok(false),
        _ => Err(ParseError::format("boolean", text)),
    }
}

pub(crate) fn parse_u32(text: &str) -> Result<u32, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::format("integer", text))
}

pub(crate) fn parse_u8(text: &str) -> Result<u8, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::format("integer", text))
}

pub(crate) fn parse_f64(text: &str) -> Result<f64, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::format("float", text))
}
