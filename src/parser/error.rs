use thiserror::Error;

/// Errors raised while normalizing raw list/export data.
///
/// Everything here is fatal for the parse call that produced it: a
/// missing field or an unknown status code means the upstream format
/// drifted, and a partial result would hide that.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing field `{field}` in {record}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("unknown code {code} in {table} table")]
    UnknownEnumCode { table: &'static str, code: i64 },

    #[error("cannot parse `{value}` as {expected}")]
    Format {
        expected: &'static str,
        value: String,
    },

    #[error("malformed XML export: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("malformed list payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    #[must_use]
    pub const fn missing(record: &'static str, field: &'static str) -> Self {
        Self::MissingField { record, field }
    }

    #[must_use]
    pub const fn unknown_code(table: &'static str, code: i64) -> Self {
        Self::UnknownEnumCode { table, code }
    }

    #[must_use]
    pub fn format(expected: &'static str, value: impl Into<String>) -> Self {
        Self::Format {
            expected,
            value: value.into(),
        }
    }
}
