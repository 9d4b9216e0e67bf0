//! Record shapes for the legacy XML list export.

use super::entry::ListKind;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Header value from the export preamble. The export emits everything
/// as text; a value that is entirely digits is promoted to an integer
/// once, here, so consumers never re-run the heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InfoValue {
    Int(i64),
    Text(String),
}

impl InfoValue {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = text.parse::<i64>() {
                return Self::Int(n);
            }
        }
        Self::Text(text.to_string())
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// The `myinfo` header block, keyed by element name.
pub type ExportInfo = BTreeMap<String, InfoValue>;

/// One anime row from the XML export.
#[derive(Debug, Clone, Serialize)]
pub struct XmlAnimeEntry {
    pub anime_id: u32,
    pub title: String,
    pub media_type: String,
    pub episodes: u32,
    pub my_id: u32,
    pub watched_episodes: u32,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub rated: String,
    pub score: u8,
    pub storage: String,
    pub storage_value: f64,
    pub status: String,
    pub comments: String,
    pub times_watched: u32,
    pub rewatch_value: String,
    pub priority: String,
    pub tags: String,
    pub rewatching: bool,
    pub rewatching_ep: u32,
    pub discuss: bool,
    pub sns: String,
    pub update_on_import: bool,
}

/// One manga row from the XML export.
#[derive(Debug, Clone, Serialize)]
pub struct XmlMangaEntry {
    pub manga_id: u32,
    pub title: String,
    pub volumes: u32,
    pub chapters: u32,
    pub my_id: u32,
    pub read_volumes: u32,
    pub read_chapters: u32,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub scanlation_group: String,
    pub score: u8,
    pub storage: String,
    pub retail_volumes: u32,
    pub status: String,
    pub comments: String,
    pub times_read: u32,
    pub tags: String,
    pub priority: String,
    pub reread_value: String,
    pub rereading: bool,
    pub discuss: bool,
    pub sns: String,
    pub update_on_import: bool,
}

/// A fully parsed XML export: header metadata plus the homogeneous
/// entry list selected by `user_export_type`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "list_type", rename_all = "lowercase")]
pub enum XmlExport {
    Anime {
        info: ExportInfo,
        entries: Vec<XmlAnimeEntry>,
    },
    Manga {
        info: ExportInfo,
        entries: Vec<XmlMangaEntry>,
    },
}

impl XmlExport {
    #[must_use]
    pub const fn kind(&self) -> ListKind {
        match self {
            Self::Anime { .. } => ListKind::Anime,
            Self::Manga { .. } => ListKind::Manga,
        }
    }

    #[must_use]
    pub const fn info(&self) -> &ExportInfo {
        match self {
            Self::Anime { info, .. } | Self::Manga { info, .. } => info,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Anime { entries, .. } => entries.len(),
            Self::Manga { entries, .. } => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
