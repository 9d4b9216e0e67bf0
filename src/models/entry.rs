use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two lists a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Anime,
    Manga,
}

impl ListKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }

    /// Guesses the kind from an exported file's name ("animelist.json",
    /// "mangalist.json", ...).
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        if name.contains("anime") {
            Self::Anime
        } else {
            Self::Manga
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A studio, licensor or magazine attached to a list entry. Only built
/// when the raw payload carries both fields; incomplete raw objects are
/// dropped rather than half-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
}

/// Broadcast season of an anime, e.g. `{2020, "spring"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub year: i32,
    pub season: String,
}

/// One anime title as returned by the list endpoint, normalized.
#[derive(Debug, Clone, Serialize)]
pub struct AnimeEntry {
    pub id: u32,
    pub title: String,
    pub media_type: String,
    pub episodes: u32,
    pub status: String,
    pub airing_status: String,
    pub score: u8,
    pub watched_episodes: u32,
    pub rewatching: bool,
    pub tags: String,
    pub priority: String,
    pub storage: String,
    pub rating: String,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub air_start_date: Option<NaiveDate>,
    pub air_end_date: Option<NaiveDate>,
    pub days: Option<i64>,
    pub studios: Vec<Company>,
    pub licensors: Vec<Company>,
    pub season: Option<Season>,
    pub has_episode_video: bool,
    pub has_promotion_video: bool,
    pub has_video: bool,
    pub video_url: String,
    pub url: String,
    pub image_path: String,
    pub is_added_to_list: bool,
}

/// One manga title as returned by the list endpoint, normalized.
#[derive(Debug, Clone, Serialize)]
pub struct MangaEntry {
    pub id: u32,
    pub title: String,
    pub media_type: String,
    pub chapters: u32,
    pub volumes: u32,
    pub status: String,
    pub publishing_status: String,
    pub score: u8,
    pub read_chapters: u32,
    pub read_volumes: u32,
    pub rereading: bool,
    pub tags: String,
    pub priority: String,
    pub retail: String,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub publish_start_date: Option<NaiveDate>,
    pub publish_end_date: Option<NaiveDate>,
    pub days: Option<i64>,
    #[serde(rename = "manga_magazines")]
    pub magazines: Vec<Company>,
    pub url: String,
    pub image_path: String,
    pub is_added_to_list: bool,
}

/// A parsed list. One parse call yields entries of exactly one kind, so
/// the two cases are distinct variants rather than a mixed vector.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "list_type", content = "entries", rename_all = "lowercase")]
pub enum UserList {
    Anime(Vec<AnimeEntry>),
    Manga(Vec<MangaEntry>),
}

impl UserList {
    #[must_use]
    pub const fn kind(&self) -> ListKind {
        match self {
            Self::Anime(_) => ListKind::Anime,
            Self::Manga(_) => ListKind::Manga,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Anime(entries) => entries.len(),
            Self::Manga(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
