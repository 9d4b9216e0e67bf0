//! The merged per-title export produced by the combination engine.
//!
//! Intentionally narrower than either source shape: image paths, video
//! flags, SNS/discussion settings and other low-signal fields are
//! pruned during the merge.

use super::entry::{Company, Season};
use super::history::HistoryMark;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CombinedAnime {
    pub id: u32,
    pub title: String,
    pub media_type: String,
    pub episodes: u32,
    pub status: String,
    pub airing_status: String,
    pub score: u8,
    pub watched_episodes: u32,
    pub rewatching: bool,
    pub rewatching_ep: u32,
    pub times_watched: u32,
    pub tags: String,
    pub priority: String,
    pub storage: String,
    pub url: String,
    pub studios: Vec<Company>,
    pub licensors: Vec<Company>,
    pub season: Option<Season>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub air_start_date: Option<NaiveDate>,
    pub air_end_date: Option<NaiveDate>,
    pub days: Option<i64>,
    pub history: Vec<HistoryMark>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinedManga {
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
    pub times_read: u32,
    pub tags: String,
    pub priority: String,
    pub retail: String,
    pub url: String,
    #[serde(rename = "manga_magazines")]
    pub magazines: Vec<Company>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub publish_start_date: Option<NaiveDate>,
    pub publish_end_date: Option<NaiveDate>,
    pub days: Option<i64>,
    pub history: Vec<HistoryMark>,
}

/// Both combined lists for one user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CombinedLists {
    pub anime: Vec<CombinedAnime>,
    pub manga: Vec<CombinedManga>,
}
