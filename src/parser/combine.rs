//! Per-title combination of list, XML export and history data.
//!
//! Entries are joined by id. The list entry supplies the descriptive
//! fields; the XML export, where present, supplies the rewatch/reread
//! counters and the user start/finish dates, which the export format
//! records more reliably than the list endpoint. History contributes
//! the per-title mark vector and nothing else. Any single source alone
//! still produces output records.

use crate::models::combined::{CombinedAnime, CombinedManga};
use crate::models::entry::{AnimeEntry, ListKind, MangaEntry};
use crate::models::export::{XmlAnimeEntry, XmlMangaEntry};
use crate::models::history::{HistoryEntry, HistoryMark};
use std::collections::{HashMap, HashSet};

#[must_use]
pub fn combine_anime(
    list: &[AnimeEntry],
    export: &[XmlAnimeEntry],
    history: &[HistoryEntry],
) -> Vec<CombinedAnime> {
    let export_by_id: HashMap<u32, &XmlAnimeEntry> =
        export.iter().map(|e| (e.anime_id, e)).collect();
    let marks_by_id = index_history(history, ListKind::Anime);
    let marks = |id: u32| -> Vec<HistoryMark> {
        marks_by_id
            .get(&id)
            .map(|h| h.marks.clone())
            .unwrap_or_default()
    };

    let mut seen: HashSet<u32> = HashSet::new();
    let mut combined = Vec::with_capacity(list.len());

    for entry in list {
        seen.insert(entry.id);
        combined.push(merged_anime(
            entry,
            export_by_id.get(&entry.id).copied(),
            marks(entry.id),
        ));
    }

    let mut export_only: Vec<&XmlAnimeEntry> = export
        .iter()
        .filter(|e| !seen.contains(&e.anime_id))
        .collect();
    export_only.sort_by_key(|e| e.anime_id);
    for e in export_only {
        seen.insert(e.anime_id);
        combined.push(anime_from_export(e, marks(e.anime_id)));
    }

    let mut history_only: Vec<&HistoryEntry> = history
        .iter()
        .filter(|h| h.kind == ListKind::Anime && !seen.contains(&h.id))
        .collect();
    history_only.sort_by_key(|h| h.id);
    for h in history_only {
        combined.push(anime_from_history(h));
    }

    combined
}

#[must_use]
pub fn combine_manga(
    list: &[MangaEntry],
    export: &[XmlMangaEntry],
    history: &[HistoryEntry],
) -> Vec<CombinedManga> {
    let export_by_id: HashMap<u32, &XmlMangaEntry> =
        export.iter().map(|e| (e.manga_id, e)).collect();
    let marks_by_id = index_history(history, ListKind::Manga);
    let marks = |id: u32| -> Vec<HistoryMark> {
        marks_by_id
            .get(&id)
            .map(|h| h.marks.clone())
            .unwrap_or_default()
    };

    let mut seen: HashSet<u32> = HashSet::new();
    let mut combined = Vec::with_capacity(list.len());

    for entry in list {
        seen.insert(entry.id);
        combined.push(merged_manga(
            entry,
            export_by_id.get(&entry.id).copied(),
            marks(entry.id),
        ));
    }

    let mut export_only: Vec<&XmlMangaEntry> = export
        .iter()
        .filter(|e| !seen.contains(&e.manga_id))
        .collect();
    export_only.sort_by_key(|e| e.manga_id);
    for e in export_only {
        seen.insert(e.manga_id);
        combined.push(manga_from_export(e, marks(e.manga_id)));
    }

    let mut history_only: Vec<&HistoryEntry> = history
        .iter()
        .filter(|h| h.kind == ListKind::Manga && !seen.contains(&h.id))
        .collect();
    history_only.sort_by_key(|h| h.id);
    for h in history_only {
        combined.push(manga_from_history(h));
    }

    combined
}

fn index_history(history: &[HistoryEntry], kind: ListKind) -> HashMap<u32, &HistoryEntry> {
    history
        .iter()
        .filter(|h| h.kind == kind)
        .map(|h| (h.id, h))
        .collect()
}

fn merged_anime(
    entry: &AnimeEntry,
    export: Option<&XmlAnimeEntry>,
    history: Vec<HistoryMark>,
) -> CombinedAnime {
    CombinedAnime {
        id: entry.id,
        title: entry.title.clone(),
        media_type: entry.media_type.clone(),
        episodes: entry.episodes,
        status: entry.status.clone(),
        airing_status: entry.airing_status.clone(),
        score: entry.score,
        watched_episodes: entry.watched_episodes,
        rewatching: export.map_or(entry.rewatching, |x| x.rewatching),
        rewatching_ep: export.map_or(0, |x| x.rewatching_ep),
        times_watched: export.map_or(0, |x| x.times_watched),
        tags: entry.tags.clone(),
        priority: entry.priority.clone(),
        storage: entry.storage.clone(),
        url: entry.url.clone(),
        studios: entry.studios.clone(),
        licensors: entry.licensors.clone(),
        season: entry.season.clone(),
        // A sentinel date in the export falls back to the list date, so
        // an empty export never erases a list-supplied date.
        start_date: export.and_then(|x| x.start_date).or(entry.start_date),
        finish_date: export.and_then(|x| x.finish_date).or(entry.finish_date),
        air_start_date: entry.air_start_date,
        air_end_date: entry.air_end_date,
        days: entry.days,
        history,
    }
}

fn anime_from_export(x: &XmlAnimeEntry, history: Vec<HistoryMark>) -> CombinedAnime {
    CombinedAnime {
        id: x.anime_id,
        title: x.title.clone(),
        media_type: x.media_type.clone(),
        episodes: x.episodes,
        status: x.status.clone(),
        airing_status: String::new(),
        score: x.score,
        watched_episodes: x.watched_episodes,
        rewatching: x.rewatching,
        rewatching_ep: x.rewatching_ep,
        times_watched: x.times_watched,
        tags: x.tags.clone(),
        priority: x.priority.clone(),
        storage: x.storage.clone(),
        url: String::new(),
        studios: Vec::new(),
        licensors: Vec::new(),
        season: None,
        start_date: x.start_date,
        finish_date: x.finish_date,
        air_start_date: None,
        air_end_date: None,
        days: None,
        history,
    }
}

fn anime_from_history(h: &HistoryEntry) -> CombinedAnime {
    CombinedAnime {
        id: h.id,
        title: h.title.clone(),
        media_type: String::new(),
        episodes: 0,
        status: String::new(),
        airing_status: String::new(),
        score: 0,
        watched_episodes: 0,
        rewatching: false,
        rewatching_ep: 0,
        times_watched: 0,
        tags: String::new(),
        priority: String::new(),
        storage: String::new(),
        url: String::new(),
        studios: Vec::new(),
        licensors: Vec::new(),
        season: None,
        start_date: None,
        finish_date: None,
        air_start_date: None,
        air_end_date: None,
        days: None,
        history: h.marks.clone(),
    }
}

fn merged_manga(
    entry: &MangaEntry,
    export: Option<&XmlMangaEntry>,
    history: Vec<HistoryMark>,
) -> CombinedManga {
    CombinedManga {
        id: entry.id,
        title: entry.title.clone(),
        media_type: entry.media_type.clone(),
        chapters: entry.chapters,
        volumes: entry.volumes,
        status: entry.status.clone(),
        publishing_status: entry.publishing_status.clone(),
        score: entry.score,
        read_chapters: entry.read_chapters,
        read_volumes: entry.read_volumes,
        rereading: export.map_or(entry.rereading, |x| x.rereading),
        times_read: export.map_or(0, |x| x.times_read),
        tags: entry.tags.clone(),
        priority: entry.priority.clone(),
        retail: entry.retail.clone(),
        url: entry.url.clone(),
        magazines: entry.magazines.clone(),
        start_date: export.and_then(|x| x.start_date).or(entry.start_date),
        finish_date: export.and_then(|x| x.finish_date).or(entry.finish_date),
        publish_start_date: entry.publish_start_date,
        publish_end_date: entry.publish_end_date,
        days: entry.days,
        history,
    }
}

fn manga_from_export(x: &XmlMangaEntry, history: Vec<HistoryMark>) -> CombinedManga {
    CombinedManga {
        id: x.manga_id,
        title: x.title.clone(),
        media_type: String::new(),
        chapters: x.chapters,
        volumes: x.volumes,
        status: x.status.clone(),
        publishing_status: String::new(),
        score: x.score,
        read_chapters: x.read_chapters,
        read_volumes: x.read_volumes,
        rereading: x.rereading,
        times_read: x.times_read,
        tags: x.tags.clone(),
        priority: x.priority.clone(),
        retail: String::new(),
        url: String::new(),
        magazines: Vec::new(),
        start_date: x.start_date,
        finish_date: x.finish_date,
        publish_start_date: None,
        publish_end_date: None,
        days: None,
        history,
    }
}

fn manga_from_history(h: &HistoryEntry) -> CombinedManga {
    CombinedManga {
        id: h.id,
        title: h.title.clone(),
        media_type: String::new(),
        chapters: 0,
        volumes: 0,
        status: String::new(),
        publishing_status: String::new(),
        score: 0,
        read_chapters: 0,
        read_volumes: 0,
        rereading: false,
        times_read: 0,
        tags: String::new(),
        priority: String::new(),
        retail: String::new(),
        url: String::new(),
        magazines: Vec::new(),
        start_date: None,
        finish_date: None,
        publish_start_date: None,
        publish_end_date: None,
        days: None,
        history: h.marks.clone(),
    }
}
