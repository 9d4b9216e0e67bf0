//! Adapter for the list endpoint's JSON payload.
//!
//! Every raw entry is deserialized into a closed intermediate struct
//! whose fields are all optional, then converted with one presence
//! check per required key. Extra keys the site adds later are ignored;
//! a key this parser relies on going missing is fatal for the call.

use super::coerce::{parse_short_date, strtobool};
use super::error::ParseError;
use super::status;
use crate::models::entry::{AnimeEntry, Company, ListKind, MangaEntry, Season, UserList};
use serde::Deserialize;
use serde_json::Value;

const ANIME_RECORD: &str = "anime list entry";
const MANGA_RECORD: &str = "manga list entry";

/// Boolean-ish payload value. The endpoint has shipped these as JSON
/// booleans, 0/1 numbers and strings over the years.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Flag {
    fn truthy(&self) -> Result<bool, ParseError> {
        match self {
            Self::Bool(flag) => Ok(*flag),
            Self::Int(0) => Ok(false),
            Self::Int(1) => Ok(true),
            Self::Int(n) => Err(ParseError::format("boolean", n.to_string())),
            Self::Text(text) => strtobool(text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAnimeItem {
    status: Option<i64>,
    score: Option<u8>,
    tags: Option<String>,
    is_rewatching: Option<Flag>,
    num_watched_episodes: Option<u32>,
    anime_title: Option<String>,
    anime_num_episodes: Option<u32>,
    anime_airing_status: Option<i64>,
    anime_id: Option<u32>,
    anime_studios: Option<Vec<Value>>,
    anime_licensors: Option<Vec<Value>>,
    anime_season: Option<Value>,
    has_episode_video: Option<bool>,
    has_promotion_video: Option<bool>,
    has_video: Option<bool>,
    video_url: Option<String>,
    anime_url: Option<String>,
    anime_image_path: Option<String>,
    is_added_to_list: Option<bool>,
    anime_media_type_string: Option<String>,
    anime_mpaa_rating_string: Option<String>,
    start_date_string: Option<String>,
    finish_date_string: Option<String>,
    anime_start_date_string: Option<String>,
    anime_end_date_string: Option<String>,
    days_string: Option<i64>,
    storage_string: Option<String>,
    priority_string: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMangaItem {
    status: Option<i64>,
    score: Option<u8>,
    tags: Option<String>,
    is_rereading: Option<Flag>,
    num_read_chapters: Option<u32>,
    num_read_volumes: Option<u32>,
    manga_title: Option<String>,
    manga_num_chapters: Option<u32>,
    manga_num_volumes: Option<u32>,
    manga_publishing_status: Option<i64>,
    manga_id: Option<u32>,
    manga_magazines: Option<Vec<Value>>,
    manga_url: Option<String>,
    manga_image_path: Option<String>,
    is_added_to_list: Option<bool>,
    manga_media_type_string: Option<String>,
    start_date_string: Option<String>,
    finish_date_string: Option<String>,
    manga_start_date_string: Option<String>,
    manga_end_date_string: Option<String>,
    days_string: Option<i64>,
    retail_string: Option<String>,
    priority_string: Option<String>,
}

/// Parses a list payload into canonical entries of the caller-declared
/// kind. Output order matches payload order.
pub fn parse_list(payload: &str, kind: ListKind) -> Result<UserList, ParseError> {
    match kind {
        ListKind::Anime => {
            let raw: Vec<RawAnimeItem> = serde_json::from_str(payload)?;
            let entries = raw
                .iter()
                .map(anime_entry)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(UserList::Anime(entries))
        }
        ListKind::Manga => {
            let raw: Vec<RawMangaItem> = serde_json::from_str(payload)?;
            let entries = raw
                .iter()
                .map(manga_entry)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(UserList::Manga(entries))
        }
    }
}

fn require<T>(value: Option<T>, record: &'static str, field: &'static str) -> Result<T, ParseError> {
    value.ok_or(ParseError::MissingField { record, field })
}

/// Builds a `Company` from one raw nested object. Anything short of a
/// complete object with both keys yields `None`; a half-filled company
/// is impossible by construction.
fn company(value: &Value) -> Option<Company> {
    let object = value.as_object()?;
    let id = u32::try_from(object.get("id")?.as_u64()?).ok()?;
    let name = object.get("name")?.as_str()?;
    Some(Company {
        id,
        name: name.to_string(),
    })
}

fn companies(values: Option<&[Value]>) -> Vec<Company> {
    values
        .map(|seq| seq.iter().filter_map(company).collect())
        .unwrap_or_default()
}

fn season(value: Option<&Value>) -> Option<Season> {
    let object = value?.as_object()?;
    let year = i32::try_from(object.get("year")?.as_i64()?).ok()?;
    let season = object.get("season")?.as_str()?;
    Some(Season {
        year,
        season: season.to_string(),
    })
}

fn date(value: Option<&String>) -> Option<chrono::NaiveDate> {
    value.and_then(|text| parse_short_date(text))
}

fn anime_entry(raw: &RawAnimeItem) -> Result<AnimeEntry, ParseError> {
    let r = ANIME_RECORD;
    let status_code = require(raw.status, r, "status")?;
    let airing_code = require(raw.anime_airing_status, r, "anime_airing_status")?;
    Ok(AnimeEntry {
        id: require(raw.anime_id, r, "anime_id")?,
        title: require(raw.anime_title.clone(), r, "anime_title")?,
        media_type: require(raw.anime_media_type_string.clone(), r, "anime_media_type_string")?,
        episodes: require(raw.anime_num_episodes, r, "anime_num_episodes")?,
        status: status::anime_watch_status(status_code)?.to_string(),
        airing_status: status::anime_airing_status(airing_code)?.to_string(),
        score: require(raw.score, r, "score")?,
        watched_episodes: require(raw.num_watched_episodes, r, "num_watched_episodes")?,
        rewatching: require(raw.is_rewatching.clone(), r, "is_rewatching")?.truthy()?,
        tags: require(raw.tags.clone(), r, "tags")?,
        priority: require(raw.priority_string.clone(), r, "priority_string")?,
        storage: require(raw.storage_string.clone(), r, "storage_string")?,
        rating: require(raw.anime_mpaa_rating_string.clone(), r, "anime_mpaa_rating_string")?,
        start_date: date(raw.start_date_string.as_ref()),
        finish_date: date(raw.finish_date_string.as_ref()),
        air_start_date: date(raw.anime_start_date_string.as_ref()),
        air_end_date: date(raw.anime_end_date_string.as_ref()),
        days: raw.days_string,
        studios: companies(raw.anime_studios.as_deref()),
        licensors: companies(raw.anime_licensors.as_deref()),
        season: season(raw.anime_season.as_ref()),
        has_episode_video: require(raw.has_episode_video, r, "has_episode_video")?,
        has_promotion_video: require(raw.has_promotion_video, r, "has_promotion_video")?,
        has_video: require(raw.has_video, r, "has_video")?,
        video_url: require(raw.video_url.clone(), r, "video_url")?,
        url: require(raw.anime_url.clone(), r, "anime_url")?,
        image_path: require(raw.anime_image_path.clone(), r, "anime_image_path")?,
        is_added_to_list: require(raw.is_added_to_list, r, "is_added_to_list")?,
    })
}

fn manga_entry(raw: &RawMangaItem) -> Result<MangaEntry, ParseError> {
    let r = MANGA_RECORD;
    let status_code = require(raw.status, r, "status")?;
    let publishing_code = require(raw.manga_publishing_status, r, "manga_publishing_status")?;
    Ok(MangaEntry {
        id: require(raw.manga_id, r, "manga_id")?,
        title: require(raw.manga_title.clone(), r, "manga_title")?,
        media_type: require(raw.manga_media_type_string.clone(), r, "manga_media_type_string")?,
        chapters: require(raw.manga_num_chapters, r, "manga_num_chapters")?,
        volumes: require(raw.manga_num_volumes, r, "manga_num_volumes")?,
        status: status::manga_read_status(status_code)?.to_string(),
        publishing_status: status::manga_publishing_status(publishing_code)?.to_string(),
        score: require(raw.score, r, "score")?,
        read_chapters: require(raw.num_read_chapters, r, "num_read_chapters")?,
        read_volumes: require(raw.num_read_volumes, r, "num_read_volumes")?,
        rereading: require(raw.is_rereading.clone(), r, "is_rereading")?.truthy()?,
        tags: require(raw.tags.clone(), r, "tags")?,
        priority: require(raw.priority_string.clone(), r, "priority_string")?,
        retail: require(raw.retail_string.clone(), r, "retail_string")?,
        start_date: date(raw.start_date_string.as_ref()),
        finish_date: date(raw.finish_date_string.as_ref()),
        publish_start_date: date(raw.manga_start_date_string.as_ref()),
        publish_end_date: date(raw.manga_end_date_string.as_ref()),
        days: raw.days_string,
        magazines: companies(raw.manga_magazines.as_deref()),
        url: require(raw.manga_url.clone(), r, "manga_url")?,
        image_path: require(raw.manga_image_path.clone(), r, "manga_image_path")?,
        is_added_to_list: require(raw.is_added_to_list, r, "is_added_to_list")?,
    })
}
