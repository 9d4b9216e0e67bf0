//! End-to-end tests: raw payloads through parsing and combination.

use chrono::NaiveDate;
use malarr::models::entry::{ListKind, UserList};
use malarr::models::export::XmlExport;
use malarr::parser::{combine, history, list, xml};

const ANIME_PAYLOAD: &str = r#"[{
    "status": 2,
    "score": 8,
    "tags": "",
    "is_rewatching": 0,
    "num_watched_episodes": 26,
    "anime_title": "X",
    "anime_num_episodes": 26,
    "anime_airing_status": 2,
    "anime_id": 1,
    "anime_studios": [{"id": 14, "name": "Sunrise"}],
    "anime_licensors": null,
    "anime_season": null,
    "has_episode_video": true,
    "has_promotion_video": true,
    "has_video": true,
    "video_url": "/anime/1/X/video",
    "anime_url": "/anime/1/X",
    "anime_image_path": "/images/anime/4/19644.jpg",
    "is_added_to_list": false,
    "anime_media_type_string": "TV",
    "anime_mpaa_rating_string": "R",
    "start_date_string": null,
    "finish_date_string": "0000-00-00",
    "anime_start_date_string": "1998-04-03",
    "anime_end_date_string": "1999-04-24",
    "days_string": null,
    "storage_string": "",
    "priority_string": "Low"
}]"#;

const ANIME_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<myanimelist>
    <myinfo>
        <user_id>5423</user_id>
        <user_name>testuser</user_name>
        <user_export_type>1</user_export_type>
        <user_total_anime>1</user_total_anime>
    </myinfo>
    <anime>
        <series_animedb_id>1</series_animedb_id>
        <series_title><![CDATA[X]]></series_title>
        <series_type>TV</series_type>
        <series_episodes>26</series_episodes>
        <my_id>0</my_id>
        <my_watched_episodes>26</my_watched_episodes>
        <my_start_date>2021-05-01</my_start_date>
        <my_finish_date>0000-00-00</my_finish_date>
        <my_rated></my_rated>
        <my_score>7</my_score>
        <my_storage></my_storage>
        <my_storage_value>0.00</my_storage_value>
        <my_status>Completed</my_status>
        <my_comments><![CDATA[]]></my_comments>
        <my_times_watched>2</my_times_watched>
        <my_rewatch_value>High</my_rewatch_value>
        <my_priority>LOW</my_priority>
        <my_tags><![CDATA[]]></my_tags>
        <my_rewatching>1</my_rewatching>
        <my_rewatching_ep>4</my_rewatching_ep>
        <my_discuss>0</my_discuss>
        <my_sns>default</my_sns>
        <update_on_import>0</update_on_import>
    </anime>
</myanimelist>"#;

const HISTORY_DOC: &str = r#"{
    "id": 1,
    "title": "X",
    "kind": "anime",
    "marks": [{"number": 26, "at": 1620000000}]
}"#;

#[test]
fn list_only_flow_produces_one_canonical_record() {
    let UserList::Anime(entries) = list::parse_list(ANIME_PAYLOAD, ListKind::Anime).unwrap()
    else {
        panic!("expected anime list");
    };
    assert_eq!(entries.len(), 1);

    let combined = combine::combine_anime(&entries, &[], &[]);
    assert_eq!(combined.len(), 1);

    let record = &combined[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.title, "X");
    assert_eq!(record.status, "Completed");
    assert_eq!(record.airing_status, "Finished Airing");
    assert_eq!(record.score, 8);
    assert_eq!(record.start_date, None);
    assert_eq!(record.finish_date, None);
    assert_eq!(record.watched_episodes, 26);
    assert_eq!(record.times_watched, 0);
    assert_eq!(record.studios.len(), 1);
    assert!(record.history.is_empty());

    // Fields outside the export-priority set match the list entry.
    let entry = &entries[0];
    assert_eq!(record.tags, entry.tags);
    assert_eq!(record.url, entry.url);
    assert_eq!(record.air_start_date, entry.air_start_date);
    assert_eq!(record.air_end_date, entry.air_end_date);
}

#[test]
fn export_overrides_rewatch_counters_and_user_dates() {
    let UserList::Anime(entries) = list::parse_list(ANIME_PAYLOAD, ListKind::Anime).unwrap()
    else {
        panic!("expected anime list");
    };
    let export = xml::parse_xml(ANIME_EXPORT).unwrap();
    assert_eq!(export.kind(), ListKind::Anime);
    let XmlExport::Anime {
        entries: export_entries,
        ..
    } = export
    else {
        panic!("expected anime export");
    };

    let combined = combine::combine_anime(&entries, &export_entries, &[]);
    assert_eq!(combined.len(), 1);

    let record = &combined[0];
    assert!(record.rewatching);
    assert_eq!(record.rewatching_ep, 4);
    assert_eq!(record.times_watched, 2);
    assert_eq!(record.start_date, NaiveDate::from_ymd_opt(2021, 5, 1));
    // The export's finish date is the sentinel; nothing to override with.
    assert_eq!(record.finish_date, None);
    // Score stays with the list even though the export disagrees.
    assert_eq!(record.score, 8);
    // Air dates only exist in the list payload.
    assert_eq!(record.air_start_date, NaiveDate::from_ymd_opt(1998, 4, 3));
}

#[test]
fn history_marks_ride_along() {
    let UserList::Anime(entries) = list::parse_list(ANIME_PAYLOAD, ListKind::Anime).unwrap()
    else {
        panic!("expected anime list");
    };
    let watched = history::parse_history(HISTORY_DOC).unwrap();

    let combined = combine::combine_anime(&entries, &[], &[watched]);
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].history.len(), 1);
    assert_eq!(combined[0].history[0].number, 26);
}

#[test]
fn export_metadata_reflects_header_coercion() {
    let export = xml::parse_xml(ANIME_EXPORT).unwrap();
    let value = serde_json::to_value(&export).unwrap();

    assert_eq!(value["list_type"], "anime");
    assert_eq!(value["info"]["user_id"], 5423);
    assert_eq!(value["info"]["user_name"], "testuser");
    assert_eq!(value["entries"][0]["title"], "X");
    assert_eq!(value["entries"][0]["start_date"], "2021-05-01");
    assert_eq!(value["entries"][0]["finish_date"], serde_json::Value::Null);
}

#[test]
fn serialized_shapes_are_stable() {
    let parsed = list::parse_list(ANIME_PAYLOAD, ListKind::Anime).unwrap();
    let value = serde_json::to_value(&parsed).unwrap();

    assert_eq!(value["list_type"], "anime");
    assert!(value["entries"].is_array());
    let entry = &value["entries"][0];
    assert_eq!(entry["id"], 1);
    assert_eq!(entry["status"], "Completed");
    assert_eq!(entry["start_date"], serde_json::Value::Null);
    assert_eq!(entry["air_start_date"], "1998-04-03");

    let manga_payload = r#"[{
        "status": 1,
        "score": 7,
        "tags": "",
        "is_rereading": false,
        "num_read_chapters": 1,
        "num_read_volumes": 1,
        "manga_title": "B",
        "manga_num_chapters": 0,
        "manga_num_volumes": 0,
        "manga_publishing_status": 1,
        "manga_id": 2,
        "manga_magazines": [{"id": 10, "name": "Young Animal"}],
        "manga_url": "/manga/2/B",
        "manga_image_path": "/images/manga/1/x.jpg",
        "is_added_to_list": true,
        "manga_media_type_string": "Manga",
        "start_date_string": null,
        "finish_date_string": null,
        "manga_start_date_string": null,
        "manga_end_date_string": null,
        "days_string": null,
        "retail_string": "",
        "priority_string": "Low"
    }]"#;
    let manga = list::parse_list(manga_payload, ListKind::Manga).unwrap();
    let manga_value = serde_json::to_value(&manga).unwrap();
    let manga_entry = &manga_value["entries"][0];
    // The magazine collection keeps the endpoint's public field name.
    assert!(manga_entry["manga_magazines"].is_array());
    assert_eq!(manga_entry["manga_magazines"][0]["name"], "Young Animal");
}
