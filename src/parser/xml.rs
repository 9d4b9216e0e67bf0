//! Adapter for the legacy XML list export.
//!
//! The export is a `myinfo` header followed by flat `anime`/`manga`
//! elements. The document is first pulled into per-element string maps,
//! then every field is checked exactly once while building the typed
//! entries. The format ships complete records, so a missing child
//! element is a data-integrity failure, not something to default.

use super::coerce::{parse_f64, parse_short_date, parse_u8, parse_u32, strtobool};
use super::error::ParseError;
use crate::models::export::{ExportInfo, InfoValue, XmlAnimeEntry, XmlExport, XmlMangaEntry};
use serde::Deserialize;
use std::collections::BTreeMap;

type FieldMap = BTreeMap<String, String>;

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    myinfo: FieldMap,
    #[serde(default)]
    anime: Vec<FieldMap>,
    #[serde(default)]
    manga: Vec<FieldMap>,
}

/// Parses a full XML export document. A `user_export_type` of 1 selects
/// the anime schema, anything else selects manga.
pub fn parse_xml(xml: &str) -> Result<XmlExport, ParseError> {
    let doc: RawDocument = quick_xml::de::from_str(xml)?;

    let info: ExportInfo = doc
        .myinfo
        .iter()
        .map(|(name, text)| (name.clone(), InfoValue::from_text(text)))
        .collect();

    let export_type = info
        .get("user_export_type")
        .and_then(InfoValue::as_int)
        .ok_or_else(|| ParseError::missing("myinfo", "user_export_type"))?;

    if export_type == 1 {
        let entries = doc
            .anime
            .iter()
            .map(anime_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(XmlExport::Anime { info, entries })
    } else {
        let entries = doc
            .manga
            .iter()
            .map(manga_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(XmlExport::Manga { info, entries })
    }
}

fn field<'a>(
    fields: &'a FieldMap,
    record: &'static str,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or(ParseError::MissingField {
            record,
            field: name,
        })
}

fn anime_entry(fields: &FieldMap) -> Result<XmlAnimeEntry, ParseError> {
    let f = |name: &'static str| field(fields, "anime", name);
    Ok(XmlAnimeEntry {
        anime_id: parse_u32(f("series_animedb_id")?)?,
        title: f("series_title")?.to_string(),
        media_type: f("series_type")?.to_string(),
        episodes: parse_u32(f("series_episodes")?)?,
        my_id: parse_u32(f("my_id")?)?,
        watched_episodes: parse_u32(f("my_watched_episodes")?)?,
        start_date: parse_short_date(f("my_start_date")?),
        finish_date: parse_short_date(f("my_finish_date")?),
        rated: f("my_rated")?.to_string(),
        score: parse_u8(f("my_score")?)?,
        storage: f("my_storage")?.to_string(),
        storage_value: parse_f64(f("my_storage_value")?)?,
        status: f("my_status")?.to_string(),
        comments: f("my_comments")?.to_string(),
        times_watched: parse_u32(f("my_times_watched")?)?,
        rewatch_value: f("my_rewatch_value")?.to_string(),
        priority: f("my_priority")?.to_string(),
        tags: f("my_tags")?.to_string(),
        rewatching: strtobool(f("my_rewatching")?)?,
        rewatching_ep: parse_u32(f("my_rewatching_ep")?)?,
        discuss: strtobool(f("my_discuss")?)?,
        sns: f("my_sns")?.to_string(),
        update_on_import: strtobool(f("update_on_import")?)?,
    })
}

fn manga_entry(fields: &FieldMap) -> Result<XmlMangaEntry, ParseError> {
    let f = |name: &'static str| field(fields, "manga", name);
    Ok(XmlMangaEntry {
        manga_id: parse_u32(f("manga_mangadb_id")?)?,
        title: f("manga_title")?.to_string(),
        volumes: parse_u32(f("manga_volumes")?)?,
        chapters: parse_u32(f("manga_chapters")?)?,
        my_id: parse_u32(f("my_id")?)?,
        read_volumes: parse_u32(f("my_read_volumes")?)?,
        read_chapters: parse_u32(f("my_read_chapters")?)?,
        start_date: parse_short_date(f("my_start_date")?),
        finish_date: parse_short_date(f("my_finish_date")?),
        // The export really does spell the element this way.
        scanlation_group: f("my_scanalation_group")?.to_string(),
        score: parse_u8(f("my_score")?)?,
        storage: f("my_storage")?.to_string(),
        retail_volumes: parse_u32(f("my_retail_volumes")?)?,
        status: f("my_status")?.to_string(),
        comments: f("my_comments")?.to_string(),
        times_read: parse_u32(f("my_times_read")?)?,
        tags: f("my_tags")?.to_string(),
        priority: f("my_priority")?.to_string(),
        reread_value: f("my_reread_value")?.to_string(),
        rereading: strtobool(f("my_rereading")?)?,
        discuss: strtobool(f("my_discuss")?)?,
        sns: f("my_sns")?.to_string(),
        update_on_import: strtobool(f("update_on_import")?)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::ListKind;
    use chrono::NaiveDate;

    fn anime_element(id: u32, title: &str, start_date: &str, rewatching_ep: u32) -> String {
        format!(
            r"<anime>
                <series_animedb_id>{id}</series_animedb_id>
                <series_title><![CDATA[{title}]]></series_title>
                <series_type>TV</series_type>
                <series_episodes>26</series_episodes>
                <my_id>0</my_id>
                <my_watched_episodes>26</my_watched_episodes>
                <my_start_date>{start_date}</my_start_date>
                <my_finish_date>0000-00-00</my_finish_date>
                <my_rated></my_rated>
                <my_score>9</my_score>
                <my_storage></my_storage>
                <my_storage_value>0.00</my_storage_value>
                <my_status>Completed</my_status>
                <my_comments><![CDATA[]]></my_comments>
                <my_times_watched>1</my_times_watched>
                <my_rewatch_value>High</my_rewatch_value>
                <my_priority>LOW</my_priority>
                <my_tags><![CDATA[space, jazz]]></my_tags>
                <my_rewatching>0</my_rewatching>
                <my_rewatching_ep>{rewatching_ep}</my_rewatching_ep>
                <my_discuss>1</my_discuss>
                <my_sns>default</my_sns>
                <update_on_import>0</update_on_import>
            </anime>"
        )
    }

    fn anime_export(entries: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>
<myanimelist>
    <myinfo>
        <user_id>5423</user_id>
        <user_name>testuser</user_name>
        <user_export_type>1</user_export_type>
        <user_total_anime>2</user_total_anime>
    </myinfo>
    {entries}
</myanimelist>"#
        )
    }

    #[test]
    fn parses_anime_export() {
        let doc = anime_export(&format!(
            "{}{}",
            anime_element(1, "Cowboy Bebop", "2019-04-01", 0),
            anime_element(30, "Neon Genesis Evangelion", "0000-00-00", 5),
        ));
        let export = parse_xml(&doc).unwrap();

        assert_eq!(export.kind(), ListKind::Anime);
        assert_eq!(export.len(), 2);

        let XmlExport::Anime { info, entries } = export else {
            panic!("expected anime export");
        };
        assert_eq!(info.get("user_id"), Some(&InfoValue::Int(5423)));
        assert_eq!(
            info.get("user_name"),
            Some(&InfoValue::Text("testuser".to_string()))
        );

        assert_eq!(entries[0].anime_id, 1);
        assert_eq!(entries[0].title, "Cowboy Bebop");
        assert_eq!(
            entries[0].start_date,
            NaiveDate::from_ymd_opt(2019, 4, 1)
        );
        assert_eq!(entries[0].finish_date, None);
        assert_eq!(entries[0].tags, "space, jazz");
        assert!(!entries[0].rewatching);
        assert!(entries[0].discuss);

        // Document order, no sorting.
        assert_eq!(entries[1].anime_id, 30);
        assert_eq!(entries[1].start_date, None);
        assert_eq!(entries[1].rewatching_ep, 5);
    }

    #[test]
    fn export_type_other_than_one_is_manga() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8" ?>
<myanimelist>
    <myinfo>
        <user_export_type>2</user_export_type>
    </myinfo>
</myanimelist>"#;
        let export = parse_xml(doc).unwrap();
        assert_eq!(export.kind(), ListKind::Manga);
        assert!(export.is_empty());
    }

    #[test]
    fn parses_manga_entries() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8" ?>
<myanimelist>
    <myinfo>
        <user_export_type>2</user_export_type>
    </myinfo>
    <manga>
        <manga_mangadb_id>2</manga_mangadb_id>
        <manga_title><![CDATA[Berserk]]></manga_title>
        <manga_volumes>0</manga_volumes>
        <manga_chapters>0</manga_chapters>
        <my_id>0</my_id>
        <my_read_volumes>12</my_read_volumes>
        <my_read_chapters>100</my_read_chapters>
        <my_start_date>2021-01-02</my_start_date>
        <my_finish_date>0000-00-00</my_finish_date>
        <my_scanalation_group><![CDATA[]]></my_scanalation_group>
        <my_score>10</my_score>
        <my_storage></my_storage>
        <my_retail_volumes>0</my_retail_volumes>
        <my_status>Reading</my_status>
        <my_comments><![CDATA[]]></my_comments>
        <my_times_read>0</my_times_read>
        <my_tags><![CDATA[]]></my_tags>
        <my_priority>LOW</my_priority>
        <my_reread_value></my_reread_value>
        <my_rereading>NO</my_rereading>
        <my_discuss>0</my_discuss>
        <my_sns>default</my_sns>
        <update_on_import>1</update_on_import>
    </manga>
</myanimelist>"#;
        let XmlExport::Manga { entries, .. } = parse_xml(doc).unwrap() else {
            panic!("expected manga export");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].manga_id, 2);
        assert_eq!(entries[0].read_chapters, 100);
        assert_eq!(
            entries[0].start_date,
            NaiveDate::from_ymd_opt(2021, 1, 2)
        );
        assert!(!entries[0].rereading);
        assert!(entries[0].update_on_import);
    }

    #[test]
    fn missing_child_element_is_fatal() {
        let element = anime_element(1, "X", "0000-00-00", 0).replace(
            "<my_score>9</my_score>",
            "",
        );
        let doc = anime_export(&element);
        let err = parse_xml(&doc).unwrap_err();
        match err {
            ParseError::MissingField { record, field } => {
                assert_eq!(record, "anime");
                assert_eq!(field, "my_score");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_export_type_is_fatal() {
        let doc = r#"<myanimelist><myinfo><user_id>1</user_id></myinfo></myanimelist>"#;
        assert!(matches!(
            parse_xml(doc),
            Err(ParseError::MissingField {
                record: "myinfo",
                field: "user_export_type"
            })
        ));
    }

    #[test]
    fn not_well_formed_document_fails_up_front() {
        assert!(matches!(
            parse_xml("<myanimelist><myinfo>"),
            Err(ParseError::Xml(_))
        ));
    }

    #[test]
    fn header_coercion_is_digits_only() {
        assert_eq!(InfoValue::from_text("450"), InfoValue::Int(450));
        assert_eq!(
            InfoValue::from_text("19.0"),
            InfoValue::Text("19.0".to_string())
        );
        assert_eq!(InfoValue::from_text(""), InfoValue::Text(String::new()));
        assert_eq!(
            InfoValue::from_text("-3"),
            InfoValue::Text("-3".to_string())
        );
    }
}
