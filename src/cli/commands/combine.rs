use crate::config::Config;
use crate::models::combined::CombinedLists;
use crate::models::entry::{ListKind, UserList};
use crate::models::export::XmlExport;
use crate::parser::combine::{combine_anime, combine_manga};
use crate::storage::UserDir;
use anyhow::Result;
use tracing::info;

pub fn cmd_combine(config: &Config, username: &str, only: Option<ListKind>) -> Result<()> {
    let dir = UserDir::new(config, username);
    if !dir.root().is_dir() {
        anyhow::bail!(
            "No data directory for user `{username}` at {}",
            dir.root().display()
        );
    }

    let history = dir.load_history()?;

    let anime_list = match dir.load_list(ListKind::Anime)? {
        Some(UserList::Anime(entries)) => entries,
        _ => Vec::new(),
    };
    let anime_export = match dir.load_export(ListKind::Anime)? {
        Some(XmlExport::Anime { entries, .. }) => entries,
        _ => Vec::new(),
    };
    let manga_list = match dir.load_list(ListKind::Manga)? {
        Some(UserList::Manga(entries)) => entries,
        _ => Vec::new(),
    };
    let manga_export = match dir.load_export(ListKind::Manga)? {
        Some(XmlExport::Manga { entries, .. }) => entries,
        _ => Vec::new(),
    };

    let combined = CombinedLists {
        anime: combine_anime(&anime_list, &anime_export, &history),
        manga: combine_manga(&manga_list, &manga_export, &history),
    };

    info!(
        anime = combined.anime.len(),
        manga = combined.manga.len(),
        "Combined user data"
    );

    match only {
        Some(ListKind::Anime) => println!("{}", serde_json::to_string_pretty(&combined.anime)?),
        Some(ListKind::Manga) => println!("{}", serde_json::to_string_pretty(&combined.manga)?),
        None => println!("{}", serde_json::to_string_pretty(&combined)?),
    }

    Ok(())
}
