//! On-disk layout of a user's downloaded raw data.
//!
//! The network/automation layer drops files here; everything in this
//! module only reads them. Missing files are normal (a user may never
//! have requested an XML export) and load as `None`/empty so the
//! combination step can run from whatever is present.

use crate::config::Config;
use crate::models::entry::{ListKind, UserList};
use crate::models::export::XmlExport;
use crate::models::history::HistoryEntry;
use crate::parser::{history, list, xml};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct UserDir {
    root: PathBuf,
}

impl UserDir {
    #[must_use]
    pub fn new(config: &Config, username: &str) -> Self {
        Self {
            root: Path::new(&config.general.data_dir).join(username),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn list_path(&self, kind: ListKind) -> PathBuf {
        self.root.join(format!("{kind}list.json"))
    }

    #[must_use]
    pub fn export_path(&self, kind: ListKind) -> PathBuf {
        self.root.join(format!("{kind}list.xml"))
    }

    #[must_use]
    pub fn history_dir(&self) -> PathBuf {
        self.root.join("history")
    }

    pub fn load_list(&self, kind: ListKind) -> Result<Option<UserList>> {
        let path = self.list_path(kind);
        if !path.exists() {
            return Ok(None);
        }
        let payload = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed = list::parse_list(&payload, kind)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(path = %path.display(), entries = parsed.len(), "Loaded list payload");
        Ok(Some(parsed))
    }

    pub fn load_export(&self, kind: ListKind) -> Result<Option<XmlExport>> {
        let path = self.export_path(kind);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed = xml::parse_xml(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if parsed.kind() != kind {
            bail!(
                "{} holds a {} export, expected {}",
                path.display(),
                parsed.kind(),
                kind
            );
        }
        debug!(path = %path.display(), entries = parsed.len(), "Loaded XML export");
        Ok(Some(parsed))
    }

    /// Loads every history document under `history/`, in file-name
    /// order so repeated runs see the same sequence.
    pub fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        let dir = self.history_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for file in WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.path().is_file())
        {
            let path = file.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                warn!(path = %path.display(), "Skipping non-JSON file in history directory");
                continue;
            }
            let payload = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let entry = history::parse_history(&payload)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            entries.push(entry);
        }

        debug!(dir = %dir.display(), titles = entries.len(), "Loaded history");
        Ok(entries)
    }
}
