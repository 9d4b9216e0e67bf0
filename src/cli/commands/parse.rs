use crate::models::entry::ListKind;
use crate::parser::{history, list, xml};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn cmd_parse_xml(file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let export = xml::parse_xml(&contents)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    info!(
        list_type = %export.kind(),
        entries = export.len(),
        "Parsed XML export"
    );
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}

pub fn cmd_parse_list(file: &Path, kind: Option<ListKind>) -> Result<()> {
    let kind = kind.unwrap_or_else(|| {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ListKind::from_file_name(&name)
    });

    let payload = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let parsed = list::parse_list(&payload, kind)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    info!(list_type = %kind, entries = parsed.len(), "Parsed list payload");
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

pub fn cmd_parse_history(file: &Path) -> Result<()> {
    let payload = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let entry = history::parse_history(&payload)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}
