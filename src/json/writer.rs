//! Writer für gespeicherte Linienwege.

use super::RoutePathDocument;
use crate::core::RoutePath;
use anyhow::{Context, Result};
use std::path::Path;

/// Serialisiert einen Linienweg als JSON-Dokument.
pub fn write_route_path(path: &RoutePath) -> Result<String> {
    let document = RoutePathDocument {
        route_id: path.route_id().to_string(),
        direction: path.direction(),
        transit_type: path.transit_type(),
        visible: path.visible,
        color: Some(path.color),
        terminal: path.is_terminal(),
        segments: path.segments().to_vec(),
    };
    serde_json::to_string_pretty(&document).context("Linienweg nicht serialisierbar")
}

/// Schreibt einen Linienweg in eine Datei.
pub fn save_route_path(path: &RoutePath, file: &Path) -> Result<()> {
    let content = write_route_path(path)?;
    std::fs::write(file, content)
        .with_context(|| format!("Linienweg-Datei nicht schreibbar: {}", file.display()))?;
    log::info!("Linienweg '{}' gespeichert nach: {}", path.route_id(), file.display());
    Ok(())
}
