//! Parser für gespeicherte Linienwege.

use super::RoutePathDocument;
use crate::core::RoutePath;
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Parsed einen Linienweg aus einem JSON-String und prüft alle Invarianten.
pub fn parse_route_path(json: &str) -> Result<RoutePath> {
    let document: RoutePathDocument =
        serde_json::from_str(json).context("Linienweg ist kein gültiges JSON")?;

    let route_id = document.route_id.clone();
    let mut path = match RoutePath::from_segments(
        document.route_id,
        document.direction,
        document.transit_type,
        document.segments,
    ) {
        Ok(path) => path,
        Err(violations) => {
            let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
            bail!(
                "Linienweg '{}' verletzt {} Invariante(n): {}",
                route_id,
                violations.len(),
                details.join("; ")
            );
        }
    };

    path.visible = document.visible;
    if let Some(color) = document.color {
        path.color = color;
    }
    path.set_terminal(document.terminal);

    log::info!(
        "Linienweg '{}' geladen: {} Segmente, {:?}",
        path.route_id(),
        path.len(),
        path.state()
    );
    Ok(path)
}

/// Liest und parsed einen Linienweg aus einer Datei.
pub fn load_route_path(file: &Path) -> Result<RoutePath> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Linienweg-Datei nicht lesbar: {}", file.display()))?;
    parse_route_path(&content).with_context(|| format!("Fehler in {}", file.display()))
}
