//! Zentrale Konfiguration für den Linienweg-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Linienweg ───────────────────────────────────────────────────────

/// Standard-Farbe eines Linienwegs (RGBA: Blau).
pub const PATH_COLOR_DEFAULT: [f32; 4] = [0.0, 0.47, 0.8, 1.0];
/// Linienbreite des Linienwegs in Pixeln.
pub const PATH_WIDTH_PX: f32 = 6.0;
/// Farbe offener Randknoten (RGBA: Orange).
pub const BOUNDARY_NODE_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

// ── Richtungspfeile ─────────────────────────────────────────────────

/// Abstand der Richtungspfeile entlang einer Polyline in Metern.
pub const ARROW_INTERVAL_M: f64 = 150.0;
/// Pfeilgröße in Pixeln.
pub const ARROW_SIZE_PX: f32 = 10.0;

// ── Nachbar-Kandidaten ──────────────────────────────────────────────

/// Farbe unbenutzter Kandidaten (RGBA: Grün).
pub const CANDIDATE_COLOR_UNUSED: [f32; 4] = [0.2, 0.8, 0.3, 1.0];
/// Farbe bereits von anderen Linienwegen genutzter Kandidaten (RGBA: Violett).
pub const CANDIDATE_COLOR_USED: [f32; 4] = [0.6, 0.3, 0.9, 1.0];

// ── Kopieren ────────────────────────────────────────────────────────

/// Farbe der zu kopierenden Teilstrecke (RGBA: Türkis).
pub const COPY_SELECTED_COLOR: [f32; 4] = [0.0, 0.8, 0.8, 1.0];
/// Farbe der verworfenen Teilstrecke (RGBA: Grau).
pub const COPY_DISCARDED_COLOR: [f32; 4] = [0.55, 0.55, 0.55, 0.6];

// ── Verlauf ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

/// Laufzeit-Optionen des Editors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Linienweg ────────────────────────────────────────────────
    /// Standard-Farbe neuer Linienwege
    pub path_color_default: [f32; 4],
    /// Linienbreite in Pixeln
    pub path_width_px: f32,
    /// Farbe offener Randknoten
    pub boundary_node_color: [f32; 4],

    // ── Richtungspfeile ──────────────────────────────────────────
    /// Pfeilabstand in Metern
    pub arrow_interval_m: f64,
    /// Pfeilgröße in Pixeln
    pub arrow_size_px: f32,

    // ── Kandidaten ───────────────────────────────────────────────
    /// Farbe unbenutzter Kandidaten
    pub candidate_color_unused: [f32; 4],
    /// Farbe genutzter Kandidaten
    pub candidate_color_used: [f32; 4],
    /// Nutzungszähler an Kandidaten anzeigen
    #[serde(default = "default_show_usage_badges")]
    pub show_usage_badges: bool,

    // ── Kopieren ─────────────────────────────────────────────────
    /// Farbe der zu kopierenden Teilstrecke
    pub copy_selected_color: [f32; 4],
    /// Farbe der verworfenen Teilstrecke
    pub copy_discarded_color: [f32; 4],

    // ── Verlauf ──────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            path_color_default: PATH_COLOR_DEFAULT,
            path_width_px: PATH_WIDTH_PX,
            boundary_node_color: BOUNDARY_NODE_COLOR,

            arrow_interval_m: ARROW_INTERVAL_M,
            arrow_size_px: ARROW_SIZE_PX,

            candidate_color_unused: CANDIDATE_COLOR_UNUSED,
            candidate_color_used: CANDIDATE_COLOR_USED,
            show_usage_badges: true,

            copy_selected_color: COPY_SELECTED_COLOR,
            copy_discarded_color: COPY_DISCARDED_COLOR,

            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `show_usage_badges` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_usage_badges() -> bool {
    true
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("route_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("route_path_editor.toml")
    }

    /// Kandidatenfarbe abhängig davon, ob andere Linienwege das Segment nutzen.
    pub fn candidate_color(&self, used: bool) -> [f32; 4] {
        if used {
            self.candidate_color_used
        } else {
            self.candidate_color_unused
        }
    }
}
