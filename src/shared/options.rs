//! Zentrale Konfiguration für den Logo Grid Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::overlays::OverlayVisibility;
use crate::svg::DimensionFallback;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Anzahl der Rasterfelder entlang der kürzeren viewBox-Seite.
pub const GRID_DIVISIONS: u32 = 20;
/// Obergrenze für die einstellbare Rasterteilung.
pub const MAX_GRID_DIVISIONS: u32 = 500;

// ── Picking ─────────────────────────────────────────────────────────

/// Kantenlänge der Anker-Markierung in viewBox-Einheiten.
pub const ANCHOR_SIZE: f64 = 8.0;
/// Pick-Radius für Handle-Enden in viewBox-Einheiten.
pub const HANDLE_PICK_RADIUS: f64 = ANCHOR_SIZE / 2.0;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl gespeicherter Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Import ──────────────────────────────────────────────────────────

/// Rand um die berechnete Inhalts-viewBox (Anteil der Ausdehnung).
pub const VIEWBOX_PADDING_RATIO: f64 = 0.05;
/// Seitenlänge der Notfall-viewBox, wenn das SVG gar keine Maße liefert.
pub const FALLBACK_SIZE: f64 = 100.0;

// ── Overlay-Darstellung ────────────────────────────────────────────

/// Farbe der Anker (RGBA: Cyan).
pub const ANCHOR_COLOR: [f32; 4] = [0.13, 0.83, 0.93, 1.0];
/// Farbe der Handle-Linien und -Enden (RGBA: Fuchsia).
pub const HANDLE_COLOR: [f32; 4] = [0.85, 0.27, 0.94, 1.0];
/// Farbe der Begrenzungsrechtecke (RGBA: Gelb).
pub const OUTLINE_COLOR: [f32; 4] = [0.98, 0.8, 0.08, 1.0];
/// Farbe der Rasterlinien (RGBA: Schiefer, halbtransparent).
pub const GRID_COLOR: [f32; 4] = [0.2, 0.25, 0.33, 0.7];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `logo_grid_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rasterfelder entlang der kürzeren viewBox-Seite
    pub grid_divisions: u32,
    /// Drag-Positionen auf den nächsten Rasterschnittpunkt einrasten
    #[serde(default)]
    pub snap_to_grid: bool,

    // ── Picking ─────────────────────────────────────────────────
    /// Anker-Größe in viewBox-Einheiten
    pub anchor_size: f64,
    /// Pick-Radius für Handle-Enden in viewBox-Einheiten
    pub handle_pick_radius: f64,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    // ── Import ──────────────────────────────────────────────────
    /// Rand um die berechnete Inhalts-viewBox
    pub viewbox_padding_ratio: f64,
    /// Seitenlänge der Notfall-viewBox
    pub fallback_size: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Farbe der Anker
    pub anchor_color: [f32; 4],
    /// Farbe der Handles
    pub handle_color: [f32; 4],
    /// Farbe der Begrenzungsrechtecke
    pub outline_color: [f32; 4],
    /// Farbe der Rasterlinien
    pub grid_color: [f32; 4],
    /// Sichtbare Overlays beim Start
    #[serde(default)]
    pub overlays: OverlayVisibility,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_divisions: GRID_DIVISIONS,
            snap_to_grid: false,

            anchor_size: ANCHOR_SIZE,
            handle_pick_radius: HANDLE_PICK_RADIUS,

            history_depth: HISTORY_DEPTH,

            viewbox_padding_ratio: VIEWBOX_PADDING_RATIO,
            fallback_size: FALLBACK_SIZE,

            anchor_color: ANCHOR_COLOR,
            handle_color: HANDLE_COLOR,
            outline_color: OUTLINE_COLOR,
            grid_color: GRID_COLOR,
            overlays: OverlayVisibility::default(),
        }
    }
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
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("logo_grid_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("logo_grid_editor.toml")
    }

    /// Fallback-Werte für den SVG-Import.
    pub fn dimension_fallback(&self) -> DimensionFallback {
        DimensionFallback {
            padding_ratio: self.viewbox_padding_ratio,
            default_size: self.fallback_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_toml_roundtrip() {
        let opts = EditorOptions::default();
        let text = toml::to_string_pretty(&opts).expect("TOML erwartet");
        let back: EditorOptions = toml::from_str(&text).expect("Optionen erwartet");
        assert_eq!(back, opts);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let mut table: toml::Table =
            toml::from_str(&toml::to_string(&EditorOptions::default()).expect("TOML erwartet"))
                .expect("Tabelle erwartet");
        table.remove("history_depth");
        table.remove("overlays");
        table.remove("snap_to_grid");

        let opts: EditorOptions =
            toml::from_str(&toml::to_string(&table).expect("TOML erwartet"))
                .expect("Optionen erwartet");
        assert_eq!(opts.history_depth, HISTORY_DEPTH);
        assert!(opts.overlays.grid);
        assert!(!opts.snap_to_grid);
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("logo_grid_editor_options_test");
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis erwartet");
        let path = dir.join("broken.toml");
        std::fs::write(&path, "grid_divisions = \"viele\"").expect("Schreiben erwartet");

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
        assert_eq!(
            EditorOptions::load_from_file(&dir.join("fehlt.toml")),
            EditorOptions::default()
        );
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("logo_grid_editor_options_save");
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis erwartet");
        let path = dir.join("opts.toml");

        let opts = EditorOptions {
            grid_divisions: 12,
            snap_to_grid: true,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern erwartet");
        assert_eq!(EditorOptions::load_from_file(&path), opts);
    }
}
