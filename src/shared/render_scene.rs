//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer sie konsumiert.

use super::options::EditorOptions;
use super::OverlayVisibility;
use crate::core::{GridLine, HandleRef, ParsedSvg};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Das aktuelle Dokument (Arc-Klon, kein Deep-Copy)
    pub document: Option<Arc<ParsedSvg>>,
    /// Sichtbare Overlays
    pub overlays: OverlayVisibility,
    /// Rasterlinien (leer, wenn das Raster ausgeblendet ist)
    pub grid_lines: Vec<GridLine>,
    /// Pfad, der gerade als Ganzes gezogen wird
    pub dragged_path: Option<usize>,
    /// Handle, der gerade gezogen wird
    pub dragged_handle: Option<HandleRef>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Dokument für Rendering vorhanden ist.
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Gibt zurück, ob gerade ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.dragged_path.is_some() || self.dragged_handle.is_some()
    }
}
