use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{BoundsProvider, ControlPolygonBounds, Grid, ParsedSvg};
use crate::shared::{EditorOptions, OverlayVisibility};
use std::sync::Arc;

use super::{DragState, HostState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladenes Dokument (None = keine Datei geladen)
    pub document: Option<Arc<ParsedSvg>>,
    /// Drag-Zustandsmaschine
    pub drag: DragState,
    /// Sichtbare Overlays
    pub overlays: OverlayVisibility,
    /// UI-State
    pub ui: UiState,
    /// Host-Bindung und Outbox
    pub host: HostState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Liefert Begrenzungsrechtecke für neue oder bearbeitete Pfade
    pub bounds: Box<dyn BoundsProvider>,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: None,
            drag: DragState::Idle,
            overlays: options.overlays,
            ui: UiState::new(),
            host: HostState::default(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            bounds: Box::new(ControlPolygonBounds),
            should_exit: false,
        }
    }

    /// Ersetzt den Bounds-Provider (z.B. durch einen exakten Renderer).
    pub fn with_bounds_provider(mut self, bounds: Box<dyn BoundsProvider>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Installiert ein neues Dokument; fehlende Begrenzungsrechtecke werden
    /// vorher über den Bounds-Provider ergänzt.
    pub fn set_document(&mut self, doc: ParsedSvg) {
        let doc = if doc.needs_bounding_boxes() {
            doc.with_bounding_boxes(self.bounds.as_ref())
        } else {
            doc
        };
        self.document = Some(Arc::new(doc));
    }

    /// Gibt die Anzahl der Pfade zurück (für UI-Anzeige)
    pub fn path_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.path_count())
    }

    /// Raster des aktuellen Dokuments.
    pub fn grid(&self) -> Option<Grid> {
        let doc = self.document.as_ref()?;
        Grid::for_view_box(&doc.view_box, self.options.grid_divisions)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
