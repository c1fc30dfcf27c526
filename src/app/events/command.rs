use crate::app::state::DragTarget;
use crate::core::Point;
use crate::shared::OverlayKind;

/// App-Command Events.
/// Commands sind mutierende Schritte, die der Controller ausführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// SVG-Datei von der Platte laden
    LoadFile { path: String },
    /// SVG-Text laden, optional an einen Host-Knoten gebunden
    LoadSvgText {
        content: String,
        host_node_id: Option<String>,
    },
    /// Dokument als SVG-Datei schreiben
    ExportSvg { path: String },
    /// Anwendung beenden
    RequestExit,
    /// Drag starten
    BeginDrag { target: DragTarget, pointer: Point },
    /// Laufenden Drag auf neue Zeigerposition anwenden
    UpdateDrag { pointer: Point },
    /// Drag beenden (Undo-Snapshot, Host-Update)
    EndDrag,
    /// Kontrollpunkt setzen (ein Undo-Schritt)
    MoveHandle {
        path_index: usize,
        handle_index: usize,
        position: Point,
    },
    /// Pfad verschieben (ein Undo-Schritt)
    MovePath { path_index: usize, delta: Point },
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Overlay-Sichtbarkeit setzen
    SetOverlay { kind: OverlayKind, visible: bool },
    /// Alle Overlays einschalten
    ShowAllOverlays,
    /// Raster-Snapping setzen
    SetSnapToGrid { enabled: bool },
    /// Rasterfeinheit setzen
    SetGridDivisions { divisions: u32 },
    /// Host-Bindung lösen (Auswahl im Host aufgehoben)
    UnbindHost,
}
