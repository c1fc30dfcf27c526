use crate::core::Point;
use crate::shared::OverlayKind;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei wurde im Dateidialog gewählt
    FileSelected { path: String },
    /// SVG-Text liegt bereits im Speicher vor (Drag&Drop, Zwischenablage)
    SvgTextLoaded { content: String },
    /// Dokument als SVG exportieren
    ExportRequested { path: String },
    /// Anwendung beenden
    ExitRequested,
    /// Zeiger gedrückt (viewBox-Koordinaten)
    PointerPressed { pos: Point },
    /// Zeiger bewegt (viewBox-Koordinaten)
    PointerMoved { pos: Point },
    /// Zeiger losgelassen
    PointerReleased,
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeftCanvas,
    /// Kontrollpunkt direkt setzen (ohne Zeiger, z.B. Eingabefeld)
    HandleMoveRequested {
        path_index: usize,
        handle_index: usize,
        position: Point,
    },
    /// Pfad direkt verschieben (ohne Zeiger, z.B. Pfeiltasten)
    PathMoveRequested { path_index: usize, delta: Point },
    /// Undo (Ctrl+Z)
    UndoRequested,
    /// Redo (Ctrl+Y / Ctrl+Shift+Z)
    RedoRequested,
    /// Overlay ein-/ausschalten
    OverlayToggled { kind: OverlayKind },
    /// Alle Overlays einschalten
    GenerateAllRequested,
    /// Raster-Snapping umschalten
    SnapToGridToggled,
    /// Rasterfeinheit geändert
    GridDivisionsChanged { divisions: u32 },
    /// Rohe JSON-Nachricht vom Design-Tool-Host
    HostMessageReceived { json: String },
}
