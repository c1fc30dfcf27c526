//! Handler für Drag- und Direkt-Bearbeitung.
//!
//! Abgeschlossene Änderungen werden an einen gebundenen Host gemeldet.

use crate::app::state::DragTarget;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Startet einen Drag.
pub fn begin_drag(state: &mut AppState, target: DragTarget, pointer: Point) {
    use_cases::drag::begin_drag(state, target, pointer);
}

/// Aktualisiert den laufenden Drag.
pub fn update_drag(state: &mut AppState, pointer: Point) {
    use_cases::drag::update_drag(state, pointer);
}

/// Beendet den Drag und meldet geänderte Geometrie an den Host.
pub fn end_drag(state: &mut AppState) {
    if use_cases::drag::end_drag(state) {
        use_cases::host::queue_path_update(state);
    }
}

/// Setzt ein Handle-Ende direkt.
pub fn move_handle(state: &mut AppState, path_index: usize, handle_index: usize, position: Point) {
    if use_cases::editing::move_handle(state, path_index, handle_index, position) {
        use_cases::host::queue_path_update(state);
    }
}

/// Verschiebt einen Pfad direkt.
pub fn move_path(state: &mut AppState, path_index: usize, delta: Point) {
    if use_cases::editing::move_path(state, path_index, delta) {
        use_cases::host::queue_path_update(state);
    }
}
