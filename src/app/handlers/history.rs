//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current.clone()) {
        let changed = !prev.same_document(&current);
        prev.apply_to(state);
        log::info!("Undo ausgeführt");
        if changed {
            use_cases::host::queue_path_update(state);
        }
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current.clone()) {
        let changed = !next.same_document(&current);
        next.apply_to(state);
        log::info!("Redo ausgeführt");
        if changed {
            use_cases::host::queue_path_update(state);
        }
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
