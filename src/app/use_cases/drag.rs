//! Use-Case: Interaktiver Drag von Handles und ganzen Pfaden.
//!
//! Jedes Update rechnet vom Ausgangsdokument aus, nicht inkrementell vom
//! letzten Zwischenstand. Undo erhält genau einen Snapshot pro Drag.

use crate::app::history::Snapshot;
use crate::app::state::{ActiveDrag, DragState, DragTarget};
use crate::app::AppState;
use crate::core::{Grid, ParsedSvg, Point};
use crate::path_data::{handle_move, path_move};

/// Startet einen Drag auf `target`. Ein noch laufender Drag wird vorher beendet.
pub fn begin_drag(state: &mut AppState, target: DragTarget, pointer: Point) {
    if state.drag.is_dragging() {
        log::debug!("Neuer Drag beendet den laufenden");
        end_drag(state);
    }

    let Some(doc) = state.document.clone() else {
        log::debug!("Drag ignoriert: kein Dokument geladen");
        return;
    };
    if doc.path(target.path_index()).is_none() {
        log::debug!("Drag ignoriert: Pfad {} existiert nicht", target.path_index());
        return;
    }

    state.drag = DragState::Dragging(ActiveDrag {
        target,
        start_pointer: pointer,
        origin: doc,
    });
}

/// Wendet die aktuelle Zeigerposition auf den laufenden Drag an.
pub fn update_drag(state: &mut AppState, pointer: Point) {
    let DragState::Dragging(drag) = &state.drag else {
        return;
    };

    let grid = if state.options.snap_to_grid {
        state.grid()
    } else {
        None
    };

    let updated = match drag.target {
        DragTarget::Handle(handle) => {
            let position = grid.map_or(pointer, |g| g.snap(pointer));
            handle_move(
                &drag.origin,
                handle.path_index,
                handle.handle_index,
                position,
            )
        }
        DragTarget::Path { path_index } => {
            let delta = path_delta(&drag.origin, path_index, pointer - drag.start_pointer, grid);
            path_move(&drag.origin, path_index, delta)
        }
    };

    state.set_document(updated);
}

/// Beendet den Drag. Gibt `true` zurück, wenn sich die Geometrie geändert hat;
/// nur dann wird ein Undo-Snapshot aufgenommen.
pub fn end_drag(state: &mut AppState) -> bool {
    let DragState::Dragging(drag) = std::mem::take(&mut state.drag) else {
        return false;
    };

    let changed = state
        .document
        .as_ref()
        .is_some_and(|doc| !doc.same_geometry(&drag.origin));

    if changed {
        state.history.record_snapshot(Snapshot {
            document: Some(drag.origin),
        });
        log::info!("Drag abgeschlossen: {:?}", drag.target);
    } else {
        log::debug!("Drag ohne Änderung beendet");
    }

    changed
}

/// Verschiebung eines Pfad-Drags; mit Raster rastet der erste Ankerpunkt ein.
fn path_delta(origin: &ParsedSvg, path_index: usize, raw: Point, grid: Option<Grid>) -> Point {
    let Some(grid) = grid else {
        return raw;
    };
    match origin.path(path_index).and_then(|p| p.points.first()) {
        Some(anchor) => grid.snap(*anchor + raw) - *anchor,
        None => raw,
    }
}
