//! Use-Case: Auswahl des Drag-Ziels unter dem Zeiger.

use crate::app::state::DragTarget;
use crate::app::AppState;
use crate::core::{HandleIndex, Point};

/// Bestimmt, was bei einem Pointer-Down an `pointer` gezogen würde.
///
/// Sichtbare Handles haben Vorrang (innerhalb des Pick-Radius), danach der
/// oberste Pfad, dessen Begrenzungsrechteck den Punkt enthält.
pub fn pick_drag_target(state: &AppState, pointer: Point) -> Option<DragTarget> {
    let doc = state.document.as_ref()?;

    if state.overlays.handles {
        let index = HandleIndex::from_document(doc);
        if let Some(hit) = index.pick(pointer, state.options.handle_pick_radius) {
            return Some(DragTarget::Handle(hit.handle));
        }
    }

    // Später gezeichnete Pfade liegen oben
    doc.paths
        .iter()
        .enumerate()
        .rev()
        .find(|(_, path)| path.bounding_box.is_some_and(|b| b.contains(pointer)))
        .map(|(path_index, _)| DragTarget::Path { path_index })
}
