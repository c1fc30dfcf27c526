//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::DragTarget;
use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let grid_lines = if state.overlays.grid {
        state.grid().map(|g| g.lines()).unwrap_or_default()
    } else {
        Vec::new()
    };

    let (dragged_path, dragged_handle) = match state.drag.target() {
        Some(DragTarget::Path { path_index }) => (Some(path_index), None),
        Some(DragTarget::Handle(handle)) => (None, Some(handle)),
        None => (None, None),
    };

    RenderScene {
        document: state.document.clone(),
        overlays: state.overlays,
        grid_lines,
        dragged_path,
        dragged_handle,
        options: state.options.clone(),
    }
}
