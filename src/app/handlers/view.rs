//! Handler für Overlays und Raster.

use crate::app::AppState;
use crate::shared::options::MAX_GRID_DIVISIONS;
use crate::shared::OverlayKind;

/// Blendet ein Overlay ein oder aus.
pub fn set_overlay(state: &mut AppState, kind: OverlayKind, visible: bool) {
    state.overlays.set(kind, visible);
}

/// Blendet alle Overlays ein.
pub fn show_all_overlays(state: &mut AppState) {
    state.overlays.show_all();
}

/// Schaltet das Einrasten am Raster.
pub fn set_snap_to_grid(state: &mut AppState, enabled: bool) {
    state.options.snap_to_grid = enabled;
}

/// Setzt die Rasterteilung (1 bis `MAX_GRID_DIVISIONS`).
pub fn set_grid_divisions(state: &mut AppState, divisions: u32) {
    state.options.grid_divisions = divisions.clamp(1, MAX_GRID_DIVISIONS);
}
