//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod overlays;
mod render_scene;

pub use options::EditorOptions;
pub use options::{GRID_DIVISIONS, HANDLE_PICK_RADIUS, HISTORY_DEPTH};
pub use overlays::{OverlayKind, OverlayVisibility};
pub use render_scene::RenderScene;
