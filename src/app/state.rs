//! Application State: zentrale Datenhaltung.

mod app_state;
mod drag;
mod host;
mod ui;

pub use app_state::AppState;
pub use drag::{ActiveDrag, DragState, DragTarget};
pub use host::HostState;
pub use ui::UiState;
