//! Handler für die Host-Bindung.

use crate::app::use_cases;
use crate::app::AppState;

/// Löst die Bindung an den Host-Knoten.
pub fn unbind(state: &mut AppState) {
    use_cases::host::unbind(state);
}
