//! Use-Case: Rückmeldungen an den Design-Tool-Host.

use crate::app::AppState;
use crate::host::HostOutbound;
use crate::svg::combined_path_data;

/// Stellt den aktuellen Pfad-String für den gebundenen Host-Knoten in die Outbox.
///
/// Ohne Bindung oder Dokument passiert nichts.
pub fn queue_path_update(state: &mut AppState) {
    let (Some(node_id), Some(doc)) = (state.host.bound_node_id.as_ref(), state.document.as_ref())
    else {
        return;
    };

    let message = HostOutbound::UpdatePath {
        node_id: node_id.clone(),
        new_d: combined_path_data(doc),
    };
    log::debug!("Host-Update für Knoten {} eingereiht", node_id);
    state.host.outbox.push(message);
}

/// Löst die Bindung an den Host-Knoten; das Dokument bleibt bestehen.
pub fn unbind(state: &mut AppState) {
    if let Some(node_id) = state.host.bound_node_id.take() {
        log::info!("Host-Bindung an Knoten {} aufgehoben", node_id);
    }
}
