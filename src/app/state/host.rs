use crate::host::HostOutbound;

/// Bindung an einen Knoten im Design-Tool-Host und ausgehende Nachrichten.
#[derive(Debug, Clone, Default)]
pub struct HostState {
    /// Host-seitige ID des aktuell bearbeiteten Knotens
    pub bound_node_id: Option<String>,
    /// Noch nicht abgeholte Nachrichten an den Host
    pub outbox: Vec<HostOutbound>,
}

impl HostState {
    /// Gibt `true` zurück, wenn ein Host-Knoten gebunden ist.
    pub fn is_bound(&self) -> bool {
        self.bound_node_id.is_some()
    }

    /// Entnimmt alle ausstehenden Nachrichten.
    pub fn take_outbox(&mut self) -> Vec<HostOutbound> {
        std::mem::take(&mut self.outbox)
    }
}
