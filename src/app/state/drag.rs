use crate::core::{HandleRef, ParsedSvg, Point};
use std::sync::Arc;

/// Was gerade gezogen wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTarget {
    /// Ein einzelner Kontrollpunkt
    Handle(HandleRef),
    /// Ein ganzer Pfad (starre Verschiebung)
    Path {
        /// Index des Pfads
        path_index: usize,
    },
}

impl DragTarget {
    /// Index des betroffenen Pfads.
    pub fn path_index(&self) -> usize {
        match self {
            DragTarget::Handle(handle) => handle.path_index,
            DragTarget::Path { path_index } => *path_index,
        }
    }
}

/// Laufender Drag mit Ausgangszustand.
#[derive(Debug, Clone)]
pub struct ActiveDrag {
    /// Gezogenes Element
    pub target: DragTarget,
    /// Zeigerposition beim Drag-Start (viewBox-Raum)
    pub start_pointer: Point,
    /// Dokument beim Drag-Start; dient zugleich als Undo-Snapshot
    pub origin: Arc<ParsedSvg>,
}

/// Zustandsmaschine `Idle → Dragging → Idle`.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Drag läuft
    Dragging(ActiveDrag),
}

impl DragState {
    /// Gibt `true` zurück, wenn ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Ziel des laufenden Drags.
    pub fn target(&self) -> Option<DragTarget> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(drag) => Some(drag.target),
        }
    }
}
