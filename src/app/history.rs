use crate::core::ParsedSvg;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone: Das Erstellen eines Snapshots ist O(1), unveränderte
/// Pfade werden zwischen allen Snapshots geteilt.
#[derive(Clone)]
pub struct Snapshot {
    /// Optionales Dokument (Arc-Klon für O(1)-Snapshot)
    pub document: Option<Arc<ParsedSvg>>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            document: state.document.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.document = self.document;
    }

    /// Prüft, ob zwei Snapshots auf dieselbe Geometrie zeigen.
    pub fn same_document(&self, other: &Snapshot) -> bool {
        match (&self.document, &other.document) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.same_geometry(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl möglicher Undo-Schritte.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Verwirft die gesamte Historie (z.B. beim Laden eines neuen Dokuments).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::ViewBox;
    use crate::path_data::parse_path_data;

    fn make_snapshot_with_path_count(count: usize) -> Snapshot {
        let paths = (0..count)
            .map(|i| Arc::new(parse_path_data(&format!("M{i} 0L{i} 10"))))
            .collect();
        Snapshot {
            document: Some(Arc::new(ParsedSvg {
                raw_svg: Arc::from(""),
                view_box: ViewBox::new(0.0, 0.0, 10.0, 10.0),
                width: 10.0,
                height: 10.0,
                paths,
            })),
        }
    }

    fn path_count(snap: &Snapshot) -> usize {
        snap.document.as_ref().map_or(0, |d| d.path_count())
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_path_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_path_count(5))
            .expect("undo vorhanden");

        assert_eq!(path_count(&restored), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_path_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_path_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_path_count(2))
            .expect("redo vorhanden");

        assert_eq!(path_count(&redone), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_path_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_path_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_path_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_path_count(i));
        }
        assert_eq!(history.undo_depth(), 3);

        // Ältester verbliebener Eintrag ist der dritte
        let mut last = None;
        while history.can_undo() {
            last = history.pop_undo_with_current(make_snapshot_with_path_count(99));
        }
        assert_eq!(last.as_ref().map(path_count), Some(3));
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_path_count(1));
        history.record_snapshot(make_snapshot_with_path_count(2));
        let _ = history.pop_undo_with_current(make_snapshot_with_path_count(3));

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn snapshot_apply_to_restores_state() {
        let snap = make_snapshot_with_path_count(4);
        let mut state = AppState::new();
        snap.clone().apply_to(&mut state);

        assert_eq!(state.path_count(), 4);
        assert!(Snapshot::from_state(&state).same_document(&snap));
    }
}
