//! Use-Case: Direkte Bearbeitung ohne Drag (z.B. numerische Eingabe, Host).

use crate::app::AppState;
use crate::core::{ParsedSvg, Point};
use crate::path_data::{handle_move, path_move};

/// Setzt das Ende eines Handles auf `position`.
/// Gibt `true` zurück, wenn sich die Geometrie geändert hat.
pub fn move_handle(
    state: &mut AppState,
    path_index: usize,
    handle_index: usize,
    position: Point,
) -> bool {
    apply_edit(state, |doc| {
        handle_move(doc, path_index, handle_index, position)
    })
}

/// Verschiebt einen ganzen Pfad um `delta`.
/// Gibt `true` zurück, wenn sich die Geometrie geändert hat.
pub fn move_path(state: &mut AppState, path_index: usize, delta: Point) -> bool {
    apply_edit(state, |doc| path_move(doc, path_index, delta))
}

fn apply_edit(state: &mut AppState, edit: impl FnOnce(&ParsedSvg) -> ParsedSvg) -> bool {
    let Some(doc) = state.document.clone() else {
        log::debug!("Bearbeitung ignoriert: kein Dokument geladen");
        return false;
    };

    let updated = edit(&doc);
    if updated.same_geometry(&doc) {
        return false;
    }

    state.record_undo_snapshot();
    state.set_document(updated);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::file_io::load_svg_text;

    const SVG: &str = r#"<svg viewBox="0 0 100 100"><path d="M0 0 Q10 10 20 0"/></svg>"#;

    #[test]
    fn handle_edit_is_undoable() {
        let mut state = AppState::new();
        load_svg_text(&mut state, SVG, None).expect("SVG erwartet");

        assert!(move_handle(&mut state, 0, 1, Point::new(10.0, 30.0)));
        assert!(state.can_undo());
        let path = state
            .document
            .as_ref()
            .and_then(|d| d.path(0))
            .expect("Pfad erwartet");
        // Quadratische Handles teilen sich den Kontrollpunkt
        assert_eq!(path.handles[0].end, Point::new(10.0, 30.0));
        assert!(path.bounding_box.is_some());
    }

    #[test]
    fn rejected_edit_leaves_history_untouched() {
        let mut state = AppState::new();
        load_svg_text(&mut state, SVG, None).expect("SVG erwartet");

        assert!(!move_handle(&mut state, 0, 7, Point::ZERO));
        assert!(!move_path(&mut state, 3, Point::new(1.0, 1.0)));
        assert!(!move_path(&mut state, 0, Point::ZERO));
        assert!(!state.can_undo());
    }

    #[test]
    fn edits_without_document_do_nothing() {
        let mut state = AppState::new();
        assert!(!move_path(&mut state, 0, Point::new(1.0, 0.0)));
    }
}
