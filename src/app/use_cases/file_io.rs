//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::DragState;
use crate::app::AppState;
use crate::svg::{parse_svg_document_with, write_svg_document};
use anyhow::Context;

/// Lädt eine SVG-Datei von der Festplatte in den AppState.
pub fn load_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("SVG-Datei nicht lesbar: {}", path))?;
    load_svg_text(state, &content, None)?;
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Ersetzt das aktuelle Dokument durch den geparsten SVG-Text.
///
/// Schlägt das Parsen fehl, bleibt das bisherige Dokument erhalten und die
/// Meldung landet in `ui.error_message`. Bei Erfolg werden Drag und
/// Undo-Historie zurückgesetzt.
pub fn load_svg_text(
    state: &mut AppState,
    content: &str,
    host_node_id: Option<String>,
) -> anyhow::Result<()> {
    let fallback = state.options.dimension_fallback();
    let doc = match parse_svg_document_with(content, state.bounds.as_ref(), &fallback) {
        Ok(doc) => doc,
        Err(e) => {
            state.ui.error_message = Some(format!("{:#}", e));
            return Err(e);
        }
    };

    let msg = format!(
        "{} Pfade geladen ({} Anker, {} Handles)",
        doc.path_count(),
        doc.total_points(),
        doc.total_handles()
    );
    log::info!("{}", msg);

    state.drag = DragState::Idle;
    state.history.clear();
    state.set_document(doc);
    state.host.bound_node_id = host_node_id;
    state.ui.current_file_path = None;
    state.ui.error_message = None;
    state.ui.status_message = Some(msg);
    Ok(())
}

/// Exportiert das aktuelle Dokument als SVG-Datei.
pub fn export_svg(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let Some(doc) = state.document.as_ref() else {
        anyhow::bail!("Kein Dokument zum Exportieren geladen");
    };

    std::fs::write(path, write_svg_document(doc))
        .with_context(|| format!("SVG-Datei nicht schreibbar: {}", path))?;

    log::info!("SVG exportiert nach: {}", path);
    state.ui.status_message = Some(format!("Exportiert: {}", path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::history::Snapshot;

    const SVG: &str = r#"<svg viewBox="0 0 10 10"><path d="M1 1L9 9"/></svg>"#;

    #[test]
    fn successful_load_resets_history_and_binds_host() {
        let mut state = AppState::new();
        load_svg_text(&mut state, SVG, None).expect("SVG erwartet");
        state.history.record_snapshot(Snapshot::from_state(&state));
        assert!(state.can_undo());

        load_svg_text(&mut state, SVG, Some("12:34".to_string())).expect("SVG erwartet");
        assert!(!state.can_undo());
        assert_eq!(state.host.bound_node_id.as_deref(), Some("12:34"));
        assert_eq!(state.path_count(), 1);
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn failed_load_keeps_previous_document() {
        let mut state = AppState::new();
        load_svg_text(&mut state, SVG, None).expect("SVG erwartet");
        let before = state.document.clone();

        assert!(load_svg_text(&mut state, "<svg/>", None).is_err());
        assert!(state.ui.error_message.is_some());
        assert_eq!(state.path_count(), 1);
        assert!(Snapshot { document: before }.same_document(&Snapshot::from_state(&state)));
    }

    #[test]
    fn export_and_reload_from_disk() {
        let dir = std::env::temp_dir().join("logo_grid_editor_file_io");
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis erwartet");
        let path = dir.join("export.svg").to_string_lossy().into_owned();

        let mut state = AppState::new();
        load_svg_text(&mut state, SVG, None).expect("SVG erwartet");
        export_svg(&mut state, &path).expect("Export erwartet");

        let mut reloaded = AppState::new();
        load_file(&mut reloaded, path.clone()).expect("Laden erwartet");
        assert_eq!(reloaded.ui.current_file_path.as_deref(), Some(path.as_str()));
        assert_eq!(reloaded.path_count(), 1);
    }

    #[test]
    fn export_without_document_fails() {
        let mut state = AppState::new();
        assert!(export_svg(&mut state, "unbenutzt.svg").is_err());
    }
}
