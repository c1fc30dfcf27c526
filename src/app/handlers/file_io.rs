//! Handler für Datei- und Text-Import sowie Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt eine SVG-Datei.
pub fn load_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_file(state, path)
}

/// Lädt SVG-Text, optional gebunden an einen Host-Knoten.
pub fn load_svg_text(
    state: &mut AppState,
    content: &str,
    host_node_id: Option<String>,
) -> anyhow::Result<()> {
    use_cases::file_io::load_svg_text(state, content, host_node_id)
}

/// Exportiert das aktuelle Dokument.
pub fn export_svg(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::file_io::export_svg(state, path)
}
