//! Writer für SVG-Dokumente.

use crate::core::ParsedSvg;
use crate::path_data::serializer::format_number;
use crate::path_data::segments_to_d;

/// Schreibt das Dokument als eigenständiges SVG.
///
/// Jeder Pfad wird aus seinen Segmenten kanonisch serialisiert; Pfade ohne
/// Segmente behalten ihren ursprünglichen `d`-String.
pub fn write_svg_document(doc: &ParsedSvg) -> String {
    let vb = &doc.view_box;
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
        format_number(vb.min_x),
        format_number(vb.min_y),
        format_number(vb.width),
        format_number(vb.height),
        format_number(doc.width),
        format_number(doc.height),
    ));

    for path in &doc.paths {
        let d = if path.is_empty() {
            path.d.clone()
        } else {
            segments_to_d(&path.segments)
        };
        output.push_str(&format!("    <path d=\"{}\"/>\n", escape_xml(&d)));
    }

    output.push_str("</svg>\n");
    output
}

/// Verkettete `d`-Strings aller Pfade (Dokumentreihenfolge).
pub fn combined_path_data(doc: &ParsedSvg) -> String {
    doc.paths
        .iter()
        .map(|path| segments_to_d(&path.segments))
        .collect()
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
