//! Parser für SVG-Dokumente.

mod dimensions;

pub use dimensions::DimensionFallback;

use crate::core::{BoundsProvider, ControlPolygonBounds, ParsedSvg, ViewBox};
use crate::path_data::parse_path_data;
use anyhow::{bail, Context, Result};
use dimensions::RootAttributes;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::sync::Arc;

/// Parsed ein SVG-Dokument mit Kontrollpolygon-Bounds und Standard-Fallbacks.
pub fn parse_svg_document(svg_content: &str) -> Result<ParsedSvg> {
    parse_svg_document_with(
        svg_content,
        &ControlPolygonBounds,
        &DimensionFallback::default(),
    )
}

/// Parsed ein SVG-Dokument.
///
/// Jeder Pfad erhält sein Begrenzungsrechteck vom `bounds`-Provider.
/// Fehlt das `<svg>`-Element oder enthält das Dokument keinen `<path>`,
/// schlägt der Import fehl.
pub fn parse_svg_document_with(
    svg_content: &str,
    bounds: &dyn BoundsProvider,
    fallback: &DimensionFallback,
) -> Result<ParsedSvg> {
    let structure = read_structure(svg_content)?;

    let Some(root) = structure.root else {
        bail!("Kein <svg>-Element im Dokument gefunden");
    };
    if structure.path_data.is_empty() {
        bail!("Das SVG enthält keine <path>-Elemente");
    }

    let paths = structure
        .path_data
        .iter()
        .map(|d| Arc::new(parse_path_data(d)))
        .collect();

    // Maße sind erst nach der Bounds-Berechnung bekannt (Fallback-Kette)
    let mut doc = ParsedSvg {
        raw_svg: Arc::from(svg_content),
        view_box: ViewBox::new(0.0, 0.0, 0.0, 0.0),
        width: 0.0,
        height: 0.0,
        paths,
    }
    .with_bounding_boxes(bounds);

    let dims = dimensions::resolve(&root, doc.union_bounding_box(), fallback);
    doc.view_box = dims.view_box;
    doc.width = dims.width;
    doc.height = dims.height;

    log::info!(
        "SVG geladen: {} Pfade, {} Ankerpunkte, {} Handles, viewBox {:?}",
        doc.path_count(),
        doc.total_points(),
        doc.total_handles(),
        doc.view_box
    );

    Ok(doc)
}

/// Rohstruktur: Wurzel-Attribute und `d`-Strings in Dokumentreihenfolge.
#[derive(Debug, Default)]
struct DocumentStructure {
    root: Option<RootAttributes>,
    path_data: Vec<String>,
}

fn read_structure(svg_content: &str) -> Result<DocumentStructure> {
    let mut reader = Reader::from_str(svg_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut structure = DocumentStructure::default();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                match e.local_name().as_ref() {
                    b"svg" if structure.root.is_none() => {
                        structure.root = Some(read_root_attributes(e)?);
                    }
                    b"path" => {
                        if structure.root.is_none() {
                            log::warn!("<path> außerhalb von <svg> ignoriert");
                        } else {
                            let d = read_attribute(e, b"d")?.unwrap_or_default();
                            structure.path_data.push(d);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des SVG"),
            _ => {}
        }

        buffer.clear();
    }

    Ok(structure)
}

fn read_root_attributes(e: &BytesStart<'_>) -> Result<RootAttributes> {
    Ok(RootAttributes {
        view_box: read_attribute(e, b"viewBox")?,
        width: read_attribute(e, b"width")?,
        height: read_attribute(e, b"height")?,
    })
}

fn read_attribute(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr.context("Ungültiges Attribut")?;
        if attr.key.local_name().as_ref() == name {
            let value = attr
                .unescape_value()
                .context("Attributwert kann nicht dekodiert werden")?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
