//! Projiziert Edits (Handle-Drag, Pfad-Verschiebung) zurück in den Pfad-String.
//!
//! Edits werden in eine Kopie der Segmente geschrieben, danach wird der
//! Pfad aus dem kanonischen String neu abgeleitet. So bleiben `d`,
//! Punkte, Handles und Segmente immer zueinander konsistent.

use super::{path_from_segments, serializer::segments_to_d};
use crate::core::{ParsedSvg, Point, Segment, SvgPathData};

/// Setzt den Kontrollpunkt eines Handles auf `new_position`.
///
/// `None` bei ungültigem Handle-Index, kaputtem Rückverweis oder nicht
/// endlicher Position. Das Begrenzungsrechteck des Ergebnisses ist leer
/// und muss vom Bounds-Provider neu gesetzt werden.
pub fn move_handle(
    path: &SvgPathData,
    handle_index: usize,
    new_position: Point,
) -> Option<SvgPathData> {
    if !new_position.is_finite() {
        return None;
    }
    let handle = path.handles.get(handle_index)?;

    let mut segments = path.segments.clone();
    let segment = segments.get_mut(handle.segment_index)?;
    if !segment.command.has_control_points()
        || !segment.set_point_at(handle.value_index, new_position)
    {
        return None;
    }

    Some(path_from_segments(&segments))
}

/// Verschiebt alle Koordinaten eines Pfads um `delta`.
///
/// Punkte, Handles und Begrenzungsrechteck werden mitverschoben statt neu
/// abgeleitet; bei Bögen wandert nur der Endpunkt.
pub fn translate_path(path: &SvgPathData, delta: Point) -> SvgPathData {
    let segments: Vec<Segment> = path
        .segments
        .iter()
        .map(|segment| {
            let mut moved = segment.clone();
            for offset in segment.coordinate_offsets() {
                if let Some(p) = segment.point_at(offset) {
                    moved.set_point_at(offset, p + delta);
                }
            }
            moved
        })
        .collect();

    SvgPathData {
        d: segments_to_d(&segments),
        points: path.points.iter().map(|p| *p + delta).collect(),
        handles: path.handles.iter().map(|h| h.translated(delta)).collect(),
        segments,
        bounding_box: path.bounding_box.map(|b| b.translated(delta)),
    }
}

/// Handle-Drag auf Dokumentebene.
///
/// Ungültige Indizes liefern eine unveränderte Kopie; alle nicht
/// betroffenen Pfade werden geteilt.
pub fn handle_move(
    doc: &ParsedSvg,
    path_index: usize,
    handle_index: usize,
    new_position: Point,
) -> ParsedSvg {
    let moved = doc
        .path(path_index)
        .and_then(|path| move_handle(path, handle_index, new_position));

    match moved {
        Some(path) => doc.with_path_replaced(path_index, path),
        None => {
            log::debug!(
                "Handle-Move ignoriert: Pfad {}, Handle {}, Position {:?}",
                path_index,
                handle_index,
                new_position
            );
            doc.clone()
        }
    }
}

/// Verschiebt einen ganzen Pfad auf Dokumentebene.
pub fn path_move(doc: &ParsedSvg, path_index: usize, delta: Point) -> ParsedSvg {
    if !delta.is_finite() {
        log::debug!("Pfad-Move ignoriert: Delta {:?} nicht endlich", delta);
        return doc.clone();
    }
    match doc.path(path_index) {
        Some(path) => doc.with_path_replaced(path_index, translate_path(path, delta)),
        None => {
            log::debug!("Pfad-Move ignoriert: Pfad {} existiert nicht", path_index);
            doc.clone()
        }
    }
}
