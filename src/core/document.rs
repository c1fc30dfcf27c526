//! Das geparste SVG-Dokument als Ganzes.

use super::{BoundingBox, BoundsProvider, SvgPathData, ViewBox};
use std::sync::Arc;

/// Dokument-Aggregat: Quelltext, viewBox, Pixelmaße und alle Pfade.
///
/// Pfade liegen hinter `Arc`, damit Undo-Snapshots unveränderte Pfade
/// teilen statt sie zu kopieren.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSvg {
    /// Originaler SVG-Quelltext (für Änderungserkennung)
    pub raw_svg: Arc<str>,
    /// Koordinatenraum der Pfade
    pub view_box: ViewBox,
    /// Nominale Breite in Pixeln
    pub width: f64,
    /// Nominale Höhe in Pixeln
    pub height: f64,
    /// Pfade in Dokumentreihenfolge
    pub paths: Vec<Arc<SvgPathData>>,
}

impl ParsedSvg {
    /// Anzahl der Pfade.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Pfad am Index, falls vorhanden.
    pub fn path(&self, index: usize) -> Option<&SvgPathData> {
        self.paths.get(index).map(|p| p.as_ref())
    }

    /// Summe aller Ankerpunkte über alle Pfade.
    pub fn total_points(&self) -> usize {
        self.paths.iter().map(|p| p.point_count()).sum()
    }

    /// Summe aller Handles über alle Pfade.
    pub fn total_handles(&self) -> usize {
        self.paths.iter().map(|p| p.handle_count()).sum()
    }

    /// Vereinigung aller bekannten Begrenzungsrechtecke.
    pub fn union_bounding_box(&self) -> Option<BoundingBox> {
        self.paths
            .iter()
            .filter_map(|p| p.bounding_box)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Ersetzt einen Pfad; alle anderen Pfade werden geteilt.
    pub fn with_path_replaced(&self, index: usize, path: SvgPathData) -> Self {
        let mut paths = self.paths.clone();
        if let Some(slot) = paths.get_mut(index) {
            *slot = Arc::new(path);
        }
        Self {
            paths,
            ..self.clone()
        }
    }

    /// Vergleicht nur die Geometrie (Segmente) zweier Dokumente.
    ///
    /// Geteilte Pfade werden per Zeigervergleich abgekürzt; abweichende
    /// `d`-Schreibweisen oder fehlende Begrenzungsrechtecke zählen nicht.
    pub fn same_geometry(&self, other: &ParsedSvg) -> bool {
        self.paths.len() == other.paths.len()
            && self
                .paths
                .iter()
                .zip(&other.paths)
                .all(|(a, b)| Arc::ptr_eq(a, b) || a.segments == b.segments)
    }

    /// Gibt `true` zurück, wenn noch Pfade ohne Begrenzungsrechteck existieren.
    pub fn needs_bounding_boxes(&self) -> bool {
        self.paths
            .iter()
            .any(|p| p.bounding_box.is_none() && !p.is_empty())
    }

    /// Füllt fehlende Begrenzungsrechtecke über den Provider.
    ///
    /// Pfade, die bereits ein Rechteck haben, bleiben unangetastet (und geteilt).
    pub fn with_bounding_boxes(&self, provider: &dyn BoundsProvider) -> Self {
        let paths = self
            .paths
            .iter()
            .map(|path| {
                if path.bounding_box.is_some() {
                    return Arc::clone(path);
                }
                match provider.bounding_box(path) {
                    Some(bbox) => Arc::new(path.with_bounding_box(Some(bbox))),
                    None => Arc::clone(path),
                }
            })
            .collect();

        Self {
            paths,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPolygonBounds;
    use crate::path_data::parse_path_data;

    fn two_path_doc() -> ParsedSvg {
        ParsedSvg {
            raw_svg: Arc::from("<svg/>"),
            view_box: ViewBox::new(0.0, 0.0, 100.0, 100.0),
            width: 100.0,
            height: 100.0,
            paths: vec![
                Arc::new(parse_path_data("M0 0L10 10")),
                Arc::new(parse_path_data("M50 50L60 70")),
            ],
        }
    }

    #[test]
    fn with_bounding_boxes_fills_missing_and_shares_existing() {
        let doc = two_path_doc();
        let filled = doc.with_bounding_boxes(&ControlPolygonBounds);

        assert!(!filled.needs_bounding_boxes());
        assert_eq!(
            filled.path(1).and_then(|p| p.bounding_box),
            Some(BoundingBox::new(50.0, 50.0, 10.0, 20.0))
        );

        let again = filled.with_bounding_boxes(&ControlPolygonBounds);
        assert!(Arc::ptr_eq(&filled.paths[0], &again.paths[0]));
    }

    #[test]
    fn union_bounding_box_spans_all_paths() {
        let doc = two_path_doc().with_bounding_boxes(&ControlPolygonBounds);
        assert_eq!(
            doc.union_bounding_box(),
            Some(BoundingBox::new(0.0, 0.0, 60.0, 70.0))
        );
    }

    #[test]
    fn same_geometry_ignores_path_string_spelling() {
        let doc = two_path_doc();
        let respelled = doc.with_path_replaced(0, parse_path_data("M 0,0 L 10,10"));
        assert!(doc.same_geometry(&respelled));

        let moved = doc.with_path_replaced(0, parse_path_data("M0 0L10 11"));
        assert!(!doc.same_geometry(&moved));
    }

    #[test]
    fn replacing_a_path_shares_the_others() {
        let doc = two_path_doc();
        let replaced = doc.with_path_replaced(1, parse_path_data("M1 1"));

        assert!(Arc::ptr_eq(&doc.paths[0], &replaced.paths[0]));
        assert_eq!(replaced.path(1).map(|p| p.point_count()), Some(1));
        assert_eq!(doc.path(1).map(|p| p.point_count()), Some(2));
    }
}
