//! Schnittstelle zum Bounds-Kollaborateur (Begrenzungsrechtecke je Pfad).

use super::{BoundingBox, SvgPathData};

/// Berechnet das Begrenzungsrechteck eines Pfads.
///
/// Ein exakter Renderer kann hier anstelle der Kontrollpolygon-Näherung
/// eingehängt werden.
pub trait BoundsProvider {
    /// Liefert das Rechteck oder `None`, wenn der Pfad keine Geometrie hat.
    fn bounding_box(&self, path: &SvgPathData) -> Option<BoundingBox>;
}

/// Begrenzung über das Kontrollpolygon (Anker + Kontrollpunkte).
///
/// Bézierkurven liegen in der konvexen Hülle ihrer Kontrollpunkte, das
/// Rechteck ist daher nie zu klein, bei starken Kurven aber etwas zu groß.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlPolygonBounds;

impl BoundsProvider for ControlPolygonBounds {
    fn bounding_box(&self, path: &SvgPathData) -> Option<BoundingBox> {
        let anchors = path.points.iter().copied();
        let controls = path.handles.iter().map(|h| h.end);
        BoundingBox::from_points(anchors.chain(controls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_data::parse_path_data;

    #[test]
    fn control_polygon_includes_handles() {
        let path = parse_path_data("M0 0 C0 -10 20 -10 20 0");
        let bbox = ControlPolygonBounds
            .bounding_box(&path)
            .expect("bbox erwartet");
        assert_eq!(bbox, BoundingBox::new(0.0, -10.0, 20.0, 10.0));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let path = parse_path_data("");
        assert!(ControlPolygonBounds.bounding_box(&path).is_none());
    }
}
