//! Duale Repräsentation eines einzelnen `<path>`: Pfad-String plus Geometrie.

use super::{BoundingBox, Handle, Point, Segment};

/// Ein Pfad mit Ankerpunkten, Handles und normalisierten Segmenten.
///
/// Wird bei jeder Bearbeitung komplett ersetzt, nie in-place mutiert.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPathData {
    /// Original- bzw. abgeleiteter Pfad-String (`d`-Attribut)
    pub d: String,
    /// Ankerpunkte in Segmentreihenfolge
    pub points: Vec<Point>,
    /// Ziehbare Kontrollpunkte
    pub handles: Vec<Handle>,
    /// Normalisierte Segmente (absolut, ohne Kurzformen)
    pub segments: Vec<Segment>,
    /// Begrenzungsrechteck; wird nachträglich vom Bounds-Provider gesetzt
    pub bounding_box: Option<BoundingBox>,
}

impl SvgPathData {
    /// Anzahl der Ankerpunkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Handles.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Gibt `true` zurück, wenn der Pfad keine Segmente enthält.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Liefert eine Kopie mit gesetztem Begrenzungsrechteck.
    pub fn with_bounding_box(&self, bounding_box: Option<BoundingBox>) -> Self {
        Self {
            bounding_box,
            ..self.clone()
        }
    }
}
