//! Ziehbarer Kontrollpunkt mit Rückverweis in die Segmentliste.

use super::Point;

/// Beschreibt eine Handle-Linie zwischen Ankerpunkt und Bézier-Kontrollpunkt.
///
/// `segment_index`/`value_index` zeigen direkt auf die x-Koordinate des
/// Kontrollpunkts im `values`-Array des besitzenden Segments (y liegt bei
/// `value_index + 1`). Damit lässt sich ein Drag ohne Objektgraph zurück in
/// die Segmentliste schreiben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Ankerpunkt (Startpunkt der Handle-Linie)
    pub start: Point,
    /// Kontrollpunkt (ziehbares Ende)
    pub end: Point,
    /// Index des besitzenden `C`/`Q`-Segments
    pub segment_index: usize,
    /// Offset der x-Koordinate des Kontrollpunkts im Segment
    pub value_index: usize,
}

impl Handle {
    /// Erstellt einen neuen Handle.
    pub fn new(start: Point, end: Point, segment_index: usize, value_index: usize) -> Self {
        Self {
            start,
            end,
            segment_index,
            value_index,
        }
    }

    /// Verschiebt beide Endpunkte um `delta`; Rückverweise bleiben gleich.
    pub fn translated(&self, delta: Point) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
            ..*self
        }
    }
}
