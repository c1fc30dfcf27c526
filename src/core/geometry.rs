//! Grundlegende Geometrie-Typen im Koordinatenraum der viewBox.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Absoluter Punkt im Koordinatenraum des Pfads (viewBox-Raum).
pub type Point = DVec2;

/// Die viewBox eines SVG-Dokuments (`min-x min-y width height`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    /// Linke Kante
    pub min_x: f64,
    /// Obere Kante
    pub min_y: f64,
    /// Breite
    pub width: f64,
    /// Höhe
    pub height: f64,
}

impl ViewBox {
    /// Erstellt eine neue viewBox.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Parst ein `viewBox`-Attribut (Whitespace- oder Komma-getrennt).
    ///
    /// Liefert `None`, wenn nicht genau vier endliche Zahlen enthalten sind.
    pub fn parse(text: &str) -> Option<Self> {
        let values: Vec<f64> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<f64>>>()?;

        match values.as_slice() {
            [min_x, min_y, width, height] => Some(Self::new(*min_x, *min_y, *width, *height)),
            _ => None,
        }
    }

    /// Ursprung (linke obere Ecke) der viewBox.
    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Gibt `true` zurück, wenn Breite und Höhe positiv sind.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl From<BoundingBox> for ViewBox {
    fn from(bbox: BoundingBox) -> Self {
        Self::new(bbox.x, bbox.y, bbox.width, bbox.height)
    }
}

/// Achsenparalleles Begrenzungsrechteck eines Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Linke Kante
    pub x: f64,
    /// Obere Kante
    pub y: f64,
    /// Breite
    pub width: f64,
    /// Höhe
    pub height: f64,
}

impl BoundingBox {
    /// Erstellt ein Rechteck aus Ursprung und Ausdehnung.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Kleinstes Rechteck, das alle Punkte enthält. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// Linke obere Ecke.
    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rechte untere Ecke.
    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Verschiebt das Rechteck um `delta` (Ausdehnung bleibt unverändert).
    pub fn translated(&self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Vereinigung zweier Rechtecke.
    pub fn union(&self, other: &BoundingBox) -> Self {
        let min = self.min().min(other.min());
        let max = self.max().max(other.max());
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Vergrößert das Rechteck an allen Seiten um `ratio` seiner Ausdehnung.
    pub fn padded(&self, ratio: f64) -> Self {
        let pad_x = self.width * ratio;
        let pad_y = self.height * ratio;
        Self::new(
            self.x - pad_x,
            self.y - pad_y,
            self.width + 2.0 * pad_x,
            self.height + 2.0 * pad_y,
        )
    }

    /// Prüft, ob der Punkt im Rechteck liegt (Kanten inklusive).
    pub fn contains(&self, point: Point) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
