//! Ausrichtungsraster über der viewBox (Linien und Snapping).

use super::{Point, ViewBox};

/// Eine Rasterlinie in viewBox-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Startpunkt
    pub from: Point,
    /// Endpunkt
    pub to: Point,
}

/// Quadratisches Raster mit Ursprung in der viewBox-Ecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Rasterweite in viewBox-Einheiten
    pub step: f64,
    /// Bezugspunkt des Rasters (viewBox-Ursprung)
    pub origin: Point,
    /// Breite des Rasterbereichs
    pub width: f64,
    /// Höhe des Rasterbereichs
    pub height: f64,
}

/// Höchstzahl an Rasterfeldern je Achse; bei extremen Seitenverhältnissen
/// wird das Raster gröber.
pub const MAX_LINES_PER_AXIS: u32 = 1000;

impl Grid {
    /// Raster mit `divisions` Feldern entlang der kürzeren viewBox-Seite.
    ///
    /// Keine Achse erhält mehr als [`MAX_LINES_PER_AXIS`] Felder.
    /// `None` bei viewBox ohne (endliche) Fläche oder `divisions == 0`.
    pub fn for_view_box(view_box: &ViewBox, divisions: u32) -> Option<Self> {
        if !view_box.has_area()
            || !view_box.width.is_finite()
            || !view_box.height.is_finite()
            || divisions == 0
        {
            return None;
        }
        let shorter = view_box.width.min(view_box.height);
        let longer = view_box.width.max(view_box.height);
        let divisions = divisions.min(MAX_LINES_PER_AXIS);
        let step = (shorter / f64::from(divisions)).max(longer / f64::from(MAX_LINES_PER_AXIS));

        Some(Self {
            step,
            origin: view_box.origin(),
            width: view_box.width,
            height: view_box.height,
        })
    }

    /// Rastet einen Punkt auf den nächsten Rasterschnittpunkt ein.
    pub fn snap(&self, p: Point) -> Point {
        let local = (p - self.origin) / self.step;
        self.origin + local.round() * self.step
    }

    /// Alle vertikalen und horizontalen Linien innerhalb des Rasterbereichs.
    pub fn lines(&self) -> Vec<GridLine> {
        let mut lines = Vec::new();
        let eps = self.step * 1e-9;

        let mut i = 0u32;
        loop {
            let offset = f64::from(i) * self.step;
            if offset > self.width + eps {
                break;
            }
            let x = self.origin.x + offset;
            lines.push(GridLine {
                from: Point::new(x, self.origin.y),
                to: Point::new(x, self.origin.y + self.height),
            });
            i += 1;
        }

        let mut j = 0u32;
        loop {
            let offset = f64::from(j) * self.step;
            if offset > self.height + eps {
                break;
            }
            let y = self.origin.y + offset;
            lines.push(GridLine {
                from: Point::new(self.origin.x, y),
                to: Point::new(self.origin.x + self.width, y),
            });
            j += 1;
        }

        lines
    }
}
