//! Normalisierte Pfad-Segmente (absolute Koordinaten, keine Kurzformen).

use super::Point;

/// Kanonischer, absoluter Pfad-Befehl.
///
/// Kurzformen (`H`, `V`, `S`, `T`) und relative Varianten existieren nur
/// während des Tokenizens; im Modell stehen ausschließlich diese Befehle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathCommand {
    /// `M`: neuer Subpfad
    MoveTo,
    /// `L`: Gerade
    LineTo,
    /// `C`: kubische Bézierkurve
    CubicTo,
    /// `Q`: quadratische Bézierkurve
    QuadTo,
    /// `A`: elliptischer Bogen, unverändert durchgereicht
    ArcTo,
    /// `Z`: Subpfad schließen
    Close,
}

impl PathCommand {
    /// Buchstabe des Befehls im Pfad-String.
    pub fn letter(self) -> char {
        match self {
            PathCommand::MoveTo => 'M',
            PathCommand::LineTo => 'L',
            PathCommand::CubicTo => 'C',
            PathCommand::QuadTo => 'Q',
            PathCommand::ArcTo => 'A',
            PathCommand::Close => 'Z',
        }
    }

    /// Anzahl der Werte im `values`-Array eines Segments.
    pub fn value_count(self) -> usize {
        match self {
            PathCommand::MoveTo | PathCommand::LineTo => 2,
            PathCommand::CubicTo => 6,
            PathCommand::QuadTo => 4,
            PathCommand::ArcTo => 7,
            PathCommand::Close => 0,
        }
    }

    /// Ob das Segment einen Ankerpunkt am Ende erzeugt (alles außer `Z`).
    pub fn produces_anchor(self) -> bool {
        self != PathCommand::Close
    }

    /// Ob das Segment ziehbare Kontrollpunkte besitzt.
    pub fn has_control_points(self) -> bool {
        matches!(self, PathCommand::CubicTo | PathCommand::QuadTo)
    }
}

/// Eine normalisierte Pfad-Anweisung mit flachen, absoluten Werten.
///
/// Layout von `values` je Befehl:
/// - `M`/`L`: `[x, y]`
/// - `C`: `[c1x, c1y, c2x, c2y, x, y]`
/// - `Q`: `[cx, cy, x, y]`
/// - `A`: `[rx, ry, rotation, large_arc, sweep, x, y]`
/// - `Z`: `[]`
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Kanonischer Befehl
    pub command: PathCommand,
    /// Flache Argumentliste in absoluten Koordinaten
    pub values: Vec<f64>,
}

impl Segment {
    pub fn move_to(p: Point) -> Self {
        Self {
            command: PathCommand::MoveTo,
            values: vec![p.x, p.y],
        }
    }

    pub fn line_to(p: Point) -> Self {
        Self {
            command: PathCommand::LineTo,
            values: vec![p.x, p.y],
        }
    }

    pub fn cubic_to(c1: Point, c2: Point, end: Point) -> Self {
        Self {
            command: PathCommand::CubicTo,
            values: vec![c1.x, c1.y, c2.x, c2.y, end.x, end.y],
        }
    }

    pub fn quad_to(control: Point, end: Point) -> Self {
        Self {
            command: PathCommand::QuadTo,
            values: vec![control.x, control.y, end.x, end.y],
        }
    }

    /// Bogen-Segment; Radien, Rotation und Flags werden nicht interpretiert.
    pub fn arc_to(radii: Point, rotation: f64, large_arc: f64, sweep: f64, end: Point) -> Self {
        Self {
            command: PathCommand::ArcTo,
            values: vec![radii.x, radii.y, rotation, large_arc, sweep, end.x, end.y],
        }
    }

    pub fn close() -> Self {
        Self {
            command: PathCommand::Close,
            values: Vec::new(),
        }
    }

    /// Liest das Koordinatenpaar ab `value_index`.
    pub fn point_at(&self, value_index: usize) -> Option<Point> {
        let x = *self.values.get(value_index)?;
        let y = *self.values.get(value_index + 1)?;
        Some(Point::new(x, y))
    }

    /// Schreibt ein Koordinatenpaar ab `value_index`. `false` bei ungültigem Offset.
    pub fn set_point_at(&mut self, value_index: usize, p: Point) -> bool {
        if value_index + 1 >= self.values.len() {
            return false;
        }
        self.values[value_index] = p.x;
        self.values[value_index + 1] = p.y;
        true
    }

    /// Endpunkt (Anker) des Segments; `None` für `Z`.
    pub fn end_point(&self) -> Option<Point> {
        if !self.command.produces_anchor() || self.values.len() < 2 {
            return None;
        }
        self.point_at(self.values.len() - 2)
    }

    /// Offsets aller (x, y)-Koordinatenpaare dieses Segments.
    ///
    /// Beim Bogen ist nur der Endpunkt eine Koordinate, die übrigen Werte
    /// sind Radien, Winkel und Flags.
    pub fn coordinate_offsets(&self) -> Vec<usize> {
        match self.command {
            PathCommand::ArcTo => vec![5],
            _ => (0..self.values.len() / 2).map(|i| i * 2).collect(),
        }
    }
}
