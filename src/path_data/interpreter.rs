//! Interpretiert Tokens zu Ankerpunkten, Handles und normalisierten Segmenten.
//!
//! Der Cursor-Zustand (aktueller Punkt, Subpfad-Start, letzter Kontrollpunkt)
//! wird als expliziter Akkumulator durch einen einzigen Durchlauf gereicht.

use super::tokenizer::Token;
use crate::core::{Handle, Point, Segment};

/// Ergebnis der Interpretation: drei zueinander passende Listen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterpretedPath {
    /// Ankerpunkte (ein Punkt je Segment außer `Z`)
    pub points: Vec<Point>,
    /// Handles mit Rückverweis auf Segment und Wert-Offset
    pub handles: Vec<Handle>,
    /// Normalisierte Segmente (`M`, `L`, `C`, `Q`, `A`, `Z`)
    pub segments: Vec<Segment>,
}

/// Kurvenfamilie des letzten Kontrollpunkts (für die Spiegelregel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFamily {
    /// `C`/`S`
    Cubic,
    /// `Q`/`T`
    Quadratic,
}

/// Cursor-Zustand während des Durchlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    /// Aktueller Punkt
    pub current_point: Point,
    /// Startpunkt des aktuellen Subpfads (Ziel von `Z`)
    pub subpath_start: Point,
    /// Letzter Kontrollpunkt, nur direkt nach einer Kurve gesetzt
    pub last_control: Option<(Point, CurveFamily)>,
}

impl Cursor {
    /// Löst ein (ggf. relatives) Koordinatenpaar gegen den aktuellen Punkt auf.
    fn resolve(&self, x: f64, y: f64, relative: bool) -> Point {
        let p = Point::new(x, y);
        if relative {
            p + self.current_point
        } else {
            p
        }
    }

    /// Spiegelt den letzten Kontrollpunkt am aktuellen Punkt.
    ///
    /// Nur wenn das vorherige Segment derselben Kurvenfamilie angehört,
    /// sonst liegt der Kontrollpunkt auf dem aktuellen Punkt.
    fn reflected_control(&self, family: CurveFamily) -> Point {
        match self.last_control {
            Some((control, last_family)) if last_family == family => {
                2.0 * self.current_point - control
            }
            _ => self.current_point,
        }
    }
}

/// Akkumulator aus Cursor und Ausgabe.
#[derive(Default)]
struct Walk {
    cursor: Cursor,
    out: InterpretedPath,
    /// Ob bereits ein `M` gesehen wurde
    started: bool,
}

impl Walk {
    fn push_segment(&mut self, segment: Segment) -> usize {
        if let Some(end) = segment.end_point() {
            self.out.points.push(end);
        }
        self.out.segments.push(segment);
        self.out.segments.len() - 1
    }

    fn line_to(&mut self, target: Point) {
        self.push_segment(Segment::line_to(target));
        self.cursor.current_point = target;
        self.cursor.last_control = None;
    }

    fn move_to(&mut self, args: &[f64], relative: bool) {
        let mut pairs = args.chunks_exact(2);
        let Some(first) = pairs.next() else {
            return;
        };

        let target = self.cursor.resolve(first[0], first[1], relative);
        self.push_segment(Segment::move_to(target));
        self.cursor.current_point = target;
        self.cursor.subpath_start = target;
        self.cursor.last_control = None;
        self.started = true;

        // Weitere Paare sind implizite Linien
        for pair in pairs {
            let target = self.cursor.resolve(pair[0], pair[1], relative);
            self.line_to(target);
        }
    }

    fn lines(&mut self, args: &[f64], relative: bool) {
        for pair in args.chunks_exact(2) {
            let target = self.cursor.resolve(pair[0], pair[1], relative);
            self.line_to(target);
        }
    }

    fn horizontal(&mut self, args: &[f64], relative: bool) {
        for &x in args {
            let current = self.cursor.current_point;
            let x = if relative { current.x + x } else { x };
            self.line_to(Point::new(x, current.y));
        }
    }

    fn vertical(&mut self, args: &[f64], relative: bool) {
        for &y in args {
            let current = self.cursor.current_point;
            let y = if relative { current.y + y } else { y };
            self.line_to(Point::new(current.x, y));
        }
    }

    fn cubic(&mut self, c1: Point, c2: Point, end: Point) {
        let start = self.cursor.current_point;
        let index = self.push_segment(Segment::cubic_to(c1, c2, end));
        self.out.handles.push(Handle::new(start, c1, index, 0));
        self.out.handles.push(Handle::new(end, c2, index, 2));
        self.cursor.current_point = end;
        self.cursor.last_control = Some((c2, CurveFamily::Cubic));
    }

    fn quadratic(&mut self, control: Point, end: Point) {
        let start = self.cursor.current_point;
        let index = self.push_segment(Segment::quad_to(control, end));
        // Beide Handle-Ansichten teilen sich denselben Kontrollpunkt
        self.out.handles.push(Handle::new(start, control, index, 0));
        self.out.handles.push(Handle::new(end, control, index, 0));
        self.cursor.current_point = end;
        self.cursor.last_control = Some((control, CurveFamily::Quadratic));
    }

    fn cubics(&mut self, args: &[f64], relative: bool) {
        for chunk in args.chunks_exact(6) {
            let c1 = self.cursor.resolve(chunk[0], chunk[1], relative);
            let c2 = self.cursor.resolve(chunk[2], chunk[3], relative);
            let end = self.cursor.resolve(chunk[4], chunk[5], relative);
            self.cubic(c1, c2, end);
        }
    }

    fn smooth_cubics(&mut self, args: &[f64], relative: bool) {
        for chunk in args.chunks_exact(4) {
            let c1 = self.cursor.reflected_control(CurveFamily::Cubic);
            let c2 = self.cursor.resolve(chunk[0], chunk[1], relative);
            let end = self.cursor.resolve(chunk[2], chunk[3], relative);
            self.cubic(c1, c2, end);
        }
    }

    fn quadratics(&mut self, args: &[f64], relative: bool) {
        for chunk in args.chunks_exact(4) {
            let control = self.cursor.resolve(chunk[0], chunk[1], relative);
            let end = self.cursor.resolve(chunk[2], chunk[3], relative);
            self.quadratic(control, end);
        }
    }

    fn smooth_quadratics(&mut self, args: &[f64], relative: bool) {
        for pair in args.chunks_exact(2) {
            let control = self.cursor.reflected_control(CurveFamily::Quadratic);
            let end = self.cursor.resolve(pair[0], pair[1], relative);
            self.quadratic(control, end);
        }
    }

    fn arcs(&mut self, args: &[f64], relative: bool) {
        for chunk in args.chunks_exact(7) {
            let end = self.cursor.resolve(chunk[5], chunk[6], relative);
            self.push_segment(Segment::arc_to(
                Point::new(chunk[0], chunk[1]),
                chunk[2],
                chunk[3],
                chunk[4],
                end,
            ));
            self.cursor.current_point = end;
            self.cursor.last_control = None;
        }
    }

    fn close(&mut self) {
        self.push_segment(Segment::close());
        self.cursor.current_point = self.cursor.subpath_start;
        self.cursor.last_control = None;
    }

    fn apply(&mut self, token: &Token) {
        let command = token.letter.to_ascii_uppercase();
        let relative = token.is_relative();
        let args = token.args.as_slice();

        if !self.started && command != 'M' {
            log::debug!("Pfad-Befehl '{}' vor dem ersten M verworfen", token.letter);
            return;
        }

        match command {
            'M' => self.move_to(args, relative),
            'L' => self.lines(args, relative),
            'H' => self.horizontal(args, relative),
            'V' => self.vertical(args, relative),
            'C' => self.cubics(args, relative),
            'S' => self.smooth_cubics(args, relative),
            'Q' => self.quadratics(args, relative),
            'T' => self.smooth_quadratics(args, relative),
            'A' => self.arcs(args, relative),
            'Z' => self.close(),
            _ => log::debug!("Unbekannter Pfad-Befehl '{}' übersprungen", token.letter),
        }
    }
}

/// Interpretiert eine Token-Folge.
///
/// Unvollständige Argumentgruppen am Ende eines Tokens und unbekannte
/// Befehle werden ohne Fehler übersprungen.
pub fn interpret(tokens: &[Token]) -> InterpretedPath {
    let mut walk = Walk::default();
    for token in tokens {
        walk.apply(token);
    }
    walk.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathCommand;
    use crate::path_data::tokenizer::tokenize;

    fn run(d: &str) -> InterpretedPath {
        interpret(&tokenize(d))
    }

    fn commands(path: &InterpretedPath) -> Vec<PathCommand> {
        path.segments.iter().map(|s| s.command).collect()
    }

    #[test]
    fn square_scenario() {
        let path = run("M0 0L100 0L100 100L0 100Z");
        assert_eq!(
            path.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ]
        );
        assert!(path.handles.is_empty());
        assert_eq!(
            commands(&path),
            vec![
                PathCommand::MoveTo,
                PathCommand::LineTo,
                PathCommand::LineTo,
                PathCommand::LineTo,
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn horizontal_and_vertical_become_lines() {
        let h = run("M0 0 H10");
        assert_eq!(h.segments[1], Segment::line_to(Point::new(10.0, 0.0)));

        let v = run("M0 0 V10");
        assert_eq!(v.segments[1], Segment::line_to(Point::new(0.0, 10.0)));
    }

    #[test]
    fn relative_horizontal_uses_current_point() {
        let path = run("M5 7 h10 10 v-2");
        assert_eq!(
            path.points,
            vec![
                Point::new(5.0, 7.0),
                Point::new(15.0, 7.0),
                Point::new(25.0, 7.0),
                Point::new(25.0, 5.0),
            ]
        );
    }

    #[test]
    fn implicit_lineto_after_move() {
        let path = run("M0 0 10 10 20 0");
        assert_eq!(
            path.segments,
            vec![
                Segment::move_to(Point::new(0.0, 0.0)),
                Segment::line_to(Point::new(10.0, 10.0)),
                Segment::line_to(Point::new(20.0, 0.0)),
            ]
        );
        assert_eq!(path.points.len(), 3);
    }

    #[test]
    fn relative_implicit_lineto_accumulates() {
        let path = run("m10 10 5 0 0 5");
        assert_eq!(
            path.points,
            vec![
                Point::new(10.0, 10.0),
                Point::new(15.0, 10.0),
                Point::new(15.0, 15.0),
            ]
        );
    }

    #[test]
    fn smooth_cubic_reflects_previous_control() {
        let path = run("M0 0 C10 0 10 10 20 10 S30 20 40 10");
        assert_eq!(path.segments[2].command, PathCommand::CubicTo);
        assert_eq!(path.segments[2].point_at(0), Some(Point::new(30.0, 10.0)));
        assert_eq!(path.segments[2].point_at(2), Some(Point::new(30.0, 20.0)));
        assert_eq!(path.segments[2].end_point(), Some(Point::new(40.0, 10.0)));
    }

    #[test]
    fn smooth_cubic_without_previous_curve_uses_current_point() {
        let path = run("M5 5 L10 10 S20 20 30 10");
        assert_eq!(path.segments[2].point_at(0), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn smooth_cubic_does_not_reflect_quadratic_control() {
        let path = run("M0 0 Q5 10 10 0 S20 10 30 0");
        assert_eq!(path.segments[2].point_at(0), Some(Point::new(10.0, 0.0)));
    }

    #[test]
    fn smooth_quadratic_reflects_previous_control() {
        let path = run("M0 0 Q10 10 20 0 T40 0");
        assert_eq!(path.segments[2].command, PathCommand::QuadTo);
        assert_eq!(path.segments[2].point_at(0), Some(Point::new(30.0, -10.0)));
    }

    #[test]
    fn chained_smooth_quadratics_keep_reflecting() {
        let path = run("M0 0 Q10 10 20 0 T40 0 T60 0");
        assert_eq!(path.segments[3].point_at(0), Some(Point::new(50.0, 10.0)));
    }

    #[test]
    fn consecutive_smooth_without_curve_reflect_through_current_point() {
        let path = run("M0 0 T10 0 T20 0");
        // Erstes T: Kontrollpunkt = (0,0); zweites T spiegelt (0,0) an (10,0)
        assert_eq!(path.segments[1].point_at(0), Some(Point::new(0.0, 0.0)));
        assert_eq!(path.segments[2].point_at(0), Some(Point::new(20.0, 0.0)));
    }

    #[test]
    fn cubic_emits_two_handles_with_back_references() {
        let path = run("M0 0 c10 0 10 10 20 10");
        assert_eq!(
            path.segments[1],
            Segment::cubic_to(
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(20.0, 10.0)
            )
        );
        assert_eq!(
            path.handles,
            vec![
                Handle::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1, 0),
                Handle::new(Point::new(20.0, 10.0), Point::new(10.0, 10.0), 1, 2),
            ]
        );
    }

    #[test]
    fn quadratic_handles_share_value_index() {
        let path = run("M0 0 q5 10 10 0");
        assert_eq!(path.handles.len(), 2);
        assert!(path.handles.iter().all(|h| h.value_index == 0));
        assert!(path
            .handles
            .iter()
            .all(|h| h.end == Point::new(5.0, 10.0)));
        assert_eq!(path.handles[1].start, Point::new(10.0, 0.0));
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let path = run("M10 10 L20 10 Z l5 5");
        assert_eq!(path.points.last(), Some(&Point::new(15.0, 15.0)));
        assert_eq!(path.points.len(), 3);
    }

    #[test]
    fn incomplete_trailing_chunks_are_skipped() {
        let path = run("M0 0 L10 10 20 C1 2 3");
        assert_eq!(path.points.len(), 2);
        assert_eq!(path.segments.len(), 2);
        assert!(path.handles.is_empty());
    }

    #[test]
    fn unknown_commands_leave_cursor_unchanged() {
        let path = run("M0 0 X99 99 l10 0");
        assert_eq!(path.points.last(), Some(&Point::new(10.0, 0.0)));
        assert_eq!(path.segments.len(), 2);
    }

    #[test]
    fn commands_before_first_move_are_dropped() {
        let path = run("L5 5 Z M1 1 L2 2");
        assert_eq!(path.segments[0], Segment::move_to(Point::new(1.0, 1.0)));
        assert_eq!(path.points.len(), 2);
    }

    #[test]
    fn arc_passes_through_with_absolute_endpoint() {
        let path = run("M10 10 a5 5 0 0 1 10 0 l0 5");
        assert_eq!(path.segments[1].command, PathCommand::ArcTo);
        assert_eq!(
            path.segments[1].values,
            vec![5.0, 5.0, 0.0, 0.0, 1.0, 20.0, 10.0]
        );
        assert_eq!(path.points.last(), Some(&Point::new(20.0, 15.0)));
        assert!(path.handles.is_empty());
    }

    #[test]
    fn handle_invariants_hold_for_mixed_path() {
        let path = run("M0 0 C1 1 2 2 3 3 S5 5 6 6 Q7 7 8 8 T9 9 L10 10 Z");
        for handle in &path.handles {
            let segment = &path.segments[handle.segment_index];
            assert!(segment.command.has_control_points());
            assert_eq!(handle.value_index % 2, 0);
            assert!(handle.value_index < segment.values.len() - 2);
        }
        let anchor_segments = path
            .segments
            .iter()
            .filter(|s| s.command.produces_anchor())
            .count();
        assert_eq!(path.points.len(), anchor_segments);
    }
}
