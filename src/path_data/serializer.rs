//! Schreibt normalisierte Segmente zurück in einen kanonischen Pfad-String.

use crate::core::Segment;
use std::fmt::Write;

/// Kanonische Form: Befehlsbuchstabe direkt gefolgt von den Werten,
/// einzeln durch Leerzeichen getrennt, ohne Trenner zwischen Segmenten.
///
/// Beispiel: `M0 0L100 0L100 100L0 100Z`
pub fn segments_to_d(segments: &[Segment]) -> String {
    let mut d = String::with_capacity(segments.len() * 16);
    for segment in segments {
        d.push(segment.command.letter());
        for (i, value) in segment.values.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            push_number(&mut d, *value);
        }
    }
    d
}

/// Formatiert eine Zahl verlustfrei und ohne Exponent (`-0` wird zu `0`).
pub(crate) fn format_number(value: f64) -> String {
    let mut out = String::new();
    push_number(&mut out, value);
    out
}

fn push_number(out: &mut String, value: f64) {
    if value == 0.0 {
        out.push('0');
    } else {
        // Display von f64 liefert die kürzeste rundungsstabile Darstellung
        let _ = write!(out, "{value}");
    }
}
