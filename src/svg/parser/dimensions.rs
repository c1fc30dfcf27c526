//! Auflösung von viewBox, Breite und Höhe inklusive Fallback-Kette.

use crate::core::{BoundingBox, ViewBox};
use regex::Regex;
use std::sync::LazyLock;

static LENGTH_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?")
        .expect("statisches Regex-Pattern ist gültig")
});

/// Standardwerte, wenn das Dokument keine brauchbaren Maße mitbringt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionFallback {
    /// Rand um das berechnete Begrenzungsrechteck (Anteil der Ausdehnung)
    pub padding_ratio: f64,
    /// Seitenlänge der quadratischen Notfall-viewBox
    pub default_size: f64,
}

impl Default for DimensionFallback {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            default_size: 100.0,
        }
    }
}

/// Rohe Attribute des `<svg>`-Elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RootAttributes {
    pub view_box: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// Endgültige Maße des Dokuments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Dimensions {
    pub view_box: ViewBox,
    pub width: f64,
    pub height: f64,
}

/// Liest den numerischen Präfix einer Längenangabe (`"24px"` → 24).
///
/// Nicht positive oder fehlende Werte zählen als nicht gesetzt.
pub(crate) fn parse_length(text: &str) -> Option<f64> {
    LENGTH_PREFIX
        .find(text)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Bestimmt viewBox und Pixelmaße.
///
/// Reihenfolge: explizite viewBox, dann `0 0 width height`, dann das
/// gepolsterte Vereinigungsrechteck aller Pfade, zuletzt ein Quadrat mit
/// `default_size`.
pub(crate) fn resolve(
    attrs: &RootAttributes,
    content_bounds: Option<BoundingBox>,
    fallback: &DimensionFallback,
) -> Dimensions {
    let explicit_view_box = attrs.view_box.as_deref().and_then(|text| {
        let parsed = ViewBox::parse(text).filter(ViewBox::has_area);
        if parsed.is_none() {
            log::warn!("viewBox '{}' ist ungültig und wird ignoriert", text);
        }
        parsed
    });

    let width = attrs.width.as_deref().and_then(parse_length);
    let height = attrs.height.as_deref().and_then(parse_length);

    let view_box = match (explicit_view_box, width, height) {
        (Some(view_box), _, _) => view_box,
        (None, Some(w), Some(h)) => ViewBox::new(0.0, 0.0, w, h),
        _ => content_view_box(content_bounds, fallback.padding_ratio).unwrap_or_else(|| {
            log::warn!(
                "SVG ohne Maße, verwende {0}x{0}",
                fallback.default_size
            );
            ViewBox::new(0.0, 0.0, fallback.default_size, fallback.default_size)
        }),
    };

    Dimensions {
        view_box,
        width: width.unwrap_or(view_box.width),
        height: height.unwrap_or(view_box.height),
    }
}

fn content_view_box(bounds: Option<BoundingBox>, padding_ratio: f64) -> Option<ViewBox> {
    let padded = bounds?.padded(padding_ratio);
    let view_box = ViewBox::from(padded);
    if view_box.has_area() {
        log::info!("viewBox aus Pfad-Geometrie abgeleitet: {:?}", view_box);
        Some(view_box)
    } else {
        None
    }
}
