//! Sichtbarkeit der Struktur-Overlays (Anker, Handles, Umrisse, Raster).

use serde::{Deserialize, Serialize};

/// Ein einzeln schaltbares Overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    /// Ankerpunkte als Quadrate
    Anchors,
    /// Handle-Linien mit Kontrollpunkten
    Handles,
    /// Begrenzungsrechtecke je Pfad
    Outlines,
    /// Ausrichtungsraster
    Grid,
}

impl OverlayKind {
    /// Alle Overlays in Anzeigereihenfolge.
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::Anchors,
        OverlayKind::Handles,
        OverlayKind::Outlines,
        OverlayKind::Grid,
    ];
}

/// Sichtbarkeit aller Overlays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlayVisibility {
    /// Ankerpunkte
    pub anchors: bool,
    /// Bézier-Handles
    pub handles: bool,
    /// Begrenzungsrechtecke
    pub outlines: bool,
    /// Ausrichtungsraster
    pub grid: bool,
}

impl Default for OverlayVisibility {
    fn default() -> Self {
        Self {
            anchors: false,
            handles: false,
            outlines: false,
            grid: true,
        }
    }
}

impl OverlayVisibility {
    /// Gibt zurück, ob das Overlay sichtbar ist.
    pub fn is_visible(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Anchors => self.anchors,
            OverlayKind::Handles => self.handles,
            OverlayKind::Outlines => self.outlines,
            OverlayKind::Grid => self.grid,
        }
    }

    /// Setzt die Sichtbarkeit eines Overlays.
    pub fn set(&mut self, kind: OverlayKind, visible: bool) {
        let slot = match kind {
            OverlayKind::Anchors => &mut self.anchors,
            OverlayKind::Handles => &mut self.handles,
            OverlayKind::Outlines => &mut self.outlines,
            OverlayKind::Grid => &mut self.grid,
        };
        *slot = visible;
    }

    /// Alle Overlays einschalten ("Generate All").
    pub fn show_all(&mut self) {
        for kind in OverlayKind::ALL {
            self.set(kind, true);
        }
    }
}
