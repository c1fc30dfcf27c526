//! Spatial-Index (KD-Tree) über alle Handle-Enden für das Drag-Picking.

use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashMap;

use crate::core::{ParsedSvg, Point};

/// Adresse eines Handles im Dokument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleRef {
    /// Index des Pfads
    pub path_index: usize,
    /// Index des Handles innerhalb des Pfads
    pub handle_index: usize,
}

/// Ergebnis einer Distanzabfrage gegen den Handle-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMatch {
    /// Gefundener Handle
    pub handle: HandleRef,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über den Kontrollpunkten eines Dokuments.
///
/// Der Baum enthält jede Position nur einmal; deckungsgleiche Handle-Enden
/// (etwa beide Handles eines `Q`) liegen gemeinsam in einer Gruppe.
#[derive(Debug, Clone)]
pub struct HandleIndex {
    tree: KdTree<f64, 2>,
    groups: Vec<Vec<HandleRef>>,
    handle_count: usize,
}

impl HandleIndex {
    /// Baut den Index aus allen Handles aller Pfade.
    pub fn from_document(doc: &ParsedSvg) -> Self {
        let mut slots: HashMap<[u64; 2], usize> = HashMap::new();
        let mut groups: Vec<Vec<HandleRef>> = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut handle_count = 0;

        for (path_index, path) in doc.paths.iter().enumerate() {
            for (handle_index, handle) in path.handles.iter().enumerate() {
                let handle_ref = HandleRef {
                    path_index,
                    handle_index,
                };
                let slot = *slots.entry(position_key(handle.end)).or_insert_with(|| {
                    entries.push([handle.end.x, handle.end.y]);
                    groups.push(Vec::new());
                    groups.len() - 1
                });
                groups[slot].push(handle_ref);
                handle_count += 1;
            }
        }

        let tree: KdTree<f64, 2> = (&entries).into();
        Self {
            tree,
            groups,
            handle_count,
        }
    }

    /// Anzahl indexierter Handles.
    pub fn len(&self) -> usize {
        self.handle_count
    }

    /// Gibt `true` zurück, wenn keine Handles im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Nächster Handle zur Position; bei deckungsgleichen Handles der erste
    /// in Dokumentreihenfolge.
    pub fn nearest(&self, query: Point) -> Option<HandleMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let handle = *self.groups.get(result.item as usize)?.first()?;

        Some(HandleMatch {
            handle,
            distance: result.distance.sqrt(),
        })
    }

    /// Nächster Handle innerhalb von `radius`, sonst `None`.
    pub fn pick(&self, query: Point, radius: f64) -> Option<HandleMatch> {
        self.nearest(query).filter(|m| m.distance <= radius)
    }
}

/// Bitmuster einer Position; `-0.0` und `0.0` fallen zusammen.
fn position_key(p: Point) -> [u64; 2] {
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ViewBox;
    use crate::path_data::parse_path_data;
    use std::sync::Arc;

    fn sample_doc() -> ParsedSvg {
        ParsedSvg {
            raw_svg: Arc::from(""),
            view_box: ViewBox::new(0.0, 0.0, 100.0, 100.0),
            width: 100.0,
            height: 100.0,
            paths: vec![
                Arc::new(parse_path_data("M0 0 C10 0 10 10 20 10")),
                Arc::new(parse_path_data("M50 50 Q60 40 70 50")),
            ],
        }
    }

    #[test]
    fn indexes_every_handle() {
        let index = HandleIndex::from_document(&sample_doc());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn pick_returns_nearest_within_radius() {
        let index = HandleIndex::from_document(&sample_doc());
        let hit = index.pick(Point::new(10.5, 9.5), 2.0).expect("Treffer erwartet");
        assert_eq!(
            hit.handle,
            HandleRef {
                path_index: 0,
                handle_index: 1
            }
        );
        assert!(index.pick(Point::new(90.0, 90.0), 2.0).is_none());
    }

    #[test]
    fn quadratic_handles_share_one_entry() {
        let index = HandleIndex::from_document(&sample_doc());
        let hit = index.pick(Point::new(60.0, 40.0), 0.5).expect("Treffer erwartet");
        assert_eq!(
            hit.handle,
            HandleRef {
                path_index: 1,
                handle_index: 0
            }
        );
        assert_eq!(index.len(), 4);
        assert_eq!(index.groups.len(), 3);
    }

    #[test]
    fn many_coincident_control_points_are_indexed() {
        let mut d = String::from("M0 0");
        for i in 1..=17 {
            d.push_str(&format!(" Q50 50 {} 0", i * 10));
        }
        let doc = ParsedSvg {
            paths: vec![Arc::new(parse_path_data(&d))],
            ..sample_doc()
        };

        let index = HandleIndex::from_document(&doc);
        assert_eq!(index.len(), 34);

        let hit = index.pick(Point::new(50.0, 50.0), 1.0).expect("Treffer erwartet");
        assert_eq!(
            hit.handle,
            HandleRef {
                path_index: 0,
                handle_index: 0
            }
        );
    }

    #[test]
    fn document_without_curves_has_empty_index() {
        let doc = ParsedSvg {
            paths: vec![Arc::new(parse_path_data("M0 0 L10 10"))],
            ..sample_doc()
        };
        let index = HandleIndex::from_document(&doc);
        assert!(index.is_empty());
        assert!(index.nearest(Point::ZERO).is_none());
    }
}
