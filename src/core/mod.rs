//! Core-Domänentypen: Geometrie, Segmente, Handles, Pfade, Dokument, Raster.

pub mod bounds;
pub mod document;
pub mod geometry;
pub mod grid;
pub mod handle;
/// Normalisierte Segmente und kanonische Pfad-Befehle
pub mod segment;
pub mod spatial;
pub mod svg_path;

pub use bounds::{BoundsProvider, ControlPolygonBounds};
pub use document::ParsedSvg;
pub use geometry::{BoundingBox, Point, ViewBox};
pub use grid::{Grid, GridLine, MAX_LINES_PER_AXIS};
pub use handle::Handle;
pub use segment::{PathCommand, Segment};
pub use spatial::{HandleIndex, HandleMatch, HandleRef};
pub use svg_path::SvgPathData;
