//! SVG Import/Export.
//!
//! Gelesen werden nur die Attribute des `<svg>`-Wurzelelements und die
//! `d`-Attribute aller `<path>`-Elemente; alles andere wird ignoriert.

pub mod parser;
pub mod writer;

pub use parser::{parse_svg_document, parse_svg_document_with, DimensionFallback};
pub use writer::{combined_path_data, write_svg_document};
