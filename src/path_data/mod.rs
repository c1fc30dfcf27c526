//! Pfad-Engine: Tokenizer, Interpreter, Serializer und Edit-Projektion.
//!
//! Ablauf: `d` → [`tokenize`] → [`interpret`] → [`SvgPathData`]; Edits laufen
//! über den [`projector`] und [`segments_to_d`] zurück in einen neuen `d`.

pub mod interpreter;
pub mod projector;
pub mod serializer;
pub mod tokenizer;

pub use interpreter::{interpret, Cursor, CurveFamily, InterpretedPath};
pub use projector::{handle_move, move_handle, path_move, translate_path};
pub use serializer::segments_to_d;
pub use tokenizer::{tokenize, Token};

use crate::core::SvgPathData;

/// Parst einen Pfad-String. Wirft nie; kaputte Eingaben ergeben leere Listen.
///
/// Der ursprüngliche String bleibt als `d` erhalten, das
/// Begrenzungsrechteck bleibt leer.
pub fn parse_path_data(d: &str) -> SvgPathData {
    let InterpretedPath {
        points,
        handles,
        segments,
    } = interpret(&tokenize(d));

    SvgPathData {
        d: d.to_string(),
        points,
        handles,
        segments,
        bounding_box: None,
    }
}

/// Baut einen Pfad aus Segmenten über den kanonischen String neu auf.
pub fn path_from_segments(segments: &[crate::core::Segment]) -> SvgPathData {
    parse_path_data(&segments_to_d(segments))
}
