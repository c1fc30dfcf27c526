#![no_main]

use libfuzzer_sys::fuzz_target;
use logo_grid_editor::{parse_svg_document, write_svg_document};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(doc) = parse_svg_document(text) {
        let _ = parse_svg_document(&write_svg_document(&doc));
    }
});
