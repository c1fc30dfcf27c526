#![no_main]

use libfuzzer_sys::fuzz_target;
use logo_grid_editor::{parse_path_data, segments_to_d};

fuzz_target!(|data: &[u8]| {
    let Ok(d) = std::str::from_utf8(data) else {
        return;
    };

    // Parsen darf nie panicken; kanonische Form muss stabil bleiben
    let first = parse_path_data(d);
    let canonical = segments_to_d(&first.segments);
    let second = parse_path_data(&canonical);
    assert_eq!(first.segments.len(), second.segments.len());
    assert_eq!(segments_to_d(&second.segments), canonical);
});
