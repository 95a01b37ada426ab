#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        // Geladene Wege müssen die Invarianten erfüllen
        if let Ok(path) = route_path_editor::json::parse_route_path(json) {
            assert!(path.validate().is_empty());
            let _ = route_path_editor::json::write_route_path(&path);
        }
    }
});
