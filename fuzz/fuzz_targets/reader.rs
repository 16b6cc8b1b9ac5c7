#![no_main]
use libfuzzer_sys::fuzz_target;
use linexml::{from_str, to_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = from_str(s) {
            let _ = to_string(&tree);
        }
    }
});
