#![no_main]

use libfuzzer_sys::fuzz_target;

// Sorting arbitrary bytes never panics and is idempotent on success.
fuzz_target!(|data: &[u8]| {
    if let Ok(once) = stakenet_codec::sort_json(data) {
        let twice = stakenet_codec::sort_json(&once).expect("sorted output must parse");
        assert_eq!(once, twice);
    }
});
