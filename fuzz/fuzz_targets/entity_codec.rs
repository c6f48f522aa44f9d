#![no_main]

use libfuzzer_sys::fuzz_target;
use xmlite::entity::{decode, encode};

fuzz_target!(|data: &str| {
    let decoded = decode(data);
    let _ = encode(&decoded);
    if !data.contains('%') {
        assert_eq!(decode(&encode(data)), data);
    }
});
