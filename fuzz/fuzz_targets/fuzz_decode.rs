#![no_main]

use libfuzzer_sys::fuzz_target;
use zlatlong::{decode, points};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic, whatever the pairing index grows to
    let result = decode(data);

    // The lazy iterator must agree with the eager decoder
    let lazy: Result<Vec<_>, _> = points(data).collect();
    assert_eq!(result, lazy, "iterator and decode disagree");
});
