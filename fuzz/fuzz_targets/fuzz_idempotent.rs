#![no_main]

use libfuzzer_sys::fuzz_target;
use zlatlong::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must re-encode to something that decodes to the same points,
    // apart from explicit zero groups, which re-encode to nothing
    let Ok(first) = decode(data) else {
        return;
    };
    // Corrupt input can accumulate sums beyond what f64 holds exactly
    if first.iter().any(|p| p.lat.abs() > 1e6 || p.lon.abs() > 1e6) {
        return;
    }
    let packed = encode(&first);
    let second = decode(&packed).expect("encoder output must decode");
    assert!(second.len() <= first.len());
    assert_eq!(encode(&second), packed, "re-encoding is not stable");
});
