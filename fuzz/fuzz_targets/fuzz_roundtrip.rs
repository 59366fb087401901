#![no_main]

use libfuzzer_sys::fuzz_target;
use zlatlong::{decode, encode, Point};

fuzz_target!(|data: &[u8]| {
    // Bytes are interpreted as (lat: i32, lon: i32) in 1e-7 degree units,
    // folded into valid Earth coordinates
    let points: Vec<Point> = data
        .chunks_exact(8)
        .map(|chunk| {
            let lat = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let lon = i32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            Point::new(
                f64::from(lat % 900_000_000) * 1e-7,
                f64::from(lon % 1_800_000_000) * 1e-7,
            )
        })
        .collect();

    let packed = encode(&points);
    let decoded = decode(&packed).expect("encoder output must decode");

    // Points equal to their predecessor after quantization emit nothing
    assert!(decoded.len() <= points.len(), "decoded more points than encoded");
    if let (Some(last_in), Some(last_out)) = (points.last(), decoded.last()) {
        assert!((last_in.lat - last_out.lat).abs() <= 1e-5, "lat drift {last_in:?} {last_out:?}");
        assert!((last_in.lon - last_out.lon).abs() <= 1e-5, "lon drift {last_in:?} {last_out:?}");
    }
});
