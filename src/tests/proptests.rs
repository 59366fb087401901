use crate::alphabet::{is_symbol, ALPHABET};
use crate::constants::quantize;
use crate::{decode, decode_strict, encode, DecodeError, Encoder, Point};
use proptest::prelude::*;

prop_compose! {
    /// A point anywhere on Earth
    fn arb_point()(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) -> Point {
        Point::new(lat, lon)
    }
}

prop_compose! {
    /// A route: random start, then small steps, with the occasional long jump
    fn arb_route()(
        start in arb_point(),
        steps in prop::collection::vec(
            prop_oneof![
                8 => (-0.01f64..0.01, -0.01f64..0.01),
                1 => (-180.0f64..180.0, -360.0f64..360.0),
                1 => Just((0.0, 0.0)),
            ],
            0..300,
        ),
    ) -> Vec<Point> {
        let mut current = start;
        let mut route = vec![current];
        for (dlat, dlon) in steps {
            current = Point::new(
                (current.lat + dlat).clamp(-90.0, 90.0),
                (current.lon + dlon).clamp(-180.0, 180.0),
            );
            route.push(current);
        }
        route
    }
}

/// Points that survive encoding: those whose quantized value differs from the previous one
fn surviving(points: &[Point]) -> Vec<Point> {
    let mut last = (0, 0);
    let mut kept = Vec::new();
    for p in points {
        let q = (quantize(p.lat), quantize(p.lon));
        if q != last {
            kept.push(*p);
        }
        last = q;
    }
    kept
}

fn alphabet_string(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..max_len)
}

proptest! {
    /// Property: decoded points are within one quantum of the input
    #[test]
    fn prop_roundtrip_within_tolerance(route in arb_route()) {
        let expected = surviving(&route);
        let decoded = decode(&encode(&route)).unwrap();

        prop_assert_eq!(decoded.len(), expected.len());
        for (i, (got, want)) in decoded.iter().zip(&expected).enumerate() {
            prop_assert!((got.lat - want.lat).abs() <= 1e-5,
                "point {}: lat {} vs {}", i, got.lat, want.lat);
            prop_assert!((got.lon - want.lon).abs() <= 1e-5,
                "point {}: lon {} vs {}", i, got.lon, want.lon);
        }
    }

    /// Property: every encoded byte is an alphabet symbol
    #[test]
    fn prop_alphabet_closure(route in arb_route()) {
        let packed = encode(&route);
        prop_assert!(packed.iter().all(|&b| is_symbol(b)));
    }

    /// Property: encoding already-quantized points reproduces the same bytes
    #[test]
    fn prop_reencode_is_stable(route in arb_route()) {
        let packed = encode(&route);
        let decoded = decode(&packed).unwrap();
        prop_assert_eq!(encode(&decoded), packed);
    }

    /// Property: pushing in chunks, with a serde save/restore between them, equals one-shot encode
    #[test]
    fn prop_incremental_matches_oneshot(route in arb_route(), split in any::<prop::sample::Index>()) {
        let at = split.index(route.len() + 1);
        let mut enc = Encoder::new();
        enc.extend_from_slice(&route[..at]);

        let saved = serde_json::to_vec(&enc).unwrap();
        let mut restored: Encoder = serde_json::from_slice(&saved).unwrap();
        restored.extend(route[at..].iter().copied());

        prop_assert_eq!(restored.count(), route.len());
        prop_assert_eq!(restored.into_bytes(), encode(&route));
    }

    /// Property: whole-Earth jumps between arbitrary points round-trip
    #[test]
    fn prop_large_deltas(route in prop::collection::vec(arb_point(), 1..50)) {
        let expected = surviving(&route);
        let decoded = decode(&encode(&route)).unwrap();

        prop_assert_eq!(decoded.len(), expected.len());
        for (got, want) in decoded.iter().zip(&expected) {
            prop_assert!((got.lat - want.lat).abs() <= 1e-5);
            prop_assert!((got.lon - want.lon).abs() <= 1e-5);
        }
    }

    /// Property: any string over the alphabet decodes without error
    #[test]
    fn prop_alphabet_strings_decode(buf in alphabet_string(200)) {
        prop_assert!(decode(&buf).is_ok());
    }

    /// Property: strict and lenient decoding agree unless the input is truncated
    #[test]
    fn prop_strict_agrees_with_lenient(buf in alphabet_string(200)) {
        let lenient = decode(&buf).unwrap();
        match decode_strict(&buf) {
            Ok(strict) => prop_assert_eq!(strict, lenient),
            Err(DecodeError::TruncatedInput { position }) => {
                prop_assert!(position < buf.len());
                prop_assert_eq!(decode(&buf[..position]).unwrap(), lenient);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    /// Property: cutting an encoded path anywhere yields a prefix of its points
    #[test]
    fn prop_truncation_yields_prefix(route in arb_route(), cut in any::<prop::sample::Index>()) {
        let packed = encode(&route);
        let full = decode(&packed).unwrap();
        let at = cut.index(packed.len() + 1);

        let partial = decode(&packed[..at]).unwrap();
        prop_assert!(partial.len() <= full.len());
        prop_assert_eq!(&full[..partial.len()], &partial[..]);
    }

    /// Property: arbitrary bytes either decode or fail on the first non-symbol
    #[test]
    fn prop_arbitrary_bytes(buf in prop::collection::vec(any::<u8>(), 0..200)) {
        let first_bad = buf.iter().position(|&b| !is_symbol(b));
        match decode(&buf) {
            Ok(_) => prop_assert!(first_bad.is_none()),
            Err(DecodeError::InvalidSymbol { byte, position }) => {
                prop_assert_eq!(Some(position), first_bad);
                prop_assert_eq!(buf[position], byte);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
