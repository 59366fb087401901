//! Internal constants and numeric helpers for the compressed point format.

/// Coordinates are quantized to 1e-5 degree before delta encoding
pub(crate) const SCALE: f64 = 100_000.0;

/// Inverse of `SCALE`, applied as a multiplication when decoding
pub(crate) const UNSCALE: f64 = 0.000_01;

/// Payload bits carried by one symbol
pub(crate) const DIGIT_BITS: u32 = 5;

/// Mask for the payload bits of one symbol
pub(crate) const DIGIT_MASK: u8 = 0b1_1111;

/// Continuation flag: set on every symbol that is followed by another of the same group
pub(crate) const CONTINUATION: u8 = 0b10_0000;

/// Width of the pairing index in bits. Digits past this width are dropped when decoding.
pub(crate) const INDEX_BITS: u32 = u128::BITS;

/// Scale a coordinate to 1e-5 degree units, rounding half away from zero.
///
/// Computed as `floor(x + 0.5)` / `ceil(x - 0.5)` rather than `f64::round`: the two
/// disagree on scaled values such as `0.49999999999999994`, and existing encoded
/// paths use the former. Out-of-range values saturate.
#[inline]
pub(crate) fn quantize(degrees: f64) -> i64 {
    let scaled = degrees * SCALE;
    if scaled < 0.0 {
        (scaled - 0.5).ceil() as i64
    } else {
        (scaled + 0.5).floor() as i64
    }
}

/// Convert an accumulated 1e-5 degree sum back to degrees
#[inline]
pub(crate) fn dequantize(units: i64) -> f64 {
    units as f64 * UNSCALE
}

/// Map a signed delta onto the non-negative integers: 0, -1, 1, -2, 2 ... -> 0, 1, 2, 3, 4 ...
///
/// The shift is arithmetic, so for every delta in `i32` range this is bit-identical
/// to the 32-bit `(v << 1) ^ (v >> 31)` form.
#[inline]
pub(crate) const fn zigzag(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

/// Inverse of [`zigzag`]. Accepts any pairing component; values wider than 64 bits
/// only come from corrupt input and are truncated.
#[inline]
pub(crate) const fn unzigzag(z: u128) -> i64 {
    ((z >> 1) as i64) ^ -((z & 1) as i64)
}

/// `d * (d + 1) / 2`, or `None` if it does not fit in the index width
#[inline]
pub(crate) fn triangular(d: u128) -> Option<u128> {
    let (even, odd) = if d % 2 == 0 { (d, d.checked_add(1)?) } else { (d.checked_add(1)?, d) };
    (even / 2).checked_mul(odd)
}

/// Cantor pairing of two zigzagged deltas: `(zx + zy)(zx + zy + 1) / 2 + zy`.
///
/// Both inputs are below 2^64, so the sum fits in 65 bits. The product only leaves
/// `u128` for deltas of more than 2^62 units, far outside any coordinate range;
/// those wrap instead of panicking.
#[inline]
pub(crate) fn pair(zx: u64, zy: u64) -> u128 {
    let zx = u128::from(zx);
    let zy = u128::from(zy);
    let diagonal = zx + zy;
    let (even, odd) = if diagonal % 2 == 0 { (diagonal, diagonal + 1) } else { (diagonal + 1, diagonal) };
    (even / 2).wrapping_mul(odd).wrapping_add(zy)
}

/// Inverse of [`pair`], returning `(zx, zy)`.
///
/// The diagonal is first estimated in floating point as `floor((sqrt(8n + 5) - 1) / 2)`,
/// which is exact while `n` fits in an `f64` mantissa, then nudged with integer
/// arithmetic until `T(d) <= n < T(d + 1)` holds for any `n`.
#[inline]
pub(crate) fn unpair(n: u128) -> (u128, u128) {
    let estimate = (((8.0 * n as f64 + 5.0).sqrt() - 1.0) / 2.0).floor();
    let mut diagonal = estimate as u128;

    while triangular(diagonal).map_or(true, |t| t > n) {
        diagonal -= 1;
    }
    while triangular(diagonal + 1).is_some_and(|t| t <= n) {
        diagonal += 1;
    }

    // The loops above guarantee triangular(diagonal) exists and is <= n
    let base = triangular(diagonal).unwrap_or(0);
    let zy = n - base;
    (diagonal - zy, zy)
}

/// Number of symbols needed to emit a pairing index. Zero emits nothing.
#[inline]
pub(crate) const fn digit_count(index: u128) -> usize {
    let bits = INDEX_BITS - index.leading_zeros();
    bits.div_ceil(DIGIT_BITS) as usize
}
