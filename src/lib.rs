//! `zlatlong` - Compact text encoding for latitude/longitude paths
//!
//! Packs a sequence of coordinates into a short URL-safe ASCII string and back.
//! This is the compressed point format used by Bing Maps and the Bing Spatial
//! Data Services for route and boundary geometry.
//!
//! # Lossy
//!
//! Coordinates are quantized to 1e-5 degree (about 1.1 m at the equator) before
//! encoding. Decoding returns the quantized values. Two consecutive points that
//! quantize to the same value emit nothing, so the second one does not come
//! back out; the same holds for a first point at exactly 0, 0.
//!
//! # Example
//! ```
//! use zlatlong::{decode, encode_to_string, Point};
//!
//! let path = [
//!     Point::new(35.894309002906084, -110.72522000409663),
//!     Point::new(35.893930979073048, -110.72577999904752),
//!     Point::new(35.893744984641671, -110.72606003843248),
//!     Point::new(35.893366960808635, -110.72661500424147),
//! ];
//!
//! let packed = encode_to_string(&path);
//! assert_eq!(packed, "vx1vilihnM6hR7mEl2Q");
//!
//! let decoded = decode(packed.as_bytes()).unwrap();
//! for (a, b) in path.iter().zip(&decoded) {
//!     assert!((a.lat - b.lat).abs() <= 1e-5);
//!     assert!((a.lon - b.lon).abs() <= 1e-5);
//! }
//! ```
//!
//! # Wire Format
//!
//! There is no header or framing: the output is a run of digit groups, one per
//! point that moved.
//!
//! ## Per point
//!
//! | Step | Operation |
//! |------|-----------|
//! | 1 | Scale lat and lon by 100000, round half away from zero |
//! | 2 | Delta against the previous point (the first point is a delta from 0, 0) |
//! | 3 | Zigzag each delta: `(v << 1) ^ (v >> 63)` |
//! | 4 | Cantor-pair the two: `index = (zx + zy)(zx + zy + 1) / 2 + zy` |
//! | 5 | Write `index` in base 32, least significant digit first |
//!
//! ## Symbols
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0-31 | Last 5 bits of a group |
//! | 32-63 | 5 bits (value - 32), more of the same group follow |
//!
//! Values map to `A-Z a-z 0-9 _ -` in that order (see [`alphabet`]).
//!
//! ## Decoding
//!
//! The diagonal of the Cantor pairing is `floor((sqrt(8n + 5) - 1) / 2)`; the
//! remainder below its triangular number is `zy`, and `zx = diagonal - zy`.
//!
//! ## Supported Ranges
//! - Pairing index: 128 bits, enough for any pair of deltas below 2^62 units
//! - Whole-Earth jumps (±180°) use at most 11 symbols per point
//! - Truncated input: `decode` returns the complete points, `decode_strict` errors

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

pub mod alphabet;
mod constants;
mod decoder;
mod encoder;
mod error;
mod point;

#[cfg(test)]
mod tests;

// Re-export public API
pub use decoder::{decode, decode_strict, points, Points};
pub use encoder::{encode, encode_to_string, Encoder};
pub use error::{DecodeError, RestoreError};
pub use point::Point;
