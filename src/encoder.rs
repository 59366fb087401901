//! Encoder for the compressed point format.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::alphabet::symbol_for;
use crate::constants::{digit_count, pair, quantize, zigzag, CONTINUATION, DIGIT_BITS, DIGIT_MASK};
use crate::decoder::points;
use crate::error::{DecodeError, RestoreError};
use crate::point::Point;

/// Incremental encoder
///
/// Holds the packed output and the last quantized point, so points can be pushed
/// one at a time. The state is serializable: a restored encoder continues the
/// path exactly where the saved one stopped. Deserializing checks that the
/// state is one an encoder could have produced (see [`RestoreError`]), so the
/// buffer always holds complete digit groups of alphabet symbols.
///
/// # Example
/// ```
/// use zlatlong::{Encoder, Point};
///
/// let mut enc = Encoder::new();
/// enc.push(Point::new(35.894309002906084, -110.72522000409663));
/// enc.push(Point::new(35.893930979073048, -110.72577999904752));
/// assert_eq!(enc.count(), 2);
/// assert_eq!(enc.as_str(), "vx1vilihnM6hR");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EncoderState")]
pub struct Encoder {
    /// Packed symbols emitted so far
    buf: Vec<u8>,
    /// Last quantized latitude (1e-5 degree units)
    last_lat: i64,
    /// Last quantized longitude (1e-5 degree units)
    last_lon: i64,
    /// Points pushed, including ones that emitted no symbols
    count: usize,
}

impl Encoder {
    /// Create an empty encoder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty encoder with room for `bytes` symbols
    #[inline]
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Append one point
    ///
    /// A point that quantizes to the same value as the previous one (or a first
    /// point at 0, 0) has a pairing index of zero and emits no symbols, so it
    /// will not come back out of the decoder.
    pub fn push(&mut self, point: Point) {
        let lat = quantize(point.lat);
        let lon = quantize(point.lon);

        let dy = lat.wrapping_sub(self.last_lat);
        let dx = lon.wrapping_sub(self.last_lon);
        self.last_lat = lat;
        self.last_lon = lon;
        self.count += 1;

        let index = pair(zigzag(dx), zigzag(dy));
        trace!(dy, dx, index = %index, digits = digit_count(index), "encoding point");
        self.emit(index);
    }

    /// Append every point of `points`
    pub fn extend_from_slice(&mut self, points: &[Point]) {
        self.buf.reserve(points.len() * 4);
        for &point in points {
            self.push(point);
        }
    }

    /// Write `index` as base-32 digits, least significant first
    #[inline]
    fn emit(&mut self, mut index: u128) {
        while index > 0 {
            let mut digit = (index & u128::from(DIGIT_MASK)) as u8;
            index >>= DIGIT_BITS;
            if index > 0 {
                digit |= CONTINUATION;
            }
            self.buf.push(symbol_for(digit));
        }
    }

    /// Number of points pushed
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Encoded size in bytes
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Whether any symbols have been emitted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get a reference to the packed bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The packed bytes as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf).expect("encoder buffer holds only ASCII alphabet symbols")
    }

    /// Copy of the packed bytes
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Consume the encoder, returning the packed bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Consume the encoder, returning the packed bytes as a `String`
    #[must_use]
    pub fn into_string(self) -> String {
        String::from_utf8(self.buf).expect("encoder buffer holds only ASCII alphabet symbols")
    }
}

/// Unchecked serialized form of [`Encoder`]
#[derive(Deserialize)]
struct EncoderState {
    buf: Vec<u8>,
    last_lat: i64,
    last_lon: i64,
    count: usize,
}

impl TryFrom<EncoderState> for Encoder {
    type Error = RestoreError;

    /// Decode the buffer and check it against the saved point state
    fn try_from(state: EncoderState) -> Result<Self, Self::Error> {
        let mut iter = points(&state.buf);
        let mut encoded = 0usize;
        for point in iter.by_ref() {
            point?;
            encoded += 1;
        }
        if let Some(position) = iter.truncated_at() {
            return Err(DecodeError::TruncatedInput { position }.into());
        }

        // Points that emitted nothing leave the position unchanged, so the
        // buffer's final sums are always the last pushed point
        let (decoded_lat, decoded_lon) = iter.sums();
        if (decoded_lat, decoded_lon) != (state.last_lat, state.last_lon) {
            return Err(RestoreError::LastPointMismatch {
                last_lat: state.last_lat,
                last_lon: state.last_lon,
                decoded_lat,
                decoded_lon,
            });
        }
        if state.count < encoded {
            return Err(RestoreError::CountTooSmall {
                count: state.count,
                encoded,
            });
        }

        Ok(Self {
            buf: state.buf,
            last_lat: state.last_lat,
            last_lon: state.last_lon,
            count: state.count,
        })
    }
}

impl Extend<Point> for Encoder {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

impl FromIterator<Point> for Encoder {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut enc = Self::new();
        enc.extend(iter);
        enc
    }
}

/// Encode a path
///
/// Never fails. An empty slice gives an empty buffer.
///
/// # Example
/// ```
/// use zlatlong::{encode, Point};
///
/// let bytes = encode(&[Point::new(0.00001, 0.0)]);
/// assert_eq!(bytes, b"F");
/// ```
#[must_use]
pub fn encode(points: &[Point]) -> Vec<u8> {
    let mut enc = Encoder::new();
    enc.extend_from_slice(points);
    enc.into_bytes()
}

/// Encode a path straight to a `String`
#[must_use]
pub fn encode_to_string(points: &[Point]) -> String {
    let mut enc = Encoder::new();
    enc.extend_from_slice(points);
    enc.into_string()
}
