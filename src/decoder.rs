//! Decoding functionality for packed point strings.

use tracing::debug;

use crate::alphabet::value_for;
use crate::constants::{dequantize, unpair, unzigzag, CONTINUATION, DIGIT_BITS, DIGIT_MASK, INDEX_BITS};
use crate::error::DecodeError;
use crate::point::Point;

/// Decode a packed path
///
/// Input that ends inside a digit group is accepted: the unfinished group is
/// dropped and the points before it are returned. Use [`decode_strict`] to get
/// an error instead.
///
/// # Errors
/// Returns `DecodeError::InvalidSymbol` if a byte is not in the alphabet. No
/// points are returned in that case.
///
/// # Example
/// ```
/// use zlatlong::decode;
///
/// let points = decode(b"vx1vilihnM6hR7mEl2Q").unwrap();
/// assert_eq!(points.len(), 4);
/// assert!((points[0].lat - 35.89431).abs() < 1e-9);
/// ```
pub fn decode(buf: &[u8]) -> Result<Vec<Point>, DecodeError> {
    let mut iter = points(buf);
    let result = collect_points(&mut iter)?;

    if let Some(position) = iter.truncated_at() {
        debug!(position, points = result.len(), "dropping unfinished digit group");
    }

    Ok(result)
}

/// Decode a packed path, rejecting input that ends inside a digit group
///
/// # Errors
/// - `DecodeError::InvalidSymbol` if a byte is not in the alphabet
/// - `DecodeError::TruncatedInput` if the last group has no terminating symbol
pub fn decode_strict(buf: &[u8]) -> Result<Vec<Point>, DecodeError> {
    let mut iter = points(buf);
    let result = collect_points(&mut iter)?;

    match iter.truncated_at() {
        Some(position) => Err(DecodeError::TruncatedInput { position }),
        None => Ok(result),
    }
}

/// Iterate over the points of a packed path
///
/// Decoding is lazy. The iterator yields at most one error and then stops; it
/// ends without an error if the input ends inside a digit group, which
/// [`Points::truncated_at`] reports afterwards.
#[must_use]
pub fn points(buf: &[u8]) -> Points<'_> {
    Points::new(buf)
}

fn collect_points(iter: &mut Points<'_>) -> Result<Vec<Point>, DecodeError> {
    // Most points of a real path take 2-5 symbols
    let mut result = Vec::with_capacity(iter.buf.len() / 3);
    for point in iter {
        match point {
            Ok(point) => result.push(point),
            Err(e) => {
                debug!(error = %e, points = result.len(), "invalid packed path");
                return Err(e);
            }
        }
    }
    Ok(result)
}

/// Where a `Points` iterator stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Running,
    Done,
    Failed,
    /// Input ended inside the group starting at this offset
    Truncated(usize),
}

/// Lazy decoder over a packed buffer, created by [`points`]
#[derive(Debug, Clone)]
pub struct Points<'a> {
    buf: &'a [u8],
    pos: usize,
    xsum: i64,
    ysum: i64,
    stop: Stop,
}

impl<'a> Points<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            xsum: 0,
            ysum: 0,
            stop: Stop::Running,
        }
    }

    /// Byte offset of the next symbol to read
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Start offset of the unfinished digit group, if the input ended inside one
    #[inline]
    #[must_use]
    pub fn truncated_at(&self) -> Option<usize> {
        match self.stop {
            Stop::Truncated(position) => Some(position),
            _ => None,
        }
    }

    /// Accumulated `(lat, lon)` in 1e-5 degree units after the points read so far
    #[inline]
    pub(crate) fn sums(&self) -> (i64, i64) {
        (self.ysum, self.xsum)
    }

    /// Read one digit group into a pairing index
    ///
    /// Returns `Ok(None)` if the input ends before a symbol without the
    /// continuation flag. Bits beyond the index width are dropped.
    fn read_group(&mut self) -> Result<Option<u128>, DecodeError> {
        let mut n = 0u128;
        let mut shift = 0u32;

        loop {
            let Some(&byte) = self.buf.get(self.pos) else {
                return Ok(None);
            };
            let value = value_for(byte).ok_or(DecodeError::InvalidSymbol { byte, position: self.pos })?;
            self.pos += 1;

            if shift < INDEX_BITS {
                n |= u128::from(value & DIGIT_MASK) << shift;
            }
            shift = shift.saturating_add(DIGIT_BITS);

            if value & CONTINUATION == 0 {
                return Ok(Some(n));
            }
        }
    }
}

impl Iterator for Points<'_> {
    type Item = Result<Point, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stop != Stop::Running {
            return None;
        }
        if self.pos >= self.buf.len() {
            self.stop = Stop::Done;
            return None;
        }

        let start = self.pos;
        let index = match self.read_group() {
            Ok(Some(index)) => index,
            Ok(None) => {
                self.stop = Stop::Truncated(start);
                return None;
            }
            Err(e) => {
                self.stop = Stop::Failed;
                return Some(Err(e));
            }
        };

        let (zx, zy) = unpair(index);
        self.xsum = self.xsum.wrapping_add(unzigzag(zx));
        self.ysum = self.ysum.wrapping_add(unzigzag(zy));

        Some(Ok(Point {
            lat: dequantize(self.ysum),
            lon: dequantize(self.xsum),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stop == Stop::Running {
            (0, Some(self.buf.len() - self.pos))
        } else {
            (0, Some(0))
        }
    }
}

impl std::iter::FusedIterator for Points<'_> {}
