//! Point struct for encoded and decoded paths.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
///
/// No range checking is done: anything finite can be encoded, it just has to
/// survive quantization to 1e-5 degree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// `(lat, lon)`
impl From<(f64, f64)> for Point {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// `(lat, lon)`
impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.lat, p.lon)
    }
}
