//! Package cluster implements intersection discovery on raw (lat, lon) pairs

/// Point represents a geographic coordinate (latitude, longitude)
///
/// The point is stored as [latitude, longitude] where:
/// - `[0]` is latitude
/// - `[1]` is longitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Cluster represents a result of DBScan clustering work
#[derive(Debug, Clone)]
pub struct Cluster {
    /// Cluster ID
    pub c: usize,
    /// Indices of points belonging to this cluster
    pub points: Vec<usize>,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Point([lat, lon])
    }

    pub fn lat(&self) -> f64 {
        self.0[0]
    }

    pub fn lon(&self) -> f64 {
        self.0[1]
    }

    /// True when neither coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.0[0].is_finite() && self.0[1].is_finite()
    }

    /// Returns squared Euclidean distance between two points, in degrees
    pub fn sq_dist(&self, b: &Point) -> f64 {
        use super::distance::distance_euclidean_sq;
        distance_euclidean_sq(self, b)
    }

    /// Bit pattern used for exact-equality deduplication
    ///
    /// `-0.0` and `0.0` compare equal, so both map to the same key.
    pub(crate) fn key(&self) -> (u64, u64) {
        ((self.0[0] + 0.0).to_bits(), (self.0[1] + 0.0).to_bits())
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lon): (f64, f64)) -> Self {
        Point::new(lat, lon)
    }
}
