use std::f64::consts::PI;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth radius in kilometers
pub const EARTH_R: f64 = 6371.0;

use super::point::Point;

/// Calculates plain Euclidean distance on the raw (lat, lon) pair
///
/// No geodesic correction is applied; at city scale one degree of latitude
/// and one degree of longitude are treated as the same length.
pub fn distance_euclidean(p1: &Point, p2: &Point) -> f64 {
    distance_euclidean_sq(p1, p2).sqrt()
}

/// Squared Euclidean distance, for comparisons against `eps * eps`
pub fn distance_euclidean_sq(p1: &Point, p2: &Point) -> f64 {
    let v1 = p1.0[0] - p2.0[0];
    let v2 = p1.0[1] - p2.0[1];

    v1 * v1 + v2 * v2
}

/// Calculates spherical (equirectangular) distance between two points
///
/// # Returns
///
/// Distance in kilometers
pub fn distance_spherical(p1: &Point, p2: &Point) -> f64 {
    let v1 = (p1.lat() - p2.lat()) * DEGREE_RAD;
    let v1 = v1 * v1;

    let v2 = (p1.lon() - p2.lon()) * DEGREE_RAD * ((p1.lat() + p2.lat()) / 2.0 * DEGREE_RAD).cos();
    let v2 = v2 * v2;

    EARTH_R * (v1 + v2).sqrt()
}
