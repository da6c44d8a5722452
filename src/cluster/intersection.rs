//! Reduces candidate signals to one centroid per dense cluster.

use std::collections::BTreeMap;

use tracing::debug;

use super::dbscan::{DEFAULT_EPS, DEFAULT_MIN_POINTS, NOISE, db_scan, labels};
use super::point::{Point, PointList};

/// DBSCAN parameters for grouping candidates into intersections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionClusterer {
    pub eps: f64,
    pub min_points: usize,
}

impl Default for IntersectionClusterer {
    fn default() -> Self {
        IntersectionClusterer {
            eps: DEFAULT_EPS,
            min_points: DEFAULT_MIN_POINTS,
        }
    }
}

/// Running coordinate sums for one label
#[derive(Default)]
struct Accumulator {
    lat: f64,
    lon: f64,
    count: usize,
}

impl IntersectionClusterer {
    /// Assigns a cluster label to every candidate, [`NOISE`] for outliers
    pub fn label(&self, candidates: &[Point]) -> Vec<i32> {
        let (clusters, noise) = db_scan(candidates, self.eps, self.min_points);
        debug!(
            candidates = candidates.len(),
            clusters = clusters.len(),
            noise = noise.len(),
            "dbscan done"
        );
        labels(&clusters, candidates.len())
    }

    /// Returns one centroid per non-noise label, in ascending label order
    pub fn centroids(&self, candidates: &[Point]) -> PointList {
        if candidates.is_empty() {
            return PointList::new();
        }
        centroids_by_label(candidates, &self.label(candidates))
    }
}

/// Averages the points sharing each non-noise label
///
/// Labels need not be contiguous; sums are keyed by label before the
/// ordered list is produced.
pub fn centroids_by_label(points: &[Point], labels: &[i32]) -> PointList {
    let mut sums: BTreeMap<i32, Accumulator> = BTreeMap::new();

    for (point, &label) in points.iter().zip(labels) {
        if label == NOISE {
            continue;
        }
        let acc = sums.entry(label).or_default();
        acc.lat += point.lat();
        acc.lon += point.lon();
        acc.count += 1;
    }

    sums.into_values()
        .map(|acc| Point::new(acc.lat / acc.count as f64, acc.lon / acc.count as f64))
        .collect()
}

/// Runs the intersection clusterer with default parameters
pub fn intersections(candidates: &[Point]) -> PointList {
    IntersectionClusterer::default().centroids(candidates)
}
