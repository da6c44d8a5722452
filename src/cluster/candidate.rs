//! Candidate filtering: keep only signals that have a near neighbor.
//!
//! The full pairwise [`DistanceMatrix`] is built, each row is scanned for an
//! entry below the proximity threshold, and the row's point is kept. Points
//! are deduplicated by exact coordinate equality in first-seen order.

use std::collections::HashSet;

use tracing::debug;

use super::matrix::DistanceMatrix;
use super::point::{Point, PointList};

/// Distance below which two signals are "near" (~100 ft at mid-latitudes)
pub const DEFAULT_PROXIMITY: f64 = 0.02;

/// Distances below this are treated as zero when masking
pub const DEFAULT_NEAR_ZERO: f64 = 1e-7;

/// How a point is kept from matching itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfMatch {
    /// Skip the diagonal by index; distinct signals at the same coordinate are near
    #[default]
    ByIndex,
    /// Overwrite every near-zero distance with a sentinel; exact duplicates never match
    MaskNearZero,
}

/// Candidate filter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateFilter {
    pub proximity: f64,
    pub near_zero: f64,
    pub self_match: SelfMatch,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        CandidateFilter {
            proximity: DEFAULT_PROXIMITY,
            near_zero: DEFAULT_NEAR_ZERO,
            self_match: SelfMatch::ByIndex,
        }
    }
}

impl CandidateFilter {
    /// Returns the unique points having at least one near neighbor
    ///
    /// Empty input yields an empty candidate set.
    pub fn filter(&self, points: &[Point]) -> PointList {
        if points.is_empty() {
            return PointList::new();
        }

        let matrix = match self.self_match {
            SelfMatch::ByIndex => DistanceMatrix::new(points),
            SelfMatch::MaskNearZero => DistanceMatrix::new(points).masked(self.near_zero),
        };

        let mut seen = HashSet::new();
        let mut candidates = PointList::new();

        for (i, point) in points.iter().enumerate() {
            if !self.has_near_neighbor(&matrix, i) {
                continue;
            }
            if seen.insert(point.key()) {
                candidates.push(*point);
            }
        }

        debug!(
            points = points.len(),
            candidates = candidates.len(),
            "candidate filter done"
        );
        candidates
    }

    fn has_near_neighbor(&self, matrix: &DistanceMatrix, i: usize) -> bool {
        // A masked diagonal already holds the sentinel
        let skip_diagonal = self.self_match == SelfMatch::ByIndex;
        matrix
            .row(i)
            .iter()
            .enumerate()
            .any(|(j, &d)| d < self.proximity && !(skip_diagonal && i == j))
    }
}

/// Runs the candidate filter with default parameters
pub fn candidates(points: &[Point]) -> PointList {
    CandidateFilter::default().filter(points)
}
