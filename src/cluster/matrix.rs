use super::distance::distance_euclidean;
use super::point::Point;

/// Value written over masked (near-zero) entries so they never count as near
pub const MASK_SENTINEL: f64 = 99.0;

/// Square matrix of pairwise Euclidean distances, stored row-major
///
/// Entry `(i, j)` is the distance between point `i` and point `j`.
/// Built once; the only mutation is the consuming [`DistanceMatrix::masked`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the full n×n matrix in O(n²) time and space
    pub fn new(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            // Symmetric: compute the upper triangle and mirror it
            for j in (i + 1)..n {
                let d = distance_euclidean(&points[i], &points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        DistanceMatrix { n, data }
    }

    /// Distances from point `i` to every point, in input order
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Replaces every entry below `near_zero` with [`MASK_SENTINEL`]
    ///
    /// This hides the diagonal, and also hides distinct points sharing
    /// the exact same coordinate.
    pub fn masked(mut self, near_zero: f64) -> Self {
        for d in self.data.iter_mut() {
            if *d < near_zero {
                *d = MASK_SENTINEL;
            }
        }
        self
    }
}
