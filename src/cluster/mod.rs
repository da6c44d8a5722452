//! Package cluster turns raw signal coordinates into intersection centroids
pub mod candidate;
pub mod dbscan;
pub mod distance;
pub mod intersection;
pub mod kdtree;
pub mod matrix;
pub mod point;

#[cfg(test)]
mod candidate_test;
#[cfg(test)]
mod intersection_test;
#[cfg(test)]
mod matrix_test;
#[cfg(test)]
mod point_test;

pub use candidate::{CandidateFilter, SelfMatch, candidates};
pub use dbscan::{NOISE, db_scan, labels};
pub use distance::distance_spherical;
pub use intersection::{IntersectionClusterer, intersections};
pub use point::{Cluster, Point, PointList};
