//! Signals in, manifest out.

use tracing::{debug, info, warn};

use crate::cluster::{CandidateFilter, IntersectionClusterer, Point, PointList, SelfMatch};
use crate::cluster::candidate::{DEFAULT_NEAR_ZERO, DEFAULT_PROXIMITY};
use crate::cluster::dbscan::{DEFAULT_EPS, DEFAULT_MIN_POINTS};
use crate::error::{Error, Result};
use crate::label::RoadLabel;
use crate::manifest::{ImageNamer, Manifest, ManifestEntry};
use crate::source::RoadLookup;

/// Radius of the road-name lookup around each intersection, in metres
pub const DEFAULT_ROAD_RADIUS_M: f64 = 100.0;

/// Tunables for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Candidate threshold, degrees
    pub proximity: f64,
    /// Masking epsilon, only used with [`SelfMatch::MaskNearZero`]
    pub near_zero: f64,
    pub self_match: SelfMatch,
    /// DBSCAN radius, degrees
    pub eps: f64,
    pub min_points: usize,
    pub road_radius_m: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            proximity: DEFAULT_PROXIMITY,
            near_zero: DEFAULT_NEAR_ZERO,
            self_match: SelfMatch::ByIndex,
            eps: DEFAULT_EPS,
            min_points: DEFAULT_MIN_POINTS,
            road_radius_m: DEFAULT_ROAD_RADIUS_M,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            message: "must be a positive finite number",
        })
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        positive("proximity", self.proximity)?;
        positive("near_zero", self.near_zero)?;
        positive("eps", self.eps)?;
        positive("road_radius_m", self.road_radius_m)?;
        if self.min_points == 0 {
            return Err(Error::InvalidParameter {
                name: "min_points",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    pub fn candidate_filter(&self) -> CandidateFilter {
        CandidateFilter {
            proximity: self.proximity,
            near_zero: self.near_zero,
            self_match: self.self_match,
        }
    }

    pub fn clusterer(&self) -> IntersectionClusterer {
        IntersectionClusterer {
            eps: self.eps,
            min_points: self.min_points,
        }
    }
}

/// Raw signal locations to intersection centroids
pub fn find_intersections(points: &[Point], config: &PipelineConfig) -> PointList {
    let candidates = config.candidate_filter().filter(points);
    info!(
        signals = points.len(),
        candidates = candidates.len(),
        "filtered signals with a near neighbour"
    );
    let centroids = config.clusterer().centroids(&candidates);
    info!(intersections = centroids.len(), "clustered candidates");
    centroids
}

/// A centroid that could not be labelled
#[derive(Debug)]
pub struct Failure {
    pub centroid: Point,
    pub error: Error,
}

/// Outcome of labelling a batch of centroids
#[derive(Debug)]
pub struct Report {
    pub manifest: Manifest,
    pub failures: Vec<Failure>,
}

fn entry(
    centroid: &Point,
    lookup: &dyn RoadLookup,
    namer: &mut ImageNamer,
    radius_m: f64,
) -> Result<ManifestEntry> {
    let roads = lookup.roads_near(centroid, radius_m)?;
    let label = RoadLabel::new(&roads)?;
    Ok(ManifestEntry {
        name: namer.name(&label),
        roads: label.to_string(),
    })
}

/// Percentage done before item `i` of `len`, when it starts a new tenth
pub fn progress(i: usize, len: usize) -> Option<usize> {
    let pct = 100 * i / len;
    if i == 0 || pct / 10 > (100 * (i - 1) / len) / 10 {
        Some(pct)
    } else {
        None
    }
}

/// Labels and names the first `count` centroids
///
/// A centroid whose lookup or label fails gets no manifest entry; it is
/// logged and listed in [`Report::failures`].
pub fn build_manifest(
    city: &str,
    centroids: &[Point],
    count: usize,
    lookup: &dyn RoadLookup,
    namer: &mut ImageNamer,
    config: &PipelineConfig,
) -> Report {
    let batch = &centroids[..count.min(centroids.len())];
    let mut manifest = Manifest::new(city);
    let mut failures = Vec::new();

    for (i, centroid) in batch.iter().enumerate() {
        if let Some(pct) = progress(i, batch.len()) {
            info!("{pct}%");
        }
        match entry(centroid, lookup, namer, config.road_radius_m) {
            Ok(entry) => {
                debug!(name = %entry.name, roads = %entry.roads, "labelled intersection");
                manifest.images.push(entry);
            }
            Err(error) => {
                warn!(
                    lat = centroid.lat(),
                    lon = centroid.lon(),
                    %error,
                    "could not label intersection"
                );
                failures.push(Failure {
                    centroid: *centroid,
                    error,
                });
            }
        }
    }

    Report { manifest, failures }
}
