//! Traffic-signal intersection finder
//!
//! Clusters a city's traffic-signal locations into "complex intersections",
//! labels each by the roads that meet there, and writes a manifest of the
//! images to render.

pub mod cluster;
pub mod error;
pub mod label;
pub mod manifest;
pub mod pipeline;
pub mod source;


pub use cluster::{Point, PointList};
pub use error::{Error, Result};
pub use pipeline::{PipelineConfig, Report, build_manifest, find_intersections};
