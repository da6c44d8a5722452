//! Data collaborators: where signal locations and road names come from.
//!
//! The pipeline only sees the [`SignalSource`] and [`RoadLookup`] traits.
//! The CSV-backed implementations here read exports prepared offline.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::cluster::{Point, PointList, distance_spherical};
use crate::error::Result;
use crate::label::RoadNameSet;

/// Supplies traffic-signal locations for a named city
pub trait SignalSource {
    fn signals(&self, city: &str) -> Result<PointList>;
}

/// Supplies the names of roads near a point
pub trait RoadLookup {
    /// Returns every road within `radius_m` metres of `centroid`
    fn roads_near(&self, centroid: &Point, radius_m: f64) -> Result<RoadNameSet>;
}

/// Reads all records, dropping a header row if there is one
///
/// Expected format: `latitude,longitude,...` (header row is optional). The
/// first row is a header when its first cell does not parse as a number.
fn read_records<R: Read>(reader: R) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }

    let has_header = records
        .first()
        .is_some_and(|r| r.get(0).is_none_or(|cell| cell.trim().parse::<f64>().is_err()));
    if has_header {
        records.remove(0);
    }

    Ok(records)
}

fn parse_coordinate(cell: Option<&str>) -> Option<f64> {
    cell?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses the leading `latitude,longitude` pair of a record
///
/// `NaN` and infinite cells do not make a point.
fn parse_point(record: &StringRecord) -> Option<Point> {
    let lat = parse_coordinate(record.get(0))?;
    let lon = parse_coordinate(record.get(1))?;
    Some(Point::new(lat, lon))
}

/// Reads signals from CSV rows `latitude,longitude[,city]`
///
/// Rows carrying a city are kept only when it matches `city` ignoring case;
/// rows without one are always kept. Rows with unparsable or non-finite
/// coordinates are skipped.
pub fn read_signals<R: Read>(reader: R, city: &str) -> Result<PointList> {
    let wanted = city.to_lowercase();
    let mut points = PointList::new();

    for record in read_records(reader)? {
        let in_city = match record.get(2).map(str::trim) {
            Some(c) if !c.is_empty() => c.to_lowercase() == wanted,
            _ => true,
        };
        if !in_city {
            continue;
        }
        if let Some(point) = parse_point(&record) {
            points.push(point);
        }
    }

    Ok(points)
}

/// Signal locations stored in a CSV file
pub struct CsvSignalSource {
    path: PathBuf,
}

impl CsvSignalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSignalSource { path: path.into() }
    }
}

impl SignalSource for CsvSignalSource {
    fn signals(&self, city: &str) -> Result<PointList> {
        let points = read_signals(File::open(&self.path)?, city)?;
        debug!(path = ?self.path, city, signals = points.len(), "read signals");
        Ok(points)
    }
}

/// Road-name samples loaded from CSV rows `latitude,longitude,name`
///
/// Each row is a point on a road; an empty name marks an unnamed road.
pub struct CsvRoadIndex {
    roads: Vec<(Point, Option<String>)>,
}

impl CsvRoadIndex {
    pub fn open(path: &Path) -> Result<Self> {
        let index = Self::from_reader(File::open(path)?)?;
        debug!(?path, samples = index.len(), "read road names");
        Ok(index)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let roads = read_records(reader)?
            .iter()
            .filter_map(|record| {
                let point = parse_point(record)?;
                let name = record
                    .get(2)
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
                Some((point, name))
            })
            .collect();
        Ok(CsvRoadIndex { roads })
    }

    /// Number of road samples
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}

impl RoadLookup for CsvRoadIndex {
    fn roads_near(&self, centroid: &Point, radius_m: f64) -> Result<RoadNameSet> {
        let radius_km = radius_m / 1000.0;
        Ok(self
            .roads
            .iter()
            .filter(|(point, _)| distance_spherical(point, centroid) <= radius_km)
            .map(|(_, name)| name.clone())
            .collect())
    }
}
