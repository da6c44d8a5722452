//! Road-name labels for intersections.
//!
//! Raw names are lower-cased and lose one trailing street-type qualifier,
//! then joined as `"a, b & c"`. A single road is joined with itself.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};

/// Street-type words removed from the end of a road name, checked in this order
pub const QUALIFIERS: [&str; 7] = [
    "avenue",
    "street",
    "place",
    "way",
    "drive",
    "boulevard",
    "road",
];

/// Lower-cases `name` and strips one trailing `" <qualifier>"`
pub fn clean_name(name: &str) -> String {
    let lower = name.to_lowercase();
    for qual in QUALIFIERS {
        if let Some(stem) = lower.strip_suffix(qual).and_then(|s| s.strip_suffix(' ')) {
            return stem.to_string();
        }
    }
    lower
}

/// Distinct raw road names found around one intersection
///
/// Absent names are dropped on insertion. Iteration is in byte order of the
/// raw names so labels are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadNameSet(BTreeSet<String>);

impl RoadNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: Option<String>) {
        if let Some(name) = name {
            self.0.insert(name);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for RoadNameSet {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        let mut set = RoadNameSet::new();
        for name in iter {
            set.insert(name.map(Into::into));
        }
        set
    }
}

/// Cleaned road names for one intersection, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadLabel {
    names: Vec<String>,
}

impl RoadLabel {
    /// Cleans every name in the set
    ///
    /// Two raw names may clean to the same string ("Main Street", "Main
    /// Avenue"); both are kept.
    ///
    /// # Errors
    ///
    /// [`Error::NoNamedRoads`] when the set holds no named road.
    pub fn new(roads: &RoadNameSet) -> Result<Self> {
        if roads.is_empty() {
            return Err(Error::NoNamedRoads);
        }
        Ok(RoadLabel {
            names: roads.iter().map(clean_name).collect(),
        })
    }

    /// The name used as the image filename stem
    pub fn last(&self) -> &str {
        // Non-empty by construction
        &self.names[self.names.len() - 1]
    }
}

impl fmt::Display for RoadLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.names.split_last() {
            Some((last, [])) => write!(f, "{last} & {last}"),
            Some((last, rest)) => write!(f, "{} & {last}", rest.join(", ")),
            None => Ok(()),
        }
    }
}
