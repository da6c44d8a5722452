//! The `manifest.json` index of generated intersection images.
//!
//! The file is written the way Python's `json.dumps` writes it by default,
//! so existing consumers can keep comparing it byte for byte:
//! `", "` and `": "` separators and every non-ASCII character escaped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::error::Result;
use crate::label::RoadLabel;

/// Upper bound (exclusive) of the numeric filename suffix
pub const SUFFIX_RANGE: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Image filename stem
    pub name: String,
    /// Display label, e.g. `"charles & north"`
    pub roads: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub city: String,
    pub images: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(city: impl Into<String>) -> Self {
        Manifest {
            city: city.into(),
            images: Vec::new(),
        }
    }

    /// Serializes the manifest to `writer`
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut ser = serde_json::Serializer::with_formatter(writer, PythonFormatter);
        self.serialize(&mut ser)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Formatter reproducing `json.dumps` defaults (`ensure_ascii=True`)
struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            // Printable ASCII passes through; DEL and above become \uXXXX
            if c <= '~' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Picks image filenames: the last road name plus a random number below 1000
pub struct ImageNamer {
    rng: Box<dyn RngCore>,
}

impl ImageNamer {
    /// Seeded namers give the same sequence of names on every run
    pub fn new(seed: Option<u64>) -> Self {
        let rng: Box<dyn RngCore> = match seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        ImageNamer { rng }
    }

    pub fn name(&mut self, label: &RoadLabel) -> String {
        format!("{}{}", label.last(), self.rng.random_range(0..SUFFIX_RANGE))
    }
}
