//! Taxi coordinate records and the line-oriented reader that feeds them to the runner.
//!
//! The input format is a header line followed by one `longitude latitude` pair per
//! line. Tokens after the second one are ignored, blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Reference point taxis are dispatched to (longitude, latitude in degrees).
pub const HOTEL_LONGITUDE: f64 = 33.40819;
pub const HOTEL_LATITUDE: f64 = 39.19001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// The hotel every taxi is ranked against.
    pub fn hotel() -> Self {
        Self::new(HOTEL_LONGITUDE, HOTEL_LATITUDE)
    }

    /// Planar Euclidean distance in coordinate units.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dlng = self.longitude - other.longitude;
        let dlat = self.latitude - other.latitude;
        (dlng * dlng + dlat * dlat).sqrt()
    }
}

/// Sequential reader over coordinate records. Each record is consumed at most once.
#[derive(Debug)]
pub struct LocationReader<R> {
    reader: R,
    line_number: usize,
    consumed: usize,
    buf: String,
}

impl LocationReader<BufReader<File>> {
    /// Opens `path` and discards its header line.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> LocationReader<R> {
    /// Wraps `reader` and discards its header line. An empty source has no header
    /// to discard and simply yields no records.
    pub fn new(reader: R) -> Result<Self, SimError> {
        let mut this = Self {
            reader,
            line_number: 0,
            consumed: 0,
            buf: String::new(),
        };
        this.read_line()?;
        Ok(this)
    }

    /// Number of records handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Reads the next record.
    ///
    /// Returns [SimError::InsufficientRecords] once the input is exhausted and
    /// [SimError::MalformedRecord] for a line that does not start with two finite numbers.
    pub fn next_location(&mut self) -> Result<Location, SimError> {
        loop {
            if !self.read_line()? {
                return Err(SimError::InsufficientRecords {
                    consumed: self.consumed,
                });
            }
            let mut tokens = self.buf.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            let location = match (first.parse::<f64>(), tokens.next().map(str::parse::<f64>)) {
                (Ok(longitude), Some(Ok(latitude)))
                    if longitude.is_finite() && latitude.is_finite() =>
                {
                    Location::new(longitude, latitude)
                }
                _ => {
                    return Err(SimError::MalformedRecord {
                        line: self.line_number,
                        content: self.buf.trim_end().to_string(),
                    })
                }
            };
            self.consumed += 1;
            return Ok(location);
        }
    }

    fn read_line(&mut self) -> Result<bool, SimError> {
        self.buf.clear();
        let read = self.reader.read_line(&mut self.buf)?;
        if read == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }
}
