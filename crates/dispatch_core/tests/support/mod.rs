#![allow(dead_code)]

use std::io::Write;

use dispatch_core::test_helpers::locations_file_contents;
use dispatch_core::Location;
use tempfile::NamedTempFile;

/// Writes `locations` to a temporary file in the locations file format.
pub fn write_locations_file(locations: &[Location]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(locations_file_contents(locations).as_bytes())
        .expect("locations should be written");
    file.flush().expect("locations should be flushed");
    file
}

/// Taxis scattered around the hotel on a deterministic spiral.
pub fn spiral_locations(count: usize) -> Vec<Location> {
    let hotel = Location::hotel();
    (0..count)
        .map(|i| {
            let angle = i as f64 * 0.7;
            let radius = 0.05 + (i % 37) as f64 * 0.013;
            Location::new(
                hotel.longitude + radius * angle.cos(),
                hotel.latitude + radius * angle.sin(),
            )
        })
        .collect()
}
