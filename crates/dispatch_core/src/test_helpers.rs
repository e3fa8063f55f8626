//! Test helpers for common test setup and utilities.
//!
//! Shared between unit tests, integration tests and benchmarks.

use std::io::Cursor;

use crate::locations::{Location, LocationReader, HOTEL_LATITUDE, HOTEL_LONGITUDE};

/// Header line written at the top of every generated locations file.
pub const LOCATIONS_HEADER: &str = "longitude latitude";

/// Returns true when every parent is `<=` both of its children.
pub fn is_heap_ordered(elements: &[f64]) -> bool {
    (1..elements.len()).all(|i| elements[(i - 1) / 2] <= elements[i])
}

/// Panics with the first offending parent/child pair if `elements` is not heap-ordered.
pub fn assert_heap_order(elements: &[f64]) {
    for i in 1..elements.len() {
        let p = (i - 1) / 2;
        assert!(
            elements[p] <= elements[i],
            "heap order violated: elements[{p}] = {} > elements[{i}] = {}",
            elements[p],
            elements[i]
        );
    }
}

/// `count` taxis on a diagonal moving away from the hotel; record `i` is `i * 0.01`
/// degrees off in both axes.
pub fn diagonal_locations(count: usize) -> Vec<Location> {
    (0..count)
        .map(|i| {
            let offset = i as f64 * 0.01;
            Location::new(HOTEL_LONGITUDE + offset, HOTEL_LATITUDE + offset)
        })
        .collect()
}

/// Renders `locations` in the locations file format, header included.
pub fn locations_file_contents(locations: &[Location]) -> String {
    let mut out = String::with_capacity(LOCATIONS_HEADER.len() + 1 + locations.len() * 24);
    out.push_str(LOCATIONS_HEADER);
    out.push('\n');
    for location in locations {
        out.push_str(&format!("{} {}\n", location.longitude, location.latitude));
    }
    out
}

/// In-memory reader over `locations`.
///
/// # Panics
///
/// Panics if reading the header from memory fails (should never happen).
pub fn in_memory_reader(locations: &[Location]) -> LocationReader<Cursor<Vec<u8>>> {
    let bytes = locations_file_contents(locations).into_bytes();
    LocationReader::new(Cursor::new(bytes)).expect("in-memory locations should have a header")
}
