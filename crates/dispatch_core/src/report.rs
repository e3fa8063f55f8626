//! Run counters and the end-of-run report.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::heap::MAX_PREALLOCATED;

/// Counters accumulated while the runner steps through a scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunCounters {
    pub additions: usize,
    pub updates: usize,
    /// Distances of called taxis, in call order.
    pub called_distances: Vec<f64>,
}

impl RunCounters {
    /// Reserves room for `calls` called distances, best-effort like
    /// [DistanceHeap::new](crate::heap::DistanceHeap::new).
    pub fn with_call_capacity(calls: usize) -> Self {
        let mut called_distances = Vec::new();
        let _ = called_distances.try_reserve(calls.min(MAX_PREALLOCATED));
        Self {
            called_distances,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.called_distances.len()
    }

    /// Every step is exactly one of call, update or addition.
    pub fn steps(&self) -> usize {
        self.additions + self.updates + self.calls()
    }
}

/// Final outcome of a dispatch run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub counters: RunCounters,
    /// Taxis still waiting when the run ended.
    pub remaining_taxis: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl RunReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

fn serialize_millis<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.counters.called_distances.is_empty() {
            writeln!(f, "No taxi has been called")?;
        } else {
            for distance in &self.counters.called_distances {
                writeln!(f, "A taxi has been called, distance: {distance}")?;
            }
        }
        writeln!(f, "The number of taxi additions: {}", self.counters.additions)?;
        writeln!(
            f,
            "The number of taxi distance updates: {}",
            self.counters.updates
        )?;
        write!(f, "Program execution time: {:.3} ms", self.elapsed_ms())
    }
}
