//! Simulation runner: steps through a scenario and drives the [DistanceHeap].
//!
//! Each step is exactly one of:
//!
//! - **Call**: every `call_interval`-th step extracts the nearest taxi.
//! - **Update**: with probability `p` (and a non-empty heap) a random taxi moves
//!   `decrement` closer.
//! - **Addition**: otherwise the next location is read and its distance inserted.

use std::io::BufRead;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::SimError;
use crate::heap::DistanceHeap;
use crate::locations::{Location, LocationReader};
use crate::report::{RunCounters, RunReport};
use crate::scenario::ScenarioParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchEvent {
    Call { distance: f64 },
    Update { index: usize, amount: f64 },
    Addition { location: Location, distance: f64 },
}

/// One dispatch run: owns the heap, the location source and the RNG.
#[derive(Debug)]
pub struct DispatchSimulation<R, G> {
    params: ScenarioParams,
    heap: DistanceHeap,
    locations: LocationReader<R>,
    rng: G,
    counters: RunCounters,
    step: usize,
}

impl<R: BufRead> DispatchSimulation<R, StdRng> {
    /// Builds a run seeded from `params.seed`, or from entropy when unset.
    pub fn new(params: ScenarioParams, locations: LocationReader<R>) -> Result<Self, SimError> {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(params, locations, rng)
    }
}

impl<R: BufRead, G: Rng> DispatchSimulation<R, G> {
    pub fn with_rng(
        params: ScenarioParams,
        locations: LocationReader<R>,
        rng: G,
    ) -> Result<Self, SimError> {
        params.validate()?;
        if params.expected_calls() == 0 {
            warn!(
                operations = params.operations,
                call_interval = params.call_interval,
                "Run is shorter than one call interval; no taxi will be called"
            );
        }
        Ok(Self {
            heap: DistanceHeap::new(params.expected_additions()),
            counters: RunCounters::with_call_capacity(params.expected_calls()),
            params,
            locations,
            rng,
            step: 0,
        })
    }

    pub fn heap(&self) -> &DistanceHeap {
        &self.heap
    }

    pub fn counters(&self) -> &RunCounters {
        &self.counters
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    /// Steps executed so far.
    pub fn steps_taken(&self) -> usize {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.params.operations
    }

    /// Runs one step. Returns `Ok(None)` once all operations have been executed.
    pub fn run_next_step(&mut self) -> Result<Option<DispatchEvent>, SimError> {
        if self.is_finished() {
            return Ok(None);
        }
        let step = self.step + 1;

        let event = if step % self.params.call_interval == 0 {
            let distance = self.heap.extract_min()?;
            self.counters.called_distances.push(distance);
            DispatchEvent::Call { distance }
        } else {
            let r: f64 = self.rng.gen_range(0.0..=1.0);
            if !self.heap.is_empty() && r <= self.params.update_probability {
                let index = self.rng.gen_range(0..self.heap.size());
                let amount = self.params.decrement;
                self.heap.decrease_key(index, amount)?;
                self.counters.updates += 1;
                DispatchEvent::Update { index, amount }
            } else {
                let location = self.locations.next_location()?;
                let distance = location.distance_to(&self.params.destination);
                self.heap.insert(distance);
                self.counters.additions += 1;
                DispatchEvent::Addition { location, distance }
            }
        };

        self.step = step;
        debug!(step, ?event, taxis = self.heap.size(), "dispatch step");
        Ok(Some(event))
    }

    /// Consumes the run and produces its report.
    pub fn into_report(self, elapsed: std::time::Duration) -> RunReport {
        RunReport {
            remaining_taxis: self.heap.size(),
            counters: self.counters,
            elapsed,
        }
    }
}

/// Runs a full scenario against `locations`.
pub fn run_simulation<R: BufRead>(
    params: ScenarioParams,
    locations: LocationReader<R>,
) -> Result<RunReport, SimError> {
    run_with_hook(params, locations, |_, _, _| {})
}

/// Runs a full scenario and invokes `hook` after every step with the 1-based step
/// index, the event and the heap as it stands after the step.
pub fn run_with_hook<R, F>(
    params: ScenarioParams,
    locations: LocationReader<R>,
    hook: F,
) -> Result<RunReport, SimError>
where
    R: BufRead,
    F: FnMut(usize, &DispatchEvent, &DistanceHeap),
{
    let sim = DispatchSimulation::new(params, locations)?;
    drive(sim, hook)
}

/// Runs `sim` to completion, timing it and invoking `hook` after every step.
pub fn drive<R, G, F>(
    mut sim: DispatchSimulation<R, G>,
    mut hook: F,
) -> Result<RunReport, SimError>
where
    R: BufRead,
    G: Rng,
    F: FnMut(usize, &DispatchEvent, &DistanceHeap),
{
    info!(
        operations = sim.params.operations,
        update_probability = sim.params.update_probability,
        call_interval = sim.params.call_interval,
        seed = ?sim.params.seed,
        "Starting dispatch run"
    );
    let start = Instant::now();

    while let Some(event) = sim.run_next_step()? {
        hook(sim.step, &event, &sim.heap);
    }

    let report = sim.into_report(start.elapsed());
    info!(
        additions = report.counters.additions,
        updates = report.counters.updates,
        calls = report.counters.calls(),
        remaining = report.remaining_taxis,
        elapsed_ms = report.elapsed_ms(),
        "Dispatch run finished"
    );
    Ok(report)
}
