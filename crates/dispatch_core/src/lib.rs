pub mod error;
pub mod heap;
pub mod locations;
pub mod report;
pub mod runner;
pub mod scenario;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::SimError;
pub use heap::{DistanceHeap, HeapError};
pub use locations::{Location, LocationReader};
pub use report::{RunCounters, RunReport};
pub use runner::{run_simulation, run_with_hook, DispatchEvent, DispatchSimulation};
pub use scenario::ScenarioParams;
