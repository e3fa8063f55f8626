//! Run parameters for a dispatch simulation.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::locations::Location;

/// Every Nth step calls the nearest taxi.
pub const DEFAULT_CALL_INTERVAL: usize = 100;

/// Distance a taxi closes in on the hotel per update.
pub const DEFAULT_DECREMENT: f64 = 0.01;

/// Parameters for a dispatch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Total number of steps (`m`).
    pub operations: usize,
    /// Probability of an update instead of an addition on non-call steps (`p`).
    pub update_probability: f64,
    pub call_interval: usize,
    pub decrement: f64,
    /// Destination the taxis are ranked against.
    pub destination: Location,
    /// Random seed for reproducibility (optional; if None, uses entropy).
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            operations: 1000,
            update_probability: 0.2,
            call_interval: DEFAULT_CALL_INTERVAL,
            decrement: DEFAULT_DECREMENT,
            destination: Location::hotel(),
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn new(operations: usize, update_probability: f64) -> Self {
        Self {
            operations,
            update_probability,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_call_interval(mut self, call_interval: usize) -> Self {
        self.call_interval = call_interval;
        self
    }

    pub fn with_decrement(mut self, decrement: f64) -> Self {
        self.decrement = decrement;
        self
    }

    pub fn with_destination(mut self, destination: Location) -> Self {
        self.destination = destination;
        self
    }

    /// Expected number of additions, `ceil(m * (1 - p))`. Used as the heap capacity hint.
    pub fn expected_additions(&self) -> usize {
        let p = self.update_probability.clamp(0.0, 1.0);
        (self.operations as f64 * (1.0 - p)).ceil() as usize
    }

    /// Number of call steps the run will perform.
    pub fn expected_calls(&self) -> usize {
        self.operations / self.call_interval.max(1)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(0.0..=1.0).contains(&self.update_probability) {
            return Err(SimError::InvalidParameter {
                name: "update_probability",
                reason: format!("{} is not in [0, 1]", self.update_probability),
            });
        }
        if self.call_interval == 0 {
            return Err(SimError::InvalidParameter {
                name: "call_interval",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.decrement.is_finite() || self.decrement < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "decrement",
                reason: format!("{} is not a non-negative distance", self.decrement),
            });
        }
        Ok(())
    }
}
