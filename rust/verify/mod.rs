//! Drive every search strategy against a battery of scenarios and stop at the first mismatch.
//!
//! ```rust
//! # use karatechop::verify::{run_battery, Battery};
//! run_battery(&Battery::standard()).unwrap();
//! ```

mod battery;
pub use crate::verify::battery::{leftmost_by_scan, Battery, Scenario};

#[cfg(feature = "py")]
pub(crate) mod verify_py;

use crate::json::JSON;
use crate::search::Strategy;
use log::{debug, info};
use std::fmt;

/// Failure of a verification run.
#[derive(Debug)]
pub enum VerificationError {
    /// A strategy returned a different index from the scenario's expectation.
    Mismatch {
        strategy: Strategy,
        scenario: Scenario,
        actual: isize,
    },
    /// A battery could not be read from JSON.
    Json(serde_json::Error),
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationError::Mismatch {
                strategy,
                scenario,
                actual,
            } => write!(
                f,
                "`{}` search for {} in {:?} returned {}, expected {}.",
                strategy, scenario.query, scenario.data, actual, scenario.expected
            ),
            VerificationError::Json(e) => {
                write!(f, "Could not create Battery from given JSON.\n{}", e)
            }
        }
    }
}

impl std::error::Error for VerificationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerificationError::Json(e) => Some(e),
            VerificationError::Mismatch { .. } => None,
        }
    }
}

impl From<serde_json::Error> for VerificationError {
    fn from(e: serde_json::Error) -> Self {
        VerificationError::Json(e)
    }
}

/// Check one strategy against every scenario in order, returning the number checked.
pub fn verify_strategy(strategy: Strategy, battery: &Battery) -> Result<usize, VerificationError> {
    for scenario in &battery.scenarios {
        let actual = strategy.search(scenario.query, &scenario.data);
        if actual != scenario.expected {
            return Err(VerificationError::Mismatch {
                strategy,
                scenario: scenario.clone(),
                actual,
            });
        }
        debug!(
            "{}: {} in {:?} -> {}",
            strategy, scenario.query, scenario.data, actual
        );
    }
    Ok(battery.len())
}

/// Check every [`Strategy`] against `battery`. The first mismatch aborts the run.
pub fn run_battery(battery: &Battery) -> Result<(), VerificationError> {
    for strategy in Strategy::ALL {
        let checked = verify_strategy(strategy, battery)?;
        info!("{} passed {} scenarios", strategy, checked);
    }
    Ok(())
}

/// Parse a battery from JSON and run it against every strategy.
pub fn run_json(json: &str) -> Result<(), VerificationError> {
    let battery = Battery::from_json(json)?;
    run_battery(&battery)
}
