//! The per-sweep measurement hook.

use crate::configuration::Configuration;
use std::fmt;

/// Failure reported by a [`Measure`] hook.
///
/// Wrapped by the engine into
/// [`McError::MeasurementFailed`](crate::McError::MeasurementFailed)
/// together with the hook's name; a failed hook aborts the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for MeasureError {}

/// A measurement invoked once per sweep, after the built-in observables.
///
/// Hooks are the side channel for recording anything the engine does not
/// know about, e.g. streaming configuration snapshots to storage. The
/// engine stores them as `Vec<Box<dyn Measure>>` and calls them in
/// registration order with the current configuration and running energy.
///
/// # Examples
///
/// ```
/// use spindle_mc::{Configuration, Measure, MeasureError};
///
/// /// Counts sweeps and remembers the last energy seen.
/// struct EnergyTracker {
///     sweeps: usize,
///     last: f64,
/// }
///
/// impl Measure for EnergyTracker {
///     fn name(&self) -> &str {
///         "energy_tracker"
///     }
///
///     fn observe(&mut self, _cfg: &Configuration, energy: f64) -> Result<(), MeasureError> {
///         self.sweeps += 1;
///         self.last = energy;
///         Ok(())
///     }
/// }
/// ```
pub trait Measure {
    /// Name used in error reports when the hook fails.
    fn name(&self) -> &str;

    /// Record whatever this hook is interested in.
    ///
    /// # Errors
    ///
    /// A returned error aborts the sweep loop; the run is considered
    /// failed.
    fn observe(&mut self, cfg: &Configuration, energy: f64) -> Result<(), MeasureError>;
}
