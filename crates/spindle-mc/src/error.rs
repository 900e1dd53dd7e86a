//! Error types for the Monte Carlo crate.

use spindle_lattice::LatticeError;
use std::fmt;

/// Errors from configuration access or the sweep engine.
///
/// All of these indicate a malformed setup or a failed measurement hook;
/// the run must abort, nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum McError {
    /// A site index is outside the configuration.
    SiteOutOfRange {
        /// The offending site index.
        site: u32,
        /// Number of sites in the configuration.
        size: u32,
    },
    /// Configuration and lattice sizes disagree.
    SizeMismatch {
        /// Size of the configuration.
        cfg: u32,
        /// Size of the lattice.
        lattice: u32,
    },
    /// Site-index draws need a non-empty range.
    EmptyIndexRange,
    /// A lattice topology query failed.
    Lattice(LatticeError),
    /// An extra measurement hook reported a failure.
    MeasurementFailed {
        /// Name of the failing hook.
        name: String,
        /// The reason it reported.
        reason: String,
    },
}

impl fmt::Display for McError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SiteOutOfRange { site, size } => {
                write!(f, "site {site} out of range for configuration of size {size}")
            }
            Self::SizeMismatch { cfg, lattice } => {
                write!(f, "configuration has {cfg} sites but the lattice has {lattice}")
            }
            Self::EmptyIndexRange => write!(f, "site-index range must not be empty"),
            Self::Lattice(err) => write!(f, "lattice query failed: {err}"),
            Self::MeasurementFailed { name, reason } => {
                write!(f, "measurement '{name}' failed: {reason}")
            }
        }
    }
}

impl std::error::Error for McError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lattice(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LatticeError> for McError {
    fn from(err: LatticeError) -> Self {
        Self::Lattice(err)
    }
}
