//! Spindle: n-dimensional Ising model simulation with Metropolis-Hastings
//! Monte Carlo.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the spindle sub-crates. For most users, depending on `spindle` alone
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spindle::prelude::*;
//!
//! // A 16x16 periodic lattice just below the critical temperature.
//! let lat = Lattice::new(&[16, 16]).unwrap();
//! let params = Parameters { jt: 0.5, ht: 0.0 };
//!
//! // One seeded stream drives the whole run.
//! let mut rng = Rng::new(lat.size(), 42).unwrap();
//! let cfg = Configuration::random(lat.size(), &mut rng);
//! let energy = hamiltonian(&cfg, &params, &lat).unwrap();
//!
//! // Thermalise for 100 sweeps, then measure for 50.
//! let out = evolve(cfg, energy, &params, &lat, &mut rng, 100, None, &mut []).unwrap();
//! let mut obs = Observables::new(&lat);
//! let out = evolve(
//!     out.cfg, out.energy, &params, &lat, &mut rng, 50, Some(&mut obs), &mut [],
//! )
//! .unwrap();
//!
//! assert!((0.0..=1.0).contains(&out.acceptance_rate));
//! assert_eq!(obs.energy.len(), 50);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spindle-core` | `Site`/`Dim` ids, `Spin`, `Parameters` |
//! | [`lattice`] | `spindle-lattice` | periodic topology and distance map |
//! | [`mc`] | `spindle-mc` | configuration, RNG, energies, sweep engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, spin, and parameter types (`spindle-core`).
pub use spindle_core as types;

/// Lattice topology and distance classification (`spindle-lattice`).
pub use spindle_lattice as lattice;

/// Configuration, RNG, observables, and the sweep engine (`spindle-mc`).
pub use spindle_mc as mc;

/// The most commonly used items from all sub-crates.
pub mod prelude {
    pub use crate::lattice::{total_index, Lattice, LatticeError, Metric};
    pub use crate::mc::{
        delta_e, evolve, hamiltonian, magnetisation, Configuration, EvolveOutcome, McError,
        Measure, MeasureError, Observables, Rng,
    };
    pub use crate::types::{Coords, Dim, Parameters, Site, Spin};
}
