//! Metropolis-Hastings Monte Carlo for the Ising model.
//!
//! Builds on [`spindle_lattice`] topology: a mutable spin
//! [`Configuration`], a seeded [`Rng`] shared across a whole run, the
//! energy and magnetisation functions, and the [`evolve`] sweep engine
//! that drives the Markov chain and records [`Observables`].
//!
//! The chain is inherently sequential: every flip decision depends on
//! the current configuration and the next draw from the one shared RNG
//! stream, so everything here is single-threaded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod configuration;
mod energy;
mod error;
mod evolve;
mod measure;
mod observables;
mod rng;

pub use configuration::Configuration;
pub use energy::{delta_e, hamiltonian, magnetisation, sum_of_neighbours};
pub use error::McError;
pub use evolve::{evolve, EvolveOutcome};
pub use measure::{Measure, MeasureError};
pub use observables::{Correlator, Observables};
pub use rng::Rng;
