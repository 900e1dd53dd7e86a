//! Core types for the spindle Ising simulator.
//!
//! Contains the strongly-typed lattice identifiers ([`Site`], [`Dim`]),
//! the spin domain type ([`Spin`]), and the physical coupling
//! [`Parameters`]. Everything here is plain data shared by the lattice,
//! Monte Carlo, and I/O crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod id;
mod params;
mod spin;

pub use id::{Coords, Dim, Site};
pub use params::Parameters;
pub use spin::Spin;
