//! Periodic hyperrectangular lattice topology.
//!
//! A [`Lattice`] owns everything the Monte Carlo engine needs to know
//! about the geometry of a run: the shape, a flat nearest-neighbour list
//! under periodic boundary conditions, and an optional map from squared
//! minimum-image distance to the site pairs at that separation. All of it
//! is built eagerly in the constructor and immutable afterwards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod coords;
mod error;
mod lattice;
mod metric;

pub use coords::total_index;
pub use error::LatticeError;
pub use lattice::Lattice;
pub use metric::Metric;
