//! The seeded random source shared across a run.

use crate::error::McError;
use rand::{Rng as _, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spindle_core::{Site, Spin};

/// Seeded pseudo-random source for the Markov chain.
///
/// Wraps one ChaCha8 generator; every draw (site index, uniform real,
/// spin) advances the same stream, so a run is a deterministic function
/// of the seed and the exact sequence of draw calls. One instance is
/// reused across all ensembles of a run.
///
/// [`set_lattice_size`](Self::set_lattice_size) swaps only the bound used
/// by [`gen_index`](Self::gen_index); the generator state is untouched,
/// so the remaining stream stays reproducible across lattice-shape
/// changes within a run.
#[derive(Clone, Debug)]
pub struct Rng {
    chacha: ChaCha8Rng,
    lattice_size: u32,
}

impl Rng {
    /// Seed a generator and set the bound for site-index draws.
    ///
    /// # Errors
    ///
    /// Returns [`McError::EmptyIndexRange`] if `lattice_size` is zero.
    pub fn new(lattice_size: u32, seed: u64) -> Result<Self, McError> {
        if lattice_size == 0 {
            return Err(McError::EmptyIndexRange);
        }
        Ok(Self {
            chacha: ChaCha8Rng::seed_from_u64(seed),
            lattice_size,
        })
    }

    /// The current bound for site-index draws.
    pub fn lattice_size(&self) -> u32 {
        self.lattice_size
    }

    /// Change the bound for site-index draws.
    ///
    /// Only the stored bound changes; the generator is not reseeded or
    /// advanced.
    ///
    /// # Errors
    ///
    /// Returns [`McError::EmptyIndexRange`] if `lattice_size` is zero.
    pub fn set_lattice_size(&mut self, lattice_size: u32) -> Result<(), McError> {
        if lattice_size == 0 {
            return Err(McError::EmptyIndexRange);
        }
        self.lattice_size = lattice_size;
        Ok(())
    }

    /// Uniform site index in `[0, lattice_size)`.
    pub fn gen_index(&mut self) -> Site {
        Site(self.chacha.gen_range(0..self.lattice_size))
    }

    /// Uniform real in `[0, 1)`.
    pub fn gen_real(&mut self) -> f64 {
        self.chacha.gen::<f64>()
    }

    /// Uniform draw from `{-1, +1}`.
    pub fn gen_spin(&mut self) -> Spin {
        if self.chacha.gen::<bool>() {
            Spin::Up
        } else {
            Spin::Down
        }
    }
}
