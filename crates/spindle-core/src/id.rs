//! Strongly-typed lattice identifiers and the [`Coords`] type alias.
//!
//! Flat site indices and dimension numbers are distinct integer domains;
//! wrapping them in newtypes keeps them from being mixed with each other
//! or with plain counters. Arithmetic on the underlying integers is done
//! explicitly at the call site, so wraparound only happens where the
//! periodic boundary demands it.

use smallvec::SmallVec;
use std::fmt;

/// Flat index of a lattice site, in `[0, size)`.
///
/// Sites are numbered in row-major order: the first shape dimension is
/// most significant, the last varies fastest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site(pub u32);

impl Site {
    /// The underlying index, widened for slice addressing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Site {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A lattice dimension number, in `[0, ndim)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dim(pub u32);

impl Dim {
    /// The underlying dimension number, widened for slice addressing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Dim {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Per-dimension coordinates of a lattice site.
///
/// Uses `SmallVec<[u32; 4]>` so lattices of up to four dimensions never
/// touch the heap; higher-dimensional shapes spill transparently.
pub type Coords = SmallVec<[u32; 4]>;
