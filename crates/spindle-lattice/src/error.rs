//! Error types for lattice construction and topology queries.

use std::fmt;

/// Errors arising from lattice construction or topology queries.
///
/// Every variant indicates a malformed setup or a programming error,
/// never a transient condition; callers are expected to abort the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with no dimensions.
    EmptyShape,
    /// A shape extent is zero.
    ZeroExtent {
        /// Dimension with the offending extent.
        dim: usize,
    },
    /// The product of all extents does not fit the site index type.
    TooManySites {
        /// The requested total site count.
        size: u64,
        /// Largest representable site count.
        max: u64,
    },
    /// A dimension number is outside `[0, ndim)`.
    DimOutOfRange {
        /// The offending dimension number.
        dim: u32,
        /// Number of dimensions of the lattice.
        ndim: usize,
    },
    /// A site index is outside `[0, size)`.
    SiteOutOfRange {
        /// The offending site index.
        site: u32,
        /// Total number of sites.
        size: u32,
    },
    /// A neighbour slot is outside `[0, 2 * ndim)`.
    NeighbourOutOfRange {
        /// The offending neighbour slot.
        neighbour: u32,
        /// Number of neighbours per site.
        count: u32,
    },
    /// A coordinate tuple has the wrong number of entries for the shape.
    CoordsLenMismatch {
        /// Number of coordinates supplied.
        got: usize,
        /// Number of dimensions of the shape.
        ndim: usize,
    },
    /// A per-dimension coordinate is outside its extent.
    CoordOutOfRange {
        /// Dimension of the offending coordinate.
        dim: usize,
        /// The offending coordinate.
        coord: u32,
        /// Extent of that dimension.
        extent: u32,
    },
    /// A squared distance was queried that the distance map does not hold.
    UnknownSqDistance {
        /// The queried squared distance.
        sq_distance: u64,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "lattice shape must have at least one dimension"),
            Self::ZeroExtent { dim } => {
                write!(f, "lattice extent in dimension {dim} is zero")
            }
            Self::TooManySites { size, max } => {
                write!(f, "lattice has {size} sites, more than the maximum {max}")
            }
            Self::DimOutOfRange { dim, ndim } => {
                write!(f, "dimension {dim} out of range for {ndim}-dimensional lattice")
            }
            Self::SiteOutOfRange { site, size } => {
                write!(f, "site {site} out of range for lattice of size {size}")
            }
            Self::NeighbourOutOfRange { neighbour, count } => {
                write!(f, "neighbour slot {neighbour} out of range, sites have {count} neighbours")
            }
            Self::CoordsLenMismatch { got, ndim } => {
                write!(f, "got {got} coordinates for a {ndim}-dimensional shape")
            }
            Self::CoordOutOfRange { dim, coord, extent } => {
                write!(f, "coordinate {coord} in dimension {dim} exceeds extent {extent}")
            }
            Self::UnknownSqDistance { sq_distance } => {
                write!(f, "squared distance {sq_distance} is not in the distance map")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
