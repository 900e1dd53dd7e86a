//! Row-major coordinate arithmetic.
//!
//! Coordinates wrap around only in [`incremented_at`] and
//! [`decremented_at`]; everywhere else out-of-range values are errors.

use crate::error::LatticeError;
use spindle_core::{Coords, Site};

/// Compute the flat row-major index of `coords` within `shape`.
///
/// The first coordinate is most significant, the last varies fastest:
/// `total = ((c0 * n1 + c1) * n2 + c2) * ...`. This is the single source
/// of truth for the site numbering used by the neighbour list, so external
/// code computing indices from coordinates must go through it.
///
/// # Errors
///
/// Returns [`LatticeError::CoordsLenMismatch`] if `coords` and `shape`
/// have different lengths, or [`LatticeError::CoordOutOfRange`] if any
/// coordinate is not below its extent.
///
/// # Examples
///
/// ```
/// use spindle_lattice::total_index;
/// use spindle_core::Site;
///
/// assert_eq!(total_index(&[2, 4], &[4, 7]).unwrap(), Site(18));
/// ```
pub fn total_index(coords: &[u32], shape: &[u32]) -> Result<Site, LatticeError> {
    if coords.len() != shape.len() {
        return Err(LatticeError::CoordsLenMismatch {
            got: coords.len(),
            ndim: shape.len(),
        });
    }

    let mut total: u64 = 0;
    for (dim, (&c, &n)) in coords.iter().zip(shape).enumerate() {
        if c >= n {
            return Err(LatticeError::CoordOutOfRange {
                dim,
                coord: c,
                extent: n,
            });
        }
        total = total * u64::from(n) + u64::from(c);
    }

    // total < product of extents, which the lattice constructor caps at u32::MAX
    Ok(Site(total as u32))
}

/// Advance `coords` one step in row-major order, last dimension fastest.
///
/// Wraps back to the all-zero tuple after the final coordinate.
pub(crate) fn increment(coords: &mut [u32], shape: &[u32]) {
    for (c, &n) in coords.iter_mut().zip(shape).rev() {
        *c += 1;
        if *c == n {
            *c = 0;
        } else {
            return;
        }
    }
}

/// Copy of `coords` with the coordinate in `dim` stepped `+1` under
/// periodic wraparound.
pub(crate) fn incremented_at(coords: &Coords, dim: usize, shape: &[u32]) -> Coords {
    let mut out = coords.clone();
    out[dim] = if coords[dim] + 1 == shape[dim] {
        0
    } else {
        coords[dim] + 1
    };
    out
}

/// Copy of `coords` with the coordinate in `dim` stepped `-1` under
/// periodic wraparound.
pub(crate) fn decremented_at(coords: &Coords, dim: usize, shape: &[u32]) -> Coords {
    let mut out = coords.clone();
    out[dim] = if coords[dim] == 0 {
        shape[dim] - 1
    } else {
        coords[dim] - 1
    };
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn total_index_1d_is_identity() {
        let shape = [4u32];
        assert_eq!(total_index(&[2], &shape).unwrap(), Site(2));
        assert_eq!(total_index(&[3], &shape).unwrap(), Site(3));
    }

    #[test]
    fn total_index_2d_is_row_major() {
        let shape = [4u32, 7];
        let base = total_index(&[2, 4], &shape).unwrap();
        // stepping the row moves by the column extent
        assert_eq!(total_index(&[3, 4], &shape).unwrap(), Site(base.0 + 7));
        assert_eq!(total_index(&[1, 4], &shape).unwrap(), Site(base.0 - 7));
        // stepping the column moves by one
        assert_eq!(total_index(&[2, 5], &shape).unwrap(), Site(base.0 + 1));
        assert_eq!(total_index(&[2, 3], &shape).unwrap(), Site(base.0 - 1));
    }

    #[test]
    fn total_index_nd_strides_multiply_up() {
        let shapes: [&[u32]; 3] = [
            &[16, 16, 8],
            &[32, 3, 4, 5],
            &[8, 4, 8, 16, 32, 5],
        ];
        let centres: [&[u32]; 3] = [
            &[5, 2, 6],
            &[17, 1, 2, 4],
            &[1, 2, 4, 9, 24, 2],
        ];

        for (shape, centre) in shapes.iter().zip(&centres) {
            let base = total_index(centre, shape).unwrap();
            let mut stride = 1u32;
            for d in (0..shape.len()).rev() {
                let mut up = centre.to_vec();
                up[d] += 1;
                let mut down = centre.to_vec();
                down[d] -= 1;
                assert_eq!(total_index(&up, shape).unwrap(), Site(base.0 + stride));
                assert_eq!(total_index(&down, shape).unwrap(), Site(base.0 - stride));
                stride *= shape[d];
            }
        }
    }

    #[test]
    fn total_index_rejects_bad_input() {
        assert_eq!(
            total_index(&[1, 2], &[4]),
            Err(LatticeError::CoordsLenMismatch { got: 2, ndim: 1 })
        );
        assert_eq!(
            total_index(&[4], &[4]),
            Err(LatticeError::CoordOutOfRange {
                dim: 0,
                coord: 4,
                extent: 4
            })
        );
    }

    #[test]
    fn increment_counts_row_major() {
        let shape = [2u32, 3];
        let mut c = [0u32, 0];
        let expected = [
            [0, 1],
            [0, 2],
            [1, 0],
            [1, 1],
            [1, 2],
            [0, 0], // wraps back to the origin
        ];
        for e in expected {
            increment(&mut c, &shape);
            assert_eq!(c, e);
        }
    }

    #[test]
    fn stepping_wraps_at_the_boundary() {
        let shape = [5u32, 3];
        let c: Coords = smallvec![4, 0];
        assert_eq!(incremented_at(&c, 0, &shape).as_slice(), &[0, 0]);
        assert_eq!(incremented_at(&c, 1, &shape).as_slice(), &[4, 1]);
        assert_eq!(decremented_at(&c, 0, &shape).as_slice(), &[3, 0]);
        assert_eq!(decremented_at(&c, 1, &shape).as_slice(), &[4, 2]);
    }
}
