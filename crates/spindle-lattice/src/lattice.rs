//! The [`Lattice`] type: shape, neighbour list, and distance map.

use crate::coords::{decremented_at, increment, incremented_at, total_index};
use crate::error::LatticeError;
use crate::metric::{min_image_1d, Metric};
use indexmap::IndexMap;
use smallvec::smallvec;
use spindle_core::{Coords, Dim, Site};

/// Map from squared distance to the site pairs at that separation.
type DistMap = IndexMap<u64, Vec<(Site, Site)>>;

/// An n-dimensional hyperrectangular lattice with periodic boundaries.
///
/// Construction eagerly builds the flat nearest-neighbour list and,
/// when a cutoff is supplied, the distance map. Both are owned by the
/// instance and immutable for the rest of the run; there is no hidden
/// shared or lazily-initialized state.
///
/// Sites are numbered row-major: the first shape dimension is most
/// significant, the last varies fastest (see
/// [`total_index`](crate::total_index)).
///
/// # Examples
///
/// ```
/// use spindle_lattice::Lattice;
/// use spindle_core::{Dim, Site};
///
/// let lat = Lattice::new(&[4, 4]).unwrap();
/// assert_eq!(lat.size(), 16);
/// assert_eq!(lat.ndim(), 2);
/// assert_eq!(lat.extent(Dim(1)).unwrap(), 4);
///
/// // Site 0 sits in the corner; wraparound makes all four neighbours real.
/// let n: Vec<_> = lat.neighbours(Site(0)).unwrap().to_vec();
/// assert_eq!(n, vec![Site(4), Site(12), Site(1), Site(3)]);
/// ```
#[derive(Clone, Debug)]
pub struct Lattice {
    shape: Coords,
    size: u32,
    neighbour_list: Vec<Site>,
    dist_map: DistMap,
}

impl Lattice {
    /// Largest supported site count: flat indices are `u32`.
    pub const MAX_SITES: u64 = u32::MAX as u64;

    /// Create a lattice without a distance map.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::EmptyShape`] for an empty shape,
    /// [`LatticeError::ZeroExtent`] if any extent is zero, or
    /// [`LatticeError::TooManySites`] if the extents multiply past
    /// [`Self::MAX_SITES`].
    pub fn new(shape: &[u32]) -> Result<Self, LatticeError> {
        Self::build(shape, None)
    }

    /// Create a lattice and classify all site pairs by squared distance.
    ///
    /// A pair is recorded when the non-squared minimum-image distance
    /// under `metric` is strictly below `max_distance`. The all-pairs
    /// sweep is O(size² · ndim) and runs once, here; nothing in the sweep
    /// loop ever touches it again.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Lattice::new`].
    pub fn with_distance_map(
        shape: &[u32],
        max_distance: f64,
        metric: Metric,
    ) -> Result<Self, LatticeError> {
        Self::build(shape, Some((max_distance, metric)))
    }

    fn build(shape: &[u32], cutoff: Option<(f64, Metric)>) -> Result<Self, LatticeError> {
        if shape.is_empty() {
            return Err(LatticeError::EmptyShape);
        }
        for (dim, &n) in shape.iter().enumerate() {
            if n == 0 {
                return Err(LatticeError::ZeroExtent { dim });
            }
        }

        let wide_size: u64 = shape.iter().map(|&n| u64::from(n)).product();
        if wide_size > Self::MAX_SITES {
            return Err(LatticeError::TooManySites {
                size: wide_size,
                max: Self::MAX_SITES,
            });
        }
        let size = wide_size as u32;

        let neighbour_list = make_neighbour_list(shape, size)?;
        let dist_map = match cutoff {
            Some((max_distance, metric)) => build_dist_map(shape, size, max_distance, metric),
            None => DistMap::default(),
        };

        Ok(Self {
            shape: Coords::from_slice(shape),
            size,
            neighbour_list,
            dist_map,
        })
    }

    /// Total number of sites.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The per-dimension extents.
    pub fn shape(&self) -> &[u32] {
        &self.shape
    }

    /// Extent of the lattice in dimension `dim`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::DimOutOfRange`] if `dim >= ndim`.
    pub fn extent(&self, dim: Dim) -> Result<u32, LatticeError> {
        self.shape
            .get(dim.index())
            .copied()
            .ok_or(LatticeError::DimOutOfRange {
                dim: dim.0,
                ndim: self.ndim(),
            })
    }

    /// Number of neighbours of every site, `2 * ndim`.
    pub fn neighbour_count(&self) -> u32 {
        2 * self.ndim() as u32
    }

    /// The full flat neighbour list.
    ///
    /// Entries `[2*ndim*i, 2*ndim*(i+1))` are the neighbours of site `i`,
    /// ordered per dimension as the `+1` then the `-1` neighbour.
    pub fn neighbour_list(&self) -> &[Site] {
        &self.neighbour_list
    }

    /// Neighbour in slot `k` of `site`, `k` in `[0, 2 * ndim)`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SiteOutOfRange`] or
    /// [`LatticeError::NeighbourOutOfRange`] for bad indices.
    pub fn neighbour(&self, site: Site, k: u32) -> Result<Site, LatticeError> {
        if k >= self.neighbour_count() {
            return Err(LatticeError::NeighbourOutOfRange {
                neighbour: k,
                count: self.neighbour_count(),
            });
        }
        let row = self.neighbours(site)?;
        Ok(row[k as usize])
    }

    /// All `2 * ndim` neighbours of `site` as a slice view.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::SiteOutOfRange`] if `site >= size`.
    pub fn neighbours(&self, site: Site) -> Result<&[Site], LatticeError> {
        if site.0 >= self.size {
            return Err(LatticeError::SiteOutOfRange {
                site: site.0,
                size: self.size,
            });
        }
        let stride = self.neighbour_count() as usize;
        let begin = stride * site.index();
        Ok(&self.neighbour_list[begin..begin + stride])
    }

    /// Whether a distance map was built for this lattice.
    pub fn has_distance_map(&self) -> bool {
        !self.dist_map.is_empty()
    }

    /// All squared distances in the map, ascending.
    pub fn sq_distances(&self) -> Vec<u64> {
        self.dist_map.keys().copied().collect()
    }

    /// All site pairs `(i, j)`, `i <= j`, at the given squared distance.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::UnknownSqDistance`] if the distance map
    /// holds no such key; querying a never-populated distance is a
    /// programming error, not a runtime condition.
    pub fn pairs_with_sq_distance(&self, sq_distance: u64) -> Result<&[(Site, Site)], LatticeError> {
        self.dist_map
            .get(&sq_distance)
            .map(Vec::as_slice)
            .ok_or(LatticeError::UnknownSqDistance { sq_distance })
    }
}

/// Build the flat periodic neighbour list for all sites.
///
/// Walks the sites in row-major order with a mixed-radix counter and
/// resolves the wrapped `+1`/`-1` coordinate per dimension back to a flat
/// index through [`total_index`].
fn make_neighbour_list(shape: &[u32], size: u32) -> Result<Vec<Site>, LatticeError> {
    let ndim = shape.len();
    let mut neighbours = Vec::with_capacity(2 * ndim * size as usize);
    let mut coords: Coords = smallvec![0; ndim];

    for _ in 0..size {
        for d in 0..ndim {
            neighbours.push(total_index(&incremented_at(&coords, d, shape), shape)?);
            neighbours.push(total_index(&decremented_at(&coords, d, shape), shape)?);
        }
        increment(&mut coords, shape);
    }

    Ok(neighbours)
}

/// Classify all site pairs by squared minimum-image distance.
fn build_dist_map(shape: &[u32], size: u32, max_distance: f64, metric: Metric) -> DistMap {
    let ndim = shape.len();
    let mut map = DistMap::default();
    let mut individual = vec![0u64; ndim];
    let mut c0: Coords = smallvec![0; ndim];

    for i in 0..size.saturating_sub(1) {
        let mut c1 = c0.clone();
        for j in i..size {
            for d in 0..ndim {
                individual[d] = min_image_1d(c0[d], c1[d], shape[d]);
            }
            let sq = metric.sq_combine(&individual);

            if (sq as f64).sqrt() < max_distance {
                map.entry(sq).or_default().push((Site(i), Site(j)));
            }

            increment(&mut c1, shape);
        }
        increment(&mut c0, shape);
    }

    map.sort_keys();
    map
}
