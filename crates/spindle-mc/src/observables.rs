//! Accumulated per-sweep observable time series.

use crate::configuration::Configuration;
use crate::energy::magnetisation;
use crate::error::McError;
use spindle_lattice::Lattice;

/// Spin-spin correlator bins, parallel to the lattice distance map.
///
/// One series per squared distance, ascending; each entry is the
/// per-sweep average of `s_i * s_j` over all pairs at that distance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Correlator {
    sq_distances: Vec<u64>,
    series: Vec<Vec<f64>>,
}

impl Correlator {
    /// The squared distances the bins correspond to, ascending.
    pub fn sq_distances(&self) -> &[u64] {
        &self.sq_distances
    }

    /// Iterate over `(squared distance, series)` bins in ascending order.
    pub fn bins(&self) -> impl Iterator<Item = (u64, &[f64])> + '_ {
        self.sq_distances
            .iter()
            .copied()
            .zip(self.series.iter().map(Vec::as_slice))
    }

    fn record(&mut self, cfg: &Configuration, lat: &Lattice) -> Result<(), McError> {
        for (&sq, series) in self.sq_distances.iter().zip(&mut self.series) {
            let pairs = lat.pairs_with_sq_distance(sq)?;
            let mut sum: i64 = 0;
            for &(i, j) in pairs {
                sum += i64::from(cfg.get(i)?.value() * cfg.get(j)?.value());
            }
            series.push(sum as f64 / pairs.len() as f64);
        }
        Ok(())
    }
}

/// Monte Carlo history of observables for one ensemble.
///
/// [`evolve`](crate::evolve) appends one energy and one magnetisation
/// sample per sweep, plus one correlator sample per distance bin when the
/// lattice carries a distance map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observables {
    /// Energy after each sweep.
    pub energy: Vec<f64>,
    /// Magnetisation after each sweep.
    pub magnetisation: Vec<f64>,
    correlator: Correlator,
}

impl Observables {
    /// Create empty series with correlator bins matching the lattice's
    /// distance map (no bins when the lattice has none).
    pub fn new(lat: &Lattice) -> Self {
        let sq_distances = lat.sq_distances();
        let series = vec![Vec::new(); sq_distances.len()];
        Self {
            energy: Vec::new(),
            magnetisation: Vec::new(),
            correlator: Correlator {
                sq_distances,
                series,
            },
        }
    }

    /// The correlator bins.
    pub fn correlator(&self) -> &Correlator {
        &self.correlator
    }

    /// Number of recorded sweeps.
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// Whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Append one sample of every enabled series.
    ///
    /// # Errors
    ///
    /// Propagates index errors from the correlator sweep; these indicate
    /// a configuration/lattice mismatch, not a recoverable condition.
    pub fn record(
        &mut self,
        cfg: &Configuration,
        energy: f64,
        lat: &Lattice,
    ) -> Result<(), McError> {
        self.energy.push(energy);
        self.magnetisation.push(magnetisation(cfg));
        self.correlator.record(cfg, lat)
    }
}
