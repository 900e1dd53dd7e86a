//! The Metropolis-Hastings sweep engine.

use crate::configuration::Configuration;
use crate::energy::delta_e;
use crate::error::McError;
use crate::measure::Measure;
use crate::observables::Observables;
use crate::rng::Rng;
use spindle_core::Parameters;
use spindle_lattice::Lattice;

/// Result of [`evolve`]: the configuration comes back by value.
#[derive(Clone, Debug, PartialEq)]
pub struct EvolveOutcome {
    /// Final configuration, reflecting all accepted flips.
    pub cfg: Configuration,
    /// Final running energy; matches a fresh Hamiltonian evaluation of
    /// `cfg` up to floating-point accumulation.
    pub energy: f64,
    /// Accepted flips over attempted flips, in `[0, 1]`.
    pub acceptance_rate: f64,
}

/// Evolve a configuration in Monte Carlo time.
///
/// Performs `n_sweeps` sweeps of `lat.size()` single-spin-flip attempts
/// each. Per attempt: draw a site, compute the energy delta, and accept
/// with the Metropolis-Hastings rule. The `delta <= 0` branch accepts
/// without drawing a uniform real, since `exp(-delta) >= 1` makes the
/// draw's outcome a foregone conclusion. The number of [`Rng::gen_real`]
/// calls, and with it the exact stream position, therefore depends on the
/// trajectory; reordering this check changes bit-level reproducibility.
///
/// After each sweep, one sample is appended to `obs` (when present) and
/// every `extra` hook runs in order. Passing no observables sink makes
/// this a pure thermalisation loop with no per-sweep bookkeeping.
///
/// `energy` is the caller's running energy for `cfg`; it is only updated
/// by deltas, so thermalisation callers may pass any starting value and
/// recompute afterwards.
///
/// # Errors
///
/// Returns [`McError::SizeMismatch`] if `cfg` and `lat` disagree, an
/// index error if the lattice and RNG bounds were set up inconsistently,
/// or [`McError::MeasurementFailed`] when a hook fails. Any error aborts
/// the run; the chain is never resumed over a gap.
#[allow(clippy::too_many_arguments)]
pub fn evolve(
    mut cfg: Configuration,
    mut energy: f64,
    params: &Parameters,
    lat: &Lattice,
    rng: &mut Rng,
    n_sweeps: usize,
    mut obs: Option<&mut Observables>,
    extra: &mut [Box<dyn Measure>],
) -> Result<EvolveOutcome, McError> {
    if cfg.size() != lat.size() {
        return Err(McError::SizeMismatch {
            cfg: cfg.size(),
            lattice: lat.size(),
        });
    }

    let size = lat.size();
    let mut naccept: u64 = 0;

    for _ in 0..n_sweeps {
        for _ in 0..size {
            let site = rng.gen_index();
            let delta = delta_e(&cfg, site, params, lat)?;

            // Metropolis-Hastings accept-reject. The first check is not
            // needed for correctness but skips the exponential and the
            // uniform draw when the flip is downhill.
            if delta <= 0.0 || (-delta).exp() > rng.gen_real() {
                cfg.flip(site)?;
                energy += delta;
                naccept += 1;
            }
        }

        if let Some(obs) = obs.as_deref_mut() {
            obs.record(&cfg, energy, lat)?;
        }

        for meas in extra.iter_mut() {
            meas.observe(&cfg, energy)
                .map_err(|err| McError::MeasurementFailed {
                    name: meas.name().to_owned(),
                    reason: err.reason,
                })?;
        }
    }

    let attempts = n_sweeps as u64 * u64::from(size);
    let acceptance_rate = if attempts == 0 {
        0.0
    } else {
        naccept as f64 / attempts as f64
    };

    Ok(EvolveOutcome {
        cfg,
        energy,
        acceptance_rate,
    })
}
