//! Hamiltonian, energy delta, and magnetisation.
//!
//! Pure functions over a configuration and the lattice topology,
//! parameterised by the physical couplings. Each undirected bond is
//! counted once: the double sum over sites and their neighbours visits
//! every bond from both endpoints, so the coupling term carries a `/2`.

use crate::configuration::Configuration;
use crate::error::McError;
use spindle_core::{Parameters, Site};
use spindle_lattice::Lattice;

fn check_sizes(cfg: &Configuration, lat: &Lattice) -> Result<(), McError> {
    if cfg.size() != lat.size() {
        return Err(McError::SizeMismatch {
            cfg: cfg.size(),
            lattice: lat.size(),
        });
    }
    Ok(())
}

/// Sum of the spins on all `2 * ndim` neighbours of `site`.
///
/// # Errors
///
/// Returns [`McError::SiteOutOfRange`] or a wrapped
/// [`LatticeError`](spindle_lattice::LatticeError) for bad indices.
pub fn sum_of_neighbours(
    cfg: &Configuration,
    site: Site,
    lat: &Lattice,
) -> Result<i32, McError> {
    let mut sum = 0;
    for &nb in lat.neighbours(site)? {
        sum += cfg.get(nb)?.value();
    }
    Ok(sum)
}

/// Evaluate the Hamiltonian:
/// `H = -J/kT * Σ_i s_i * Σ_{n ∈ N(i)} s_n / 2 - h/kT * Σ_i s_i`.
///
/// # Errors
///
/// Returns [`McError::SizeMismatch`] if configuration and lattice
/// disagree on the site count.
pub fn hamiltonian(
    cfg: &Configuration,
    params: &Parameters,
    lat: &Lattice,
) -> Result<f64, McError> {
    check_sizes(cfg, lat)?;

    let mut coupling: i64 = 0;
    let mut magn: i64 = 0;
    for site in 0..lat.size() {
        let s = cfg.get(Site(site))?;
        coupling += i64::from(s.value()) * i64::from(sum_of_neighbours(cfg, Site(site), lat)?);
        magn += i64::from(s.value());
    }

    Ok(-params.jt * coupling as f64 / 2.0 - params.ht * magn as f64)
}

/// Energy change if the spin at `site` were flipped.
///
/// Only the bonds touching `site` change, so the delta has the closed
/// form `2 * s_site * (J/kT * Σ_{n ∈ N(site)} s_n + h/kT)` and never
/// needs a second Hamiltonian evaluation.
///
/// # Errors
///
/// Returns [`McError::SizeMismatch`] for inconsistent sizes, or an
/// index error for a bad site.
pub fn delta_e(
    cfg: &Configuration,
    site: Site,
    params: &Parameters,
    lat: &Lattice,
) -> Result<f64, McError> {
    check_sizes(cfg, lat)?;
    let nsum = sum_of_neighbours(cfg, site, lat)?;
    Ok(2.0 * f64::from(cfg.get(site)?.value()) * (params.jt * f64::from(nsum) + params.ht))
}

/// Mean spin of the configuration, in `[-1, 1]`.
pub fn magnetisation(cfg: &Configuration) -> f64 {
    let total: i64 = cfg.spins().iter().copied().sum();
    total as f64 / f64::from(cfg.size())
}
