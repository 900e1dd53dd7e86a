//! Command-line driver for the spindle Ising simulator.
//!
//! Loads a YAML run file, simulates every ensemble in sequence with one
//! shared random stream, and writes per-ensemble data files into the
//! output directory. Progress and timings go through the `log` facade;
//! set `RUST_LOG=info` to see them.

use clap::Parser;
use log::{error, info};
use spindle_core::Spin;
use spindle_lattice::{Lattice, LatticeError};
use spindle_mc::{evolve, hamiltonian, Configuration, McError, Measure, Observables, Rng};
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

mod config;
mod output;

use config::{ConfigError, ProgConfig, Start};
use output::CfgWriter;

/// Simulate the Ising model with Metropolis-Hastings Monte Carlo.
#[derive(Debug, Parser)]
#[command(name = "spindle", version, about)]
struct Args {
    /// YAML run file describing lattice, parameters, and sweep counts.
    run_file: PathBuf,
    /// Output directory; deleted and recreated if it already exists.
    outdir: PathBuf,
}

/// Anything that can end a run early.
#[derive(Debug)]
enum RunError {
    Config(ConfigError),
    Lattice(LatticeError),
    Mc(McError),
    Io(std::io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Lattice(err) => write!(f, "lattice error: {err}"),
            Self::Mc(err) => write!(f, "simulation error: {err}"),
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LatticeError> for RunError {
    fn from(err: LatticeError) -> Self {
        Self::Lattice(err)
    }
}

impl From<McError> for RunError {
    fn from(err: McError) -> Self {
        Self::Mc(err)
    }
}

impl From<std::io::Error> for RunError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let input = ProgConfig::load(&args.run_file)?;
    output::prepare_outdir(&args.outdir)?;

    let lat = match &input.correlator {
        Some(corr) => {
            Lattice::with_distance_map(&input.lattice_shape, corr.max_distance, corr.metric)?
        }
        None => Lattice::new(&input.lattice_shape)?,
    };
    let mut rng = Rng::new(lat.size(), input.rng_seed)?;

    let mut cfg = match input.start {
        Start::Hot => Configuration::random(lat.size(), &mut rng),
        Start::Cold => Configuration::uniform(lat.size(), Spin::Up),
    };

    // The starting energy is irrelevant for pure thermalisation; it is
    // recomputed per ensemble below.
    let started = Instant::now();
    let out = evolve(
        cfg,
        0.0,
        &input.params[0],
        &lat,
        &mut rng,
        input.ntherm_init,
        None,
        &mut [],
    )?;
    cfg = out.cfg;
    info!(
        "initial thermalisation acceptance rate: {:.4} ({} sweeps in {:?})",
        out.acceptance_rate,
        input.ntherm_init,
        started.elapsed()
    );

    for (i, params) in input.params.iter().enumerate() {
        info!("ensemble {i}: {params}");
        let started = Instant::now();

        let energy = hamiltonian(&cfg, params, &lat)?;

        let mut extra: Vec<Box<dyn Measure>> = Vec::new();
        if input.write_cfg {
            extra.push(Box::new(CfgWriter::create(&args.outdir, i, params, &lat)?));
        }

        let out = evolve(
            cfg,
            energy,
            params,
            &lat,
            &mut rng,
            input.ntherm[i],
            None,
            &mut [],
        )?;
        cfg = out.cfg;
        info!("  thermalisation acceptance rate: {:.4}", out.acceptance_rate);

        let mut obs = Observables::new(&lat);
        let out = evolve(
            cfg,
            out.energy,
            params,
            &lat,
            &mut rng,
            input.nprod[i],
            Some(&mut obs),
            &mut extra,
        )?;
        cfg = out.cfg;
        info!("  production acceptance rate: {:.4}", out.acceptance_rate);
        info!("  run time: {:?}", started.elapsed());

        output::write_observables(&args.outdir, i, &obs, params, &lat)?;
    }

    Ok(())
}
