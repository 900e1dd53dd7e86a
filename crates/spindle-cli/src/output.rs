//! Output-directory lifecycle and data-file writers.
//!
//! Per ensemble `n`, observables go to `NNNN.dat` and configuration
//! snapshots append to `NNNN.cfg`, both starting with a metadata header
//! line of the form `# J=<J> h=<h> shape=[a, b, ...]`.

use log::warn;
use spindle_core::Parameters;
use spindle_lattice::Lattice;
use spindle_mc::{Configuration, Measure, MeasureError, Observables};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Create the output directory, deleting it first if it exists.
pub fn prepare_outdir(outdir: &Path) -> io::Result<()> {
    if outdir.exists() {
        warn!("output directory {} exists, deleting", outdir.display());
        fs::remove_dir_all(outdir)?;
    }
    fs::create_dir_all(outdir)
}

/// Data-file name for an ensemble number, e.g. `0003.dat`.
fn out_fname(ensemble: usize, extension: &str) -> String {
    format!("{ensemble:04}{extension}")
}

/// The `# J=... h=... shape=[...]` metadata header.
fn metadata_line(params: &Parameters, lat: &Lattice) -> String {
    let shape = lat
        .shape()
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("# J={} h={} shape=[{}]", params.jt, params.ht, shape)
}

fn write_series(out: &mut impl Write, values: &[f64]) -> io::Result<()> {
    let line = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{line}")
}

/// Write one ensemble's observables to `NNNN.dat`.
///
/// One line of energies, one of magnetisations, then one line per
/// correlator bin in ascending squared-distance order.
pub fn write_observables(
    outdir: &Path,
    ensemble: usize,
    obs: &Observables,
    params: &Parameters,
    lat: &Lattice,
) -> io::Result<()> {
    let path = outdir.join(out_fname(ensemble, ".dat"));
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "{}", metadata_line(params, lat))?;
    write_series(&mut out, &obs.energy)?;
    write_series(&mut out, &obs.magnetisation)?;
    for (_, series) in obs.correlator().bins() {
        write_series(&mut out, series)?;
    }
    out.flush()
}

/// Measurement hook that appends one configuration row per sweep to
/// `NNNN.cfg`.
pub struct CfgWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl CfgWriter {
    /// Create the snapshot file with its metadata header.
    pub fn create(
        outdir: &Path,
        ensemble: usize,
        params: &Parameters,
        lat: &Lattice,
    ) -> io::Result<Self> {
        let path = outdir.join(out_fname(ensemble, ".cfg"));
        let mut out = BufWriter::new(File::create(&path)?);
        writeln!(out, "{}", metadata_line(params, lat))?;
        Ok(Self { path, out })
    }
}

impl Measure for CfgWriter {
    fn name(&self) -> &str {
        "cfg_writer"
    }

    fn observe(&mut self, cfg: &Configuration, _energy: f64) -> Result<(), MeasureError> {
        let row = cfg
            .spins()
            .iter()
            .map(|s| s.value().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.out, "{row}").map_err(|err| MeasureError {
            reason: format!("cannot append to {}: {err}", self.path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::{Site, Spin};
    use std::env;

    /// Fresh scratch directory removed on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(tag: &str) -> Self {
            let dir = env::temp_dir().join(format!("spindle-{tag}-{}", std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            Self(dir)
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn prepare_outdir_replaces_existing() {
        let scratch = Scratch::new("prepare");
        fs::create_dir_all(&scratch.0).unwrap();
        fs::write(scratch.0.join("stale.dat"), "old").unwrap();

        prepare_outdir(&scratch.0).unwrap();
        assert!(scratch.0.exists());
        assert!(!scratch.0.join("stale.dat").exists());
    }

    #[test]
    fn observables_file_layout() {
        let scratch = Scratch::new("obs");
        prepare_outdir(&scratch.0).unwrap();

        let lat = Lattice::new(&[4, 3]).unwrap();
        let params = Parameters { jt: 0.5, ht: -0.25 };
        let cfg = Configuration::uniform(lat.size(), Spin::Up);
        let mut obs = Observables::new(&lat);
        obs.record(&cfg, -12.5, &lat).unwrap();
        obs.record(&cfg, -13.0, &lat).unwrap();

        write_observables(&scratch.0, 3, &obs, &params, &lat).unwrap();

        let text = fs::read_to_string(scratch.0.join("0003.dat")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# J=0.5 h=-0.25 shape=[4, 3]");
        assert_eq!(lines[1], "-12.5, -13");
        assert_eq!(lines[2], "1, 1");
        // no distance map, so nothing follows the magnetisation line
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn cfg_writer_appends_rows() {
        let scratch = Scratch::new("cfg");
        prepare_outdir(&scratch.0).unwrap();

        let lat = Lattice::new(&[4]).unwrap();
        let params = Parameters { jt: 1.0, ht: 0.0 };
        let mut cfg = Configuration::uniform(lat.size(), Spin::Up);

        let mut writer = CfgWriter::create(&scratch.0, 0, &params, &lat).unwrap();
        writer.observe(&cfg, 0.0).unwrap();
        cfg.flip(Site(1)).unwrap();
        writer.observe(&cfg, 0.0).unwrap();
        drop(writer);

        let text = fs::read_to_string(scratch.0.join("0000.cfg")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# J=1 h=0 shape=[4]");
        assert_eq!(lines[1], "1, 1, 1, 1");
        assert_eq!(lines[2], "1, -1, 1, 1");
    }
}
