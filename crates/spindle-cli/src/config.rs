//! Run-file loading, broadcasting, and validation.
//!
//! The YAML run file allows scalar-or-sequence forms for the physical
//! parameters and the per-ensemble sweep counts. Everything is resolved
//! here, before any lattice or sweep work starts: the rest of the
//! program only ever sees sequences of equal length.

use serde::Deserialize;
use spindle_core::Parameters;
use spindle_lattice::Metric;
use std::fmt;
use std::fs;
use std::path::Path;

/// Initial-state selector.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Start {
    /// Random initial spins.
    Hot,
    /// All spins `+1`.
    Cold,
}

/// Correlator section of the run file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorrelatorConfig {
    /// Cutoff: pairs strictly below this (non-squared) distance are binned.
    pub max_distance: f64,
    /// Metric used to classify pairs.
    pub metric: Metric,
}

/// Fully resolved program configuration.
///
/// `ntherm` and `nprod` are guaranteed to have the same length as
/// `params`, and `params` is guaranteed non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgConfig {
    /// Lattice extents.
    pub lattice_shape: Vec<u32>,
    /// Seed for the run's one generator.
    pub rng_seed: u64,
    /// One parameter set per ensemble.
    pub params: Vec<Parameters>,
    /// Sweeps for the initial thermalisation.
    pub ntherm_init: usize,
    /// Thermalisation sweeps per ensemble.
    pub ntherm: Vec<usize>,
    /// Production (measured) sweeps per ensemble.
    pub nprod: Vec<usize>,
    /// Initial-state selector.
    pub start: Start,
    /// Whether to stream configuration snapshots per sweep.
    pub write_cfg: bool,
    /// Correlator settings; `None` disables the distance map entirely.
    pub correlator: Option<CorrelatorConfig>,
}

/// Errors from loading or resolving a run file.
#[derive(Debug)]
pub enum ConfigError {
    /// The run file could not be read.
    Io(std::io::Error),
    /// The run file is not valid YAML for the expected schema.
    Yaml(serde_yaml::Error),
    /// A sequence field is empty.
    EmptySequence {
        /// The offending field.
        field: &'static str,
    },
    /// Two sequences that must line up have different lengths.
    LengthMismatch {
        /// The offending field.
        field: &'static str,
        /// Its length.
        len: usize,
        /// The length it has to match.
        expected: usize,
    },
    /// The correlator cutoff is not a positive finite number.
    BadMaxDistance {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read run file: {err}"),
            Self::Yaml(err) => write!(f, "cannot parse run file: {err}"),
            Self::EmptySequence { field } => write!(f, "'{field}' must not be empty"),
            Self::LengthMismatch {
                field,
                len,
                expected,
            } => write!(f, "'{field}' has {len} entries, expected {expected}"),
            Self::BadMaxDistance { value } => {
                write!(f, "correlator max_distance must be positive and finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

/// A YAML node that is either a scalar or a sequence.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(vs) => vs,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(rename = "Lattice")]
    lattice: RawLattice,
    #[serde(rename = "RNG")]
    rng: RawRng,
    #[serde(rename = "Parameters")]
    parameters: RawParameters,
    #[serde(rename = "MC")]
    mc: RawMc,
    write_cfg: bool,
    #[serde(default)]
    correlator: Option<RawCorrelator>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLattice {
    shape: Vec<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRng {
    seed: u64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameters {
    #[serde(rename = "J")]
    j: OneOrMany<f64>,
    h: OneOrMany<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMc {
    ntherm_init: usize,
    ntherm: OneOrMany<usize>,
    nprod: OneOrMany<usize>,
    start: Start,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl From<RawMetric> for Metric {
    fn from(m: RawMetric) -> Self {
        match m {
            RawMetric::Euclidean => Self::Euclidean,
            RawMetric::Manhattan => Self::Manhattan,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCorrelator {
    max_distance: f64,
    #[serde(default)]
    metric: RawMetric,
}

/// Broadcast `values` to length `desired`.
///
/// A single entry is repeated; a longer sequence must already have the
/// desired length.
fn broadcast<T: Clone>(
    field: &'static str,
    values: Vec<T>,
    desired: usize,
) -> Result<Vec<T>, ConfigError> {
    match values.len() {
        0 => Err(ConfigError::EmptySequence { field }),
        1 if desired > 1 => Ok(vec![values[0].clone(); desired]),
        len if len == desired => Ok(values),
        len => Err(ConfigError::LengthMismatch {
            field,
            len,
            expected: desired,
        }),
    }
}

impl ProgConfig {
    /// Load and resolve a run file.
    ///
    /// # Errors
    ///
    /// Anything from an unreadable file to a broadcast mismatch; all
    /// fatal, reported before any simulation work starts.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Resolve a run file from its text.
    ///
    /// # Errors
    ///
    /// See [`ProgConfig::load`].
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(text)?;

        let j = raw.parameters.j.into_vec();
        let h = raw.parameters.h.into_vec();
        let n_ensembles = j.len().max(h.len());
        let j = broadcast("Parameters.J", j, n_ensembles)?;
        let h = broadcast("Parameters.h", h, n_ensembles)?;
        let params: Vec<Parameters> = j
            .into_iter()
            .zip(h)
            .map(|(jt, ht)| Parameters { jt, ht })
            .collect();

        let ntherm = broadcast("MC.ntherm", raw.mc.ntherm.into_vec(), params.len())?;
        let nprod = broadcast("MC.nprod", raw.mc.nprod.into_vec(), params.len())?;

        let correlator = raw
            .correlator
            .map(|c| {
                if !c.max_distance.is_finite() || c.max_distance <= 0.0 {
                    return Err(ConfigError::BadMaxDistance {
                        value: c.max_distance,
                    });
                }
                Ok(CorrelatorConfig {
                    max_distance: c.max_distance,
                    metric: c.metric.into(),
                })
            })
            .transpose()?;

        Ok(Self {
            lattice_shape: raw.lattice.shape,
            rng_seed: raw.rng.seed,
            params,
            ntherm_init: raw.mc.ntherm_init,
            ntherm,
            nprod,
            start: raw.mc.start,
            write_cfg: raw.write_cfg,
            correlator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
Lattice:
  shape: [32, 16]
RNG:
  seed: 538
Parameters:
  J: [0.2, 0.35, 0.5]
  h: 0.0
MC:
  ntherm_init: 1000
  ntherm: 500
  nprod: [2000, 2000, 4000]
  start: hot
write_cfg: true
correlator:
  max_distance: 4.0
  metric: manhattan
";

    #[test]
    fn full_run_file_resolves() {
        let cfg = ProgConfig::parse(FULL).unwrap();
        assert_eq!(cfg.lattice_shape, vec![32, 16]);
        assert_eq!(cfg.rng_seed, 538);
        assert_eq!(
            cfg.params,
            vec![
                Parameters { jt: 0.2, ht: 0.0 },
                Parameters { jt: 0.35, ht: 0.0 },
                Parameters { jt: 0.5, ht: 0.0 },
            ]
        );
        assert_eq!(cfg.ntherm_init, 1000);
        assert_eq!(cfg.ntherm, vec![500, 500, 500]);
        assert_eq!(cfg.nprod, vec![2000, 2000, 4000]);
        assert_eq!(cfg.start, Start::Hot);
        assert!(cfg.write_cfg);
        assert_eq!(
            cfg.correlator,
            Some(CorrelatorConfig {
                max_distance: 4.0,
                metric: Metric::Manhattan,
            })
        );
    }

    #[test]
    fn scalars_broadcast_everywhere() {
        let text = "\
Lattice:
  shape: [8]
RNG:
  seed: 1
Parameters:
  J: 0.5
  h: [0.0, 0.1]
MC:
  ntherm_init: 10
  ntherm: 5
  nprod: 7
  start: cold
write_cfg: false
";
        let cfg = ProgConfig::parse(text).unwrap();
        assert_eq!(cfg.params.len(), 2);
        assert_eq!(cfg.params[0].jt, 0.5);
        assert_eq!(cfg.params[1].jt, 0.5);
        assert_eq!(cfg.ntherm, vec![5, 5]);
        assert_eq!(cfg.nprod, vec![7, 7]);
        assert_eq!(cfg.start, Start::Cold);
        assert!(cfg.correlator.is_none());
    }

    #[test]
    fn mismatched_sequences_are_rejected() {
        let text = "\
Lattice:
  shape: [8]
RNG:
  seed: 1
Parameters:
  J: [0.5, 0.6]
  h: [0.0, 0.1, 0.2]
MC:
  ntherm_init: 10
  ntherm: 5
  nprod: 7
  start: cold
write_cfg: false
";
        let err = ProgConfig::parse(text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::LengthMismatch {
                field: "Parameters.J",
                len: 2,
                expected: 3,
            }
        ));
    }

    #[test]
    fn sweep_count_mismatch_is_rejected() {
        let text = "\
Lattice:
  shape: [8]
RNG:
  seed: 1
Parameters:
  J: [0.5, 0.6]
  h: 0.0
MC:
  ntherm_init: 10
  ntherm: [5, 5, 5]
  nprod: 7
  start: hot
write_cfg: false
";
        let err = ProgConfig::parse(text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::LengthMismatch {
                field: "MC.ntherm",
                len: 3,
                expected: 2,
            }
        ));
    }

    #[test]
    fn invalid_start_is_rejected() {
        let text = FULL.replace("start: hot", "start: lukewarm");
        assert!(matches!(
            ProgConfig::parse(&text),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn bad_max_distance_is_rejected() {
        let text = FULL.replace("max_distance: 4.0", "max_distance: -1.0");
        assert!(matches!(
            ProgConfig::parse(&text),
            Err(ConfigError::BadMaxDistance { .. })
        ));
    }

    #[test]
    fn metric_defaults_to_euclidean() {
        let text = FULL.replace("  metric: manhattan\n", "");
        let cfg = ProgConfig::parse(&text).unwrap();
        assert_eq!(
            cfg.correlator.map(|c| c.metric),
            Some(Metric::Euclidean)
        );
    }
}
