//! Configuration types for loading sandbox scenarios from YAML.
//!
//! A scenario file is optional; every section and field falls back to the
//! sandbox defaults when missing. It consists of:
//!
//! - [`ParametersConfig`] – physical constant and input step sizes
//! - [`PendingConfig`]    – template for placed bodies, run flag and frame delay
//! - [`ViewConfig`]       – window size and vector overlay multipliers
//! - [`BodyConfig`]       – bodies present before the first click
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 6.67e-11             # gravitational constant, 1 pixel = 1 meter
//!   mass_step: 1000000000   # mass change per +/- key
//!   velocity_step: 0.1      # velocity change per arrow key
//!
//! pending:
//!   mass: 1000000000
//!   radius: 10.0
//!   velocity: [0.0, 0.0]
//!   delay_ms: 16
//!   running: false
//!
//! view:
//!   width: 1000.0
//!   height: 800.0
//!   velocity_scale: 100.0
//!   acceleration_scale: 10000.0
//!
//! bodies:
//!   - x: [450.0, 400.0]
//!     v: [0.0, 0.0]
//!     m: 1000000000
//!     radius: 10.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::engine::{
    DEFAULT_DELAY_MS, DEFAULT_MASS, DEFAULT_MASS_STEP, DEFAULT_RADIUS, DEFAULT_VELOCITY_STEP,
};
use crate::simulation::forces::G;
use crate::simulation::states::NVec2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open scenario file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario file")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{field} must have exactly 2 components, got {len}")]
    Dimension { field: &'static str, len: usize },
}

/// Physical constant and step sizes for keyboard adjustments
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,              // gravitational constant
    pub mass_step: u64,      // mass change per heavier/lighter
    pub velocity_step: f64,  // velocity change per nudge
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G,
            mass_step: DEFAULT_MASS_STEP,
            velocity_step: DEFAULT_VELOCITY_STEP,
        }
    }
}

/// Initial pending template and run state
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PendingConfig {
    pub mass: u64,
    pub radius: f64,
    pub velocity: Vec<f64>,
    pub delay_ms: u64,
    pub running: bool,
}

impl Default for PendingConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            radius: DEFAULT_RADIUS,
            velocity: vec![0.0, 0.0],
            delay_ms: DEFAULT_DELAY_MS,
            running: false,
        }
    }
}

/// Window size and overlay multipliers for the viewer
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: f32,
    pub height: f32,
    pub velocity_scale: f32,     // velocity line length per unit speed
    pub acceleration_scale: f32, // acceleration line length per unit acceleration
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            velocity_scale: 1e2,
            acceleration_scale: 1e4,
        }
    }
}

/// A body present at startup
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // position in pixels, origin top-left
    #[serde(default = "zero_vec")]
    pub v: Vec<f64>, // velocity in pixels per frame
    pub m: u64,
    pub radius: f64,
}

fn zero_vec() -> Vec<f64> {
    vec![0.0, 0.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub pending: PendingConfig,
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        to_nvec2("pending.velocity", &self.pending.velocity)?;
        for body in &self.bodies {
            to_nvec2("bodies[].x", &body.x)?;
            to_nvec2("bodies[].v", &body.v)?;
        }
        Ok(())
    }
}

/// Convert a YAML list into a 2D vector
pub fn to_nvec2(field: &'static str, v: &[f64]) -> Result<NVec2, ConfigError> {
    match v {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(ConfigError::Dimension { field, len: v.len() }),
    }
}
