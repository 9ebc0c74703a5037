//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and parallel gravity switch
//! - [`ParametersConfig`] – time step, horizon and gravitational constant
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"    # or "rk4"
//!   parallel: false         # optional
//!
//! parameters:
//!   dt: 3600.0              # time step (s)
//!   t_end: 3.156e7          # total simulated time (s)
//!   G: 6.67408e-11          # optional, SI value by default
//!
//! bodies:
//!   - name: "Sun"
//!     m: 1.9885e30
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!   - name: "Earth"
//!     m: 5.97e24
//!     x: [0.0, 149.6e9]
//!     v: [29800.0, 0.0]
//! ```
//!
//! The engine maps this configuration into its runtime `Scenario`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::forces::G_SI;
use crate::simulation::states::NVec2;

/// Which integrator method used by the engine
/// `integrator: "verlet"` or `integrator: "rk4"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "verlet")] // velocity Verlet, symplectic, fixed step
    Verlet,

    #[serde(rename = "rk4")] // classical RK4 over the packed state vector, not symplectic
    Rk4,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    #[serde(default)]
    pub parallel: bool, // evaluate per-body gravity sums on the rayon pool
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // time step size (s)
    pub t_end: f64, // time end (s)
    #[serde(rename = "G", default = "default_g")]
    pub g: f64,     // gravitational constant
}

fn default_g() -> f64 {
    G_SI
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // label for logs and CSV output only
    pub m: f64,               // mass (kg)
    pub x: Vec<f64>,          // initial position [x, y] (m)
    pub v: Vec<f64>,          // initial velocity [vx, vy] (m/s)
}

impl BodyConfig {
    pub fn position(&self, index: usize) -> Result<NVec2, SimError> {
        to_vec2(&self.x, index, "x")
    }

    pub fn velocity(&self, index: usize) -> Result<NVec2, SimError> {
        to_vec2(&self.v, index, "v")
    }
}

fn to_vec2(c: &[f64], index: usize, field: &'static str) -> Result<NVec2, SimError> {
    match c {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::BadVectorLength { index, field, len: c.len() }),
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
