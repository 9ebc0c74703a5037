//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! Building validates everything up front, so `run` can only fail on
//! parameters that were changed after construction.

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::trajectory::Trajectory;

#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub names: Vec<String>, // one label per body, "body{i}" when unnamed
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc): (usize, &BodyConfig)| -> Result<Body, SimError> {
                Ok(Body::new(bc.position(i)?, bc.velocity(i)?, bc.m))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let system = System::new(bodies)?;

        let names = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| bc.name.clone().unwrap_or_else(|| format!("body{i}")))
            .collect();

        let parameters = Parameters {
            dt: cfg.parameters.dt,
            t_end: cfg.parameters.t_end,
            g: cfg.parameters.g,
        };
        parameters.validate()?;

        let engine = Engine::from(&cfg.engine);
        let forces = AccelSet::gravity(parameters.g, engine.parallel);

        info!(
            "built scenario: {} bodies, dt = {} s, t_end = {} s",
            system.len(),
            parameters.dt,
            parameters.t_end
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            names,
        })
    }

    /// Integrate from the initial state; the scenario itself is left untouched
    pub fn run(&self) -> Result<Trajectory, SimError> {
        integrator::run(self.system.clone(), &self.forces, &self.engine, &self.parameters)
    }
}
