//! Built-in scenarios shipped with the crate
//!
//! The inner-planet, full solar system and outer-planet runs are the same
//! engine with different initial conditions, so they live as YAML data under
//! `scenarios/` and are embedded at compile time.

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;

const INNER_PLANETS: &str = include_str!("../../scenarios/inner_planets.yaml");
const SOLAR_SYSTEM: &str = include_str!("../../scenarios/solar_system.yaml");
const OUTER_PLANETS: &str = include_str!("../../scenarios/outer_planets.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Sun through Jupiter, RK4 over one Jovian year
    InnerPlanets,
    /// Sun through Pluto, velocity Verlet, dt = 1e5 s
    SolarSystem,
    /// Sun with Jupiter through Pluto, velocity Verlet, dt = 1e6 s
    OuterPlanets,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::InnerPlanets, Preset::SolarSystem, Preset::OuterPlanets];

    pub fn yaml(self) -> &'static str {
        match self {
            Preset::InnerPlanets => INNER_PLANETS,
            Preset::SolarSystem => SOLAR_SYSTEM,
            Preset::OuterPlanets => OUTER_PLANETS,
        }
    }

    pub fn config(self) -> Result<ScenarioConfig, SimError> {
        ScenarioConfig::from_yaml_str(self.yaml())
    }
}
