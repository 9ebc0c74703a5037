//! High-level runtime engine settings
//!
//! Selects the integrator and whether gravity is evaluated in parallel
//! when building and running a `Scenario`

use crate::configuration::config::{EngineConfig, IntegratorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    Verlet, // symplectic kick-drift-kick, primary scheme
    Rk4,    // classical Runge-Kutta over the packed state vector
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub integrator: IntegratorKind,
    pub parallel: bool, // false = sequential direct sum, true = rayon per-body sums
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorKind::Verlet,
            parallel: false,
        }
    }
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        let integrator = match cfg.integrator {
            IntegratorConfig::Verlet => IntegratorKind::Verlet,
            IntegratorConfig::Rk4 => IntegratorKind::Rk4,
        };
        Self {
            integrator,
            parallel: cfg.parallel,
        }
    }
}
