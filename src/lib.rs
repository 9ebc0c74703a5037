pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::{Engine, IntegratorKind};
pub use simulation::forces::{compute_accelerations, Acceleration, AccelSet, NewtonianGravity, ParallelNewtonianGravity, G_SI};
pub use simulation::integrator::{integrate, run, verlet_integrator, rk4_integrator};
pub use simulation::ode::{rk4_step, GravityOde, StateVector};
pub use simulation::trajectory::{BodyState, Trajectory, TrajectoryRecorder};
pub use simulation::energy::{kinetic_energy, potential_energy, total_energy, max_relative_drift};
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};
pub use configuration::presets::Preset;

pub use benchmark::benchmark::{bench_gravity, bench_verlet};
