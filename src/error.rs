//! Error type shared by the simulation and configuration layers
//!
//! Every failure here is a caller-input problem; nothing is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("simulation horizon {t_end} is shorter than one time step {dt}")]
    HorizonShorterThanStep { t_end: f64, dt: f64 },

    #[error("{t_end} s in steps of {dt} s needs more snapshots than can be stored")]
    TooManySteps { t_end: f64, dt: f64 },

    #[error("{snapshots} snapshots of {bodies} bodies do not fit in memory")]
    CapacityOverflow { snapshots: usize, bodies: usize },

    #[error("trajectory is full: capacity of {capacity} snapshots reached")]
    TrajectoryFull { capacity: usize },

    #[error("{what}: expected {expected} entries, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("body {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("body {index} has a non-finite initial {field}")]
    NonFiniteState { index: usize, field: &'static str },

    #[error("body {index}: `{field}` must have 2 components, found {len}")]
    BadVectorLength {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("system has no bodies")]
    EmptySystem,

    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario yaml")]
    Yaml(#[from] serde_yaml::Error),
}
