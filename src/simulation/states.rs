//! Core state types for the N-body simulation.
//!
//! - `Body`   point mass with position `x` and velocity `v` (`NVec2`)
//! - `System` ordered bodies plus the current simulation time `t`
//!
//! Body count and masses are fixed once a `System` is built; only positions,
//! velocities and `t` change during a run.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64,   // mass (kg)
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Self {
        Self { x, v, m }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // bodies addressed by index 0..N-1
    pub t: f64,            // time (s)
}

impl System {
    /// Build a system at t = 0, rejecting empty, massless or non-finite input
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimError> {
        if bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }

        for (index, b) in bodies.iter().enumerate() {
            if !(b.m.is_finite() && b.m > 0.0) {
                return Err(SimError::NonPositiveMass { index, mass: b.m });
            }
            if !(b.x.x.is_finite() && b.x.y.is_finite()) {
                return Err(SimError::NonFiniteState { index, field: "position" });
            }
            if !(b.v.x.is_finite() && b.v.y.is_finite()) {
                return Err(SimError::NonFiniteState { index, field: "velocity" });
            }
        }

        Ok(Self { bodies, t: 0.0 })
    }

    /// Build a system from parallel position/velocity/mass arrays
    ///
    /// All three must agree on N; `masses` defines the expected length.
    pub fn from_arrays(positions: &[NVec2], velocities: &[NVec2], masses: &[f64]) -> Result<Self, SimError> {
        let n = masses.len();
        if positions.len() != n {
            return Err(SimError::LengthMismatch { what: "positions", expected: n, found: positions.len() });
        }
        if velocities.len() != n {
            return Err(SimError::LengthMismatch { what: "velocities", expected: n, found: velocities.len() });
        }

        let bodies = positions
            .iter()
            .zip(velocities)
            .zip(masses)
            .map(|((&x, &v), &m)| Body::new(x, v, m))
            .collect();

        Self::new(bodies)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    pub fn positions(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    /// True when every position and velocity component is finite
    pub fn is_finite(&self) -> bool {
        self.bodies
            .iter()
            .all(|b| b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()))
    }
}
