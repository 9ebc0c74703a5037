//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt` and horizon `t_end`,
//! - the gravitational constant `g`

use crate::error::SimError;
use crate::simulation::forces::G_SI;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64,    // step size (s)
    pub t_end: f64, // simulation horizon (s)
    pub g: f64,     // gravitational constant
}

impl Parameters {
    /// SI parameters with the default gravitational constant
    pub fn new(dt: f64, t_end: f64) -> Self {
        Self { dt, t_end, g: G_SI }
    }

    /// Reject time parameters that would give an empty or negative run
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if !self.t_end.is_finite() || self.t_end < self.dt {
            return Err(SimError::HorizonShorterThanStep { t_end: self.t_end, dt: self.dt });
        }
        Ok(())
    }

    /// Number of steps to take: `floor(t_end / dt)`
    ///
    /// The last simulated instant may fall short of `t_end`. The count plus
    /// the initial snapshot must fit in a `usize`.
    pub fn total_steps(&self) -> Result<usize, SimError> {
        self.validate()?;

        // `as usize` saturates; reject before the cast
        let steps = (self.t_end / self.dt).floor();
        if steps >= usize::MAX as f64 {
            return Err(SimError::TooManySteps { t_end: self.t_end, dt: self.dt });
        }

        let steps = steps as usize;
        steps
            .checked_add(1)
            .map(|_| steps)
            .ok_or(SimError::TooManySteps { t_end: self.t_end, dt: self.dt })
    }
}
