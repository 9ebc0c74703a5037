//! First-order ODE view of the gravitational system
//!
//! The system is packed into one vector
//!
//! ```text
//! y = [x0, y0, x1, y1, ..., vx0, vy0, vx1, vy1, ...]
//! ```
//!
//! (all positions, then all velocities, in body order) and
//! `dy/dt = [velocities, accelerations]` in the same layout. Any explicit
//! solver can consume `GravityOde::derivatives`; `rk4_step` is the fixed-step
//! classical Runge-Kutta one the engine ships with.

use nalgebra::DVector;

use crate::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::states::{NVec2, System};

/// Packed 4N state vector with named accessors
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    y: DVector<f64>,
    n: usize,
}

impl StateVector {
    pub fn pack(sys: &System) -> Self {
        let n = sys.len();
        let mut y = DVector::zeros(4 * n);
        for (i, b) in sys.bodies.iter().enumerate() {
            y[2 * i] = b.x.x;
            y[2 * i + 1] = b.x.y;
            y[2 * n + 2 * i] = b.v.x;
            y[2 * n + 2 * i + 1] = b.v.y;
        }
        Self { y, n }
    }

    /// Wrap a raw vector; its length must be a multiple of 4
    pub fn from_raw(y: DVector<f64>) -> Result<Self, SimError> {
        if y.len() % 4 != 0 {
            return Err(SimError::LengthMismatch {
                what: "state vector",
                expected: y.len() - y.len() % 4,
                found: y.len(),
            });
        }
        let n = y.len() / 4;
        Ok(Self { y, n })
    }

    pub fn body_count(&self) -> usize {
        self.n
    }

    pub fn as_vector(&self) -> &DVector<f64> {
        &self.y
    }

    pub fn into_vector(self) -> DVector<f64> {
        self.y
    }

    pub fn position(&self, i: usize) -> NVec2 {
        NVec2::new(self.y[2 * i], self.y[2 * i + 1])
    }

    pub fn velocity(&self, i: usize) -> NVec2 {
        let off = 2 * self.n;
        NVec2::new(self.y[off + 2 * i], self.y[off + 2 * i + 1])
    }

    /// Write positions and velocities back into `sys` (masses and `t` untouched)
    pub fn unpack_into(&self, sys: &mut System) -> Result<(), SimError> {
        if sys.len() != self.n {
            return Err(SimError::LengthMismatch {
                what: "bodies",
                expected: self.n,
                found: sys.len(),
            });
        }
        for (i, b) in sys.bodies.iter_mut().enumerate() {
            b.x = self.position(i);
            b.v = self.velocity(i);
        }
        Ok(())
    }
}

/// `dy/dt` for a fixed set of masses under an acceleration set
pub struct GravityOde<'a> {
    scratch: System,
    forces: &'a AccelSet,
}

impl<'a> GravityOde<'a> {
    /// `template` supplies the masses; its positions and velocities are
    /// overwritten on every evaluation
    pub fn new(template: &System, forces: &'a AccelSet) -> Self {
        Self {
            scratch: template.clone(),
            forces,
        }
    }

    pub fn dimension(&self) -> usize {
        4 * self.scratch.len()
    }

    /// Returns `[v, a]` for state `y` at time `t`
    pub fn derivatives(&mut self, t: f64, y: &StateVector) -> Result<DVector<f64>, SimError> {
        y.unpack_into(&mut self.scratch)?;
        self.scratch.t = t;

        let n = self.scratch.len();
        let mut accel = vec![NVec2::zeros(); n];
        self.forces.accumulate_accels(t, &self.scratch, &mut accel);

        let mut dydt = DVector::zeros(4 * n);
        dydt.rows_mut(0, 2 * n).copy_from(&y.y.rows(2 * n, 2 * n));
        for (i, a) in accel.iter().enumerate() {
            dydt[2 * n + 2 * i] = a.x;
            dydt[2 * n + 2 * i + 1] = a.y;
        }
        Ok(dydt)
    }
}

/// One classical RK4 step of size `h` from (`t`, `y`)
pub fn rk4_step(ode: &mut GravityOde<'_>, t: f64, y: &StateVector, h: f64) -> Result<StateVector, SimError> {
    let half = 0.5 * h;
    let stage = |k: &DVector<f64>, scale: f64| StateVector {
        y: &y.y + k * scale,
        n: y.n,
    };

    let k1 = ode.derivatives(t, y)?;
    let k2 = ode.derivatives(t + half, &stage(&k1, half))?;
    let k3 = ode.derivatives(t + half, &stage(&k2, half))?;
    let k4 = ode.derivatives(t + h, &stage(&k3, h))?;

    let incr = (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0);
    Ok(StateVector { y: &y.y + incr, n: y.n })
}
