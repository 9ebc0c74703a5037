//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the term collection the integrators
//! consume, and direct O(N^2) Newtonian gravity (sequential and rayon)

use std::fmt;

use rayon::prelude::*;

use crate::error::SimError;
use crate::simulation::states::{NVec2, System};

/// Gravitational constant in SI units (m^3 kg^-1 s^-2)
pub const G_SI: f64 = 6.67408e-11;

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Set holding only direct Newtonian gravity
    pub fn gravity(g: f64, parallel: bool) -> Self {
        if parallel {
            Self::new().with(ParallelNewtonianGravity { g })
        } else {
            Self::new().with(NewtonianGravity { g })
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    ///
    /// `out` is owned by the caller and must hold one entry per body. Its
    /// previous contents are discarded: it is zeroed, then every term adds
    /// its contribution, so the same buffer can be reused step after step.
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        debug_assert_eq!(out.len(), sys.len(), "acceleration buffer length");

        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccelSet").field("terms", &self.terms.len()).finish()
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct-sum Newtonian gravity, no softening
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        // Every body i sums the pull of every other body j over the full
        // (x, m) list, in index order
        for (i, (a, bi)) in out.iter_mut().zip(&sys.bodies).enumerate() {
            *a += net_gravity(self.g, i, bi.x, sys.bodies.iter().map(|b| (b.x, b.m)));
        }
    }
}

/// Direct-sum Newtonian gravity with the per-body sums spread over rayon
///
/// Each body's sum runs over `j` in the same order as [`NewtonianGravity`],
/// so both produce bit-identical accelerations.
pub struct ParallelNewtonianGravity {
    pub g: f64,
}

impl Acceleration for ParallelNewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        // One rayon task per body; each task only writes its own out[i]
        out.par_iter_mut().enumerate().for_each(|(i, a)| {
            *a += net_gravity(self.g, i, sys.bodies[i].x, sys.bodies.iter().map(|b| (b.x, b.m)));
        });
    }
}

/// Net gravitational acceleration on every body, as a fresh vector
///
/// Pure function of its inputs; `positions` and `masses` must agree on N.
pub fn compute_accelerations(positions: &[NVec2], masses: &[f64], g: f64) -> Result<Vec<NVec2>, SimError> {
    if positions.len() != masses.len() {
        return Err(SimError::LengthMismatch {
            what: "positions",
            expected: masses.len(),
            found: positions.len(),
        });
    }

    let sources = || positions.iter().copied().zip(masses.iter().copied());
    Ok(positions
        .iter()
        .enumerate()
        .map(|(i, &xi)| net_gravity(g, i, xi, sources()))
        .collect())
}

/// a_i = sum over j != i of -G m_j (x_i - x_j) / |x_i - x_j|^3
///
/// `sources` yields (position, mass) for every body in index order,
/// including body `i` itself, which is skipped.
fn net_gravity<I>(g: f64, i: usize, xi: NVec2, sources: I) -> NVec2
where
    I: Iterator<Item = (NVec2, f64)>,
{
    // Running sum of the pulls on body i
    let mut a = NVec2::zeros();

    for (j, (xj, mj)) in sources.enumerate() {
        // A body never pulls on itself
        if j == i {
            continue;
        }

        // d is the displacement vector from j to i
        // Gravity pulls i back toward j, i.e. along -d
        let d = xi - xj;

        // Squared separation distance |d|^2 (no softening)
        let r2 = d.dot(&d);

        // Coincident bodies give 0/0 below; flagged here in debug builds,
        // left to propagate as non-finite values in release
        debug_assert!(r2 > 0.0, "bodies {i} and {j} share a position");

        // |d|^3 = |d|^2 * |d|, computed once and shared by both axes
        let denom = r2 * r2.sqrt();

        // Combine G, the source mass and the distance factor:
        // coef = G * m_j / |d|^3
        let coef = g * mj / denom;

        // Acceleration on body i due to body j:
        // a_i += -G * m_j * d / |d|^3
        a -= d * coef;
    }
    a
}
