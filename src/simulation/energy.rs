//! Mechanical energy diagnostics
//!
//! Used to check how well an integrator conserves energy over a run.

use crate::simulation::states::{NVec2, System};
use crate::simulation::trajectory::Trajectory;

/// Sum of 1/2 m |v|^2 over all bodies
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Sum over unordered pairs of -G m_i m_j / |x_i - x_j|
pub fn potential_energy(sys: &System, g: f64) -> f64 {
    pair_potential(g, &sys.positions(), &sys.masses())
}

pub fn total_energy(sys: &System, g: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, g)
}

/// Total energy of recorded step `step`, or `None` past the end
pub fn snapshot_energy(traj: &Trajectory, step: usize, g: f64) -> Option<f64> {
    let states = traj.step(step)?;
    let masses = traj.masses();

    let kinetic: f64 = states
        .iter()
        .zip(masses)
        .map(|(s, m)| 0.5 * m * s.velocity.norm_squared())
        .sum();
    let positions: Vec<NVec2> = states.iter().map(|s| s.position).collect();

    Some(kinetic + pair_potential(g, &positions, masses))
}

/// Largest |E_k - E_0| / |E_0| over every recorded step
///
/// `None` for an empty trajectory, or when E_0 is zero or non-finite and a
/// relative drift is undefined (e.g. a single body at rest).
pub fn max_relative_drift(traj: &Trajectory, g: f64) -> Option<f64> {
    let e0 = snapshot_energy(traj, 0, g)?;
    if e0 == 0.0 || !e0.is_finite() {
        return None;
    }

    let mut worst = 0.0_f64;
    for k in 1..traj.len() {
        let e = snapshot_energy(traj, k, g)?;
        let drift = ((e - e0) / e0).abs();
        // NaN from a blown-up step must not be swallowed by `max`
        if drift.is_nan() {
            return Some(f64::NAN);
        }
        worst = worst.max(drift);
    }
    Some(worst)
}

fn pair_potential(g: f64, positions: &[NVec2], masses: &[f64]) -> f64 {
    let mut u = 0.0;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let r = (positions[i] - positions[j]).norm();
            u -= g * masses[i] * masses[j] / r;
        }
    }
    u
}
