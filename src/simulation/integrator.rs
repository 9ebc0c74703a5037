//! Fixed-step time integrators for the N-body system
//!
//! Provides the velocity-Verlet (kick-drift-kick leapfrog) step, an RK4 step
//! over the packed state vector, and the `run` driver that records a
//! `Trajectory`.

use log::{debug, info, warn};

use super::engine::{Engine, IntegratorKind};
use super::forces::{AccelSet, G_SI};
use super::ode::{rk4_step, GravityOde, StateVector};
use super::params::Parameters;
use super::states::{NVec2, System};
use super::trajectory::{Trajectory, TrajectoryRecorder};
use crate::error::SimError;

/// Advance the system by one step using velocity-Verlet
///
/// `accel` must hold the accelerations at the current positions on entry
/// (seed it once with [`AccelSet::accumulate_accels`] before the first
/// step). On return it holds the accelerations at the new positions, ready
/// for the next step, so each step costs a single force evaluation.
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, accel: &mut [NVec2], params: &Parameters) {
    let dt = params.dt; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2, half update for verlet

    // On entry accel[i] holds a_n for body i, computed from the positions
    // x_n at the current time t = sys.t (by the seed call or the last step)

    // For each body and its corresponding acceleration a_n:
    // v_n+1/2 = v_n + (1/2 * dt) * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += half_dt * *a;
    }

    // Now that velocities are at the half-step, advance positions by a full step
    // x_n+1 = x_n + dt v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;

    // Recompute accelerations at the new time and positions x_n+1,
    // overwriting a_n in place: accel[i] now holds a_n+1
    forces.accumulate_accels(sys.t, &*sys, accel);

    // Finish the velocity update: v_n+1 = v_n+1/2 + (1/2 * dt) * a_n+1
    // accel is left holding a_n+1, which is a_n for the next step
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += half_dt * *a;
    }
}

/// Advance the system by one RK4 step of size `params.dt`
pub fn rk4_integrator(sys: &mut System, ode: &mut GravityOde<'_>, params: &Parameters) -> Result<(), SimError> {
    // Flatten x and v into y = [positions, velocities]
    let y = StateVector::pack(sys);

    // y_n+1 = y_n + dt/6 (k1 + 2 k2 + 2 k3 + k4)
    let next = rk4_step(ode, sys.t, &y, params.dt)?;

    // Write y_n+1 back into the bodies and advance the clock
    next.unpack_into(sys)?;
    sys.t += params.dt;
    Ok(())
}

/// Integrate `system` for `floor(t_end / dt)` steps and record every state
///
/// The returned trajectory holds `total_steps + 1` snapshots; snapshot 0 is
/// `system` exactly as passed in. Time parameters and the trajectory size
/// are checked before any stepping.
pub fn run(mut system: System, forces: &AccelSet, engine: &Engine, params: &Parameters) -> Result<Trajectory, SimError> {
    // floor(t_end / dt); errors on bad or oversized time parameters
    let total_steps = params.total_steps()?;
    let n = system.len();

    // One snapshot per step plus the initial state, allocated up front
    let snapshots = total_steps
        .checked_add(1)
        .ok_or(SimError::TooManySteps { t_end: params.t_end, dt: params.dt })?;
    let mut recorder = TrajectoryRecorder::with_capacity(system.masses(), snapshots)?;

    info!(
        "integrating {} bodies with {:?}: {} steps of {} s (parallel gravity: {})",
        n, engine.integrator, total_steps, params.dt, engine.parallel
    );

    // Snapshot 0: the initial state, before any integration
    recorder.record(&system)?;

    let report_every = (total_steps / 10).max(1);

    match engine.integrator {
        IntegratorKind::Verlet => {
            // Seed a_0 from the initial positions; every step after this
            // reuses the buffer and evaluates forces once
            let mut accel = vec![NVec2::zeros(); n];
            forces.accumulate_accels(system.t, &system, &mut accel);

            for step in 1..=total_steps {
                verlet_integrator(&mut system, forces, &mut accel, params);
                recorder.record(&system)?;
                if step % report_every == 0 {
                    debug!("step {step}/{total_steps}, t = {:.6e} s", system.t);
                }
            }
        }
        IntegratorKind::Rk4 => {
            let mut ode = GravityOde::new(&system, forces);

            for step in 1..=total_steps {
                rk4_integrator(&mut system, &mut ode, params)?;
                recorder.record(&system)?;
                if step % report_every == 0 {
                    debug!("step {step}/{total_steps}, t = {:.6e} s", system.t);
                }
            }
        }
    }

    if !system.is_finite() {
        warn!("final state is not finite; check for coincident bodies in the initial conditions");
    }

    Ok(recorder.finish())
}

/// Velocity-Verlet integration of raw initial conditions under SI gravity
///
/// Fails before stepping when the arrays disagree on N, a mass is not
/// positive, `dt <= 0`, or `total_time < dt`.
pub fn integrate(
    initial_positions: &[NVec2],
    initial_velocities: &[NVec2],
    masses: &[f64],
    dt: f64,
    total_time: f64,
) -> Result<Trajectory, SimError> {
    let params = Parameters { dt, t_end: total_time, g: G_SI };
    params.validate()?;

    let system = System::from_arrays(initial_positions, initial_velocities, masses)?;
    let forces = AccelSet::gravity(params.g, false);

    run(system, &forces, &Engine::default(), &params)
}
