use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity, ParallelNewtonianGravity, G_SI};
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a ring-ish system of size `n` around a central mass
/// Deterministic positions, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(Body::new(NVec2::zeros(), NVec2::zeros(), 1.9885e30));

    for i in 1..n {
        let i_f = i as f64;
        let r = 5.0e10 * (1.0 + 0.37 * i_f);
        let phase = i_f * 2.39996;
        let speed = (G_SI * 1.9885e30 / r).sqrt();
        bodies.push(Body::new(
            NVec2::new(r * phase.cos(), r * phase.sin()),
            NVec2::new(-speed * phase.sin(), speed * phase.cos()),
            1.0e24,
        ));
    }

    System { bodies, t: 0.0 }
}

/// Time one direct-sum evaluation, sequential vs rayon
pub fn bench_gravity() {
    let ns = [10, 100, 400, 1600, 3200];

    println!("N,sequential_ms,parallel_ms");
    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        let direct = NewtonianGravity { g: G_SI };
        let parallel = ParallelNewtonianGravity { g: G_SI };

        // Warm up
        direct.acceleration(0.0, &sys, &mut out);
        parallel.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        direct.acceleration(0.0, &sys, &mut out);
        let ms_direct = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        parallel.acceleration(0.0, &sys, &mut out);
        let ms_parallel = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{n},{ms_direct:.6},{ms_parallel:.6}");
    }
}

/// Average cost of one velocity-Verlet step for a range of n
pub fn bench_verlet() {
    let params = Parameters::new(1.0e5, 1.0e7);

    println!("N,verlet_step_ms");
    for n in (10..=1000).step_by(110) {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 100 { 200 } else { 10 };

        let mut sys = make_system(n);
        let forces = AccelSet::gravity(params.g, false);
        let mut accel = vec![NVec2::zeros(); n];
        forces.accumulate_accels(sys.t, &sys, &mut accel);

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys, &forces, &mut accel, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
