use std::f64::consts::PI;
use std::time::Instant;

use crate::simulation::integrator::simulate_trajectory;
use crate::simulation::params::ParticleConfig;
use crate::simulation::solver::SolverMethod;
use crate::simulation::states::InitialState;

/// A moderately eccentric Newtonian orbit used for all timing runs
fn bench_initial() -> InitialState {
    InitialState {
        r0: 1.0,
        drdt0: 0.3,
        theta0: 0.0,
        dthetadt0: 1.1,
    }
}

fn bench_config(solver: SolverMethod, samples: usize) -> ParticleConfig {
    ParticleConfig {
        mass: 1.0,
        center_mass: 1.0,
        exponent: -2.0,
        samples,
        solver,
        atol: 1.0e-9,
        rtol: 1.0e-6,
    }
}

/// Time one full trajectory solve per solver method.
pub fn bench_solvers() {
    let initial = bench_initial();
    let t_end = 10.0 * PI;

    for method in SolverMethod::ALL {
        let config = bench_config(method, 2000);

        // Warm up
        let _ = simulate_trajectory(&config, &initial, t_end);

        let t0 = Instant::now();
        let result = simulate_trajectory(&config, &initial, t_end);
        let dt = t0.elapsed().as_secs_f64();

        match result {
            Ok(traj) => println!(
                "method = {method:>6}, samples = {:5}, solve = {dt:9.6} s",
                traj.len()
            ),
            Err(e) => println!("method = {method:>6}, failed: {e}"),
        }
    }
}

/// Time the default solver across increasing output sample counts.
/// Output size should dominate; internal stepping is tolerance-driven.
pub fn bench_sample_scaling() {
    let initial = bench_initial();
    let t_end = 10.0 * PI;
    let ns = [100, 1_000, 10_000, 100_000];

    for n in ns {
        let config = bench_config(SolverMethod::Rk45, n);

        // Warm up
        let _ = simulate_trajectory(&config, &initial, t_end);

        let t0 = Instant::now();
        let result = simulate_trajectory(&config, &initial, t_end);
        let dt = t0.elapsed().as_secs_f64();

        match result {
            Ok(_) => println!("samples = {n:7}, solve = {dt:9.6} s"),
            Err(e) => println!("samples = {n:7}, failed: {e}"),
        }
    }
}
