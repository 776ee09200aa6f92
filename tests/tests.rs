use std::f64::consts::PI;

use cfsim::simulation::error::SimulationError;
use cfsim::simulation::integrator::{linspace, simulate_trajectory};
use cfsim::simulation::model::CentralForceModel;
use cfsim::simulation::params::ParticleConfig;
use cfsim::simulation::solver::SolverMethod;
use cfsim::simulation::states::{InitialState, StateVec};

/// Newtonian run parameters with a selectable solver
pub fn newtonian_config(solver: SolverMethod, samples: usize) -> ParticleConfig {
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

/// Unit circular orbit: r = 1, one revolution per 2*pi
pub fn circular_initial() -> InitialState {
    InitialState {
        r0: 1.0,
        drdt0: 0.0,
        theta0: 0.0,
        dthetadt0: 1.0,
    }
}

/// Bound non-circular orbit, h = 1.1
pub fn ellipse_initial() -> InitialState {
    InitialState {
        r0: 1.0,
        drdt0: 0.3,
        theta0: 0.0,
        dthetadt0: 1.1,
    }
}

// ==================================================================================
// Model tests
// ==================================================================================

#[test]
fn force_law_matches_power_law() {
    let config = newtonian_config(SolverMethod::Rk45, 2);
    let model = CentralForceModel::new(&config, &circular_initial());

    assert!((model.central_force(1.0) + 1.0).abs() < 1e-15);
    // inverse-square: quartering at double the radius
    assert!((model.central_force(2.0) + 0.25).abs() < 1e-15);
}

#[test]
fn circular_condition_has_zero_radial_acceleration() {
    let config = newtonian_config(SolverMethod::Rk45, 2);
    let initial = circular_initial();
    let model = CentralForceModel::new(&config, &initial);

    // centrifugal term h^2/r^3 exactly balances the central force at r = 1
    let dydt = model.state_derivative(0.0, &initial.state_vector());
    assert!(dydt[0].abs() < 1e-15, "dr/dt should be 0: {}", dydt[0]);
    assert!(dydt[1].abs() < 1e-15, "radial acceleration not balanced: {}", dydt[1]);
    assert!((dydt[2] - 1.0).abs() < 1e-15, "dtheta/dt should be 1: {}", dydt[2]);
}

#[test]
fn angular_momentum_derived_from_initial_state() {
    let initial = ellipse_initial();
    assert!((initial.angular_momentum() - 1.1).abs() < 1e-15);

    let config = newtonian_config(SolverMethod::Rk45, 2);
    let model = CentralForceModel::new(&config, &initial);
    assert!((model.angular_momentum() - 1.1).abs() < 1e-15);
}

// ==================================================================================
// Time grid tests
// ==================================================================================

#[test]
fn linspace_endpoints_and_spacing() {
    let ts = linspace(0.0, 2.0 * PI, 101);

    assert_eq!(ts.len(), 101);
    assert_eq!(ts[0], 0.0);
    assert_eq!(ts[100], 2.0 * PI);
    for w in ts.windows(2) {
        assert!(w[1] > w[0], "grid not strictly increasing");
    }
}

#[test]
fn linspace_degenerate_counts_do_not_panic() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
}

#[test]
fn trajectory_time_grid_is_exact() {
    let config = newtonian_config(SolverMethod::Rk45, 501);
    let traj = simulate_trajectory(&config, &circular_initial(), 2.0 * PI).unwrap();

    assert_eq!(traj.len(), 501);
    assert_eq!(traj.t[0], 0.0);
    assert_eq!(traj.t[500], 2.0 * PI);
    for w in traj.t.windows(2) {
        assert!(w[1] > w[0], "sample times not strictly increasing");
    }
}

// ==================================================================================
// Trajectory physics tests
// ==================================================================================

#[test]
fn circular_orbit_stays_circular() {
    let config = newtonian_config(SolverMethod::Rk45, 1001);
    let traj = simulate_trajectory(&config, &circular_initial(), 2.0 * PI).unwrap();

    for (i, r) in traj.r.iter().enumerate() {
        assert!(
            (r - 1.0).abs() < 1e-4,
            "radius drifted at sample {}: r = {}",
            i,
            r
        );
    }
    // one full revolution
    let theta_end = traj.theta[traj.len() - 1];
    assert!(
        (theta_end - 2.0 * PI).abs() < 1e-4,
        "expected theta ~ 2*pi, got {}",
        theta_end
    );
}

#[test]
fn angular_momentum_is_conserved() {
    let config = newtonian_config(SolverMethod::Rk45, 601);
    let initial = ellipse_initial();
    let t_end = 3.0;
    let traj = simulate_trajectory(&config, &initial, t_end).unwrap();

    let h = initial.angular_momentum();
    let dt = t_end / 600.0;

    // recompute h_i = r_i^2 * dtheta/dt_i with a central difference
    for i in 1..traj.len() - 1 {
        let dthetadt = (traj.theta[i + 1] - traj.theta[i - 1]) / (2.0 * dt);
        let h_i = traj.r[i] * traj.r[i] * dthetadt;
        assert!(
            (h_i - h).abs() < 1e-3,
            "h not conserved at sample {}: {} vs {}",
            i,
            h_i,
            h
        );
    }
}

#[test]
fn identical_inputs_give_identical_trajectories() {
    let config = newtonian_config(SolverMethod::Rk45, 401);
    let initial = ellipse_initial();

    let a = simulate_trajectory(&config, &initial, 5.0).unwrap();
    let b = simulate_trajectory(&config, &initial, 5.0).unwrap();

    assert_eq!(a.t, b.t);
    assert_eq!(a.r, b.r);
    assert_eq!(a.drdt, b.drdt);
    assert_eq!(a.theta, b.theta);
}

#[test]
fn all_solver_methods_agree_on_circular_orbit() {
    let initial = circular_initial();
    let reference = simulate_trajectory(
        &newtonian_config(SolverMethod::Rk45, 201),
        &initial,
        2.0 * PI,
    )
    .unwrap();

    for method in SolverMethod::ALL {
        let config = newtonian_config(method, 201);
        let traj = simulate_trajectory(&config, &initial, 2.0 * PI)
            .unwrap_or_else(|e| panic!("{method} failed on circular orbit: {e}"));

        for i in 0..traj.len() {
            // compare positions in the plane, loose tolerance across methods
            let (xa, ya) = (
                reference.r[i] * reference.theta[i].cos(),
                reference.r[i] * reference.theta[i].sin(),
            );
            let (xb, yb) = (
                traj.r[i] * traj.theta[i].cos(),
                traj.r[i] * traj.theta[i].sin(),
            );
            let dist = ((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt();
            assert!(
                dist < 1e-3,
                "{method} diverged from rk45 at sample {}: {}",
                i,
                dist
            );
        }
    }
}

// ==================================================================================
// Validation and failure tests
// ==================================================================================

#[test]
fn zero_radius_is_rejected() {
    let config = newtonian_config(SolverMethod::Rk45, 100);
    let mut initial = circular_initial();
    initial.r0 = 0.0;

    let err = simulate_trajectory(&config, &initial, 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::NonPositiveRadius(_)));
    assert!(err.is_parameter_error());
}

#[test]
fn zero_horizon_is_rejected() {
    let config = newtonian_config(SolverMethod::Rk45, 100);

    let err = simulate_trajectory(&config, &circular_initial(), 0.0).unwrap_err();
    assert!(matches!(err, SimulationError::NonPositiveHorizon(_)));
    assert!(err.is_parameter_error());
}

#[test]
fn single_sample_is_rejected() {
    let config = newtonian_config(SolverMethod::Rk45, 1);

    let err = simulate_trajectory(&config, &circular_initial(), 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::SampleCountTooSmall(1)));
    assert!(err.is_parameter_error());
}

#[test]
fn non_positive_mass_is_rejected() {
    let mut config = newtonian_config(SolverMethod::Rk45, 100);
    config.center_mass = 0.0;

    let err = simulate_trajectory(&config, &circular_initial(), 1.0).unwrap_err();
    assert!(matches!(err, SimulationError::NonPositiveMass { .. }));
    assert!(err.is_parameter_error());
}

#[test]
fn radial_plunge_fails_rather_than_returning_garbage() {
    // zero angular momentum and inward velocity: r reaches the force-law
    // singularity well inside the horizon
    let mut config = newtonian_config(SolverMethod::Rk45, 500);
    config.exponent = -2.5;
    let initial = InitialState {
        r0: 1.0,
        drdt0: -1.0,
        theta0: 0.0,
        dthetadt0: 0.0,
    };

    let err = simulate_trajectory(&config, &initial, 5.0).unwrap_err();
    assert!(err.is_integration_error(), "expected solver breakdown: {err}");
}

// ==================================================================================
// State packing tests
// ==================================================================================

#[test]
fn state_vector_packs_integrated_components() {
    let initial = ellipse_initial();
    let y0 = initial.state_vector();
    assert_eq!(y0, StateVec::new(1.0, 0.3, 0.0));
}
