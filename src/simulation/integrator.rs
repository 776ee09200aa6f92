//! Adaptive-solver integration driver
//!
//! `simulate_trajectory` is the single operation the core exposes: validate
//! the run parameters, derive the angular momentum, build the uniform output
//! grid, hand the motion model to the selected adaptive solver, and collect
//! the polar samples. Each call is a stateless transaction; a failed solve
//! returns an error and no partial trajectory.

use ivp::prelude::*;

use crate::simulation::error::SimulationError;
use crate::simulation::model::CentralForceModel;
use crate::simulation::params::ParticleConfig;
use crate::simulation::states::{InitialState, Trajectory};

/// `n` evenly spaced values from `start` to `end` inclusive.
/// For `n >= 2` the endpoint is pinned exactly to `end`; `n = 1` yields
/// just `start` and `n = 0` an empty grid.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    let mut ts: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    ts[n - 1] = end;
    ts
}

/// Integrate the motion equations from `t = 0` to `t = t_end` with initial
/// state `(r0, drdt0, theta0)`, sampling at `config.samples` uniform times.
pub fn simulate_trajectory(
    config: &ParticleConfig,
    initial: &InitialState,
    t_end: f64,
) -> Result<Trajectory, SimulationError> {
    // Precondition checks, all before the solver is invoked
    if initial.r0 <= 0.0 {
        return Err(SimulationError::NonPositiveRadius(initial.r0));
    }
    if t_end <= 0.0 {
        return Err(SimulationError::NonPositiveHorizon(t_end));
    }
    if config.samples < 2 {
        return Err(SimulationError::SampleCountTooSmall(config.samples));
    }
    if config.mass <= 0.0 {
        return Err(SimulationError::NonPositiveMass {
            name: "particle",
            value: config.mass,
        });
    }
    if config.center_mass <= 0.0 {
        return Err(SimulationError::NonPositiveMass {
            name: "attracting-center",
            value: config.center_mass,
        });
    }

    // Bind h = r0^2 * dthetadt0 into the model for this run
    let model = CentralForceModel::new(config, initial);
    let y0 = initial.state_vector();
    let grid = linspace(0.0, t_end, config.samples);

    let sol = Ivp::first_order(&model, 0.0, t_end, y0.as_slice())
        .method(config.solver.to_ivp())
        .rtol(config.rtol)
        .atol(config.atol)
        .t_eval(grid.clone())
        .solve()
        .map_err(|e| SimulationError::SolverFailure {
            method: config.solver,
            detail: e.to_string(),
        })?;

    let mut traj = Trajectory::with_capacity(config.samples);
    for (i, (_t, y)) in sol.iter().enumerate() {
        let (r, drdt, theta) = (y[0], y[1], y[2]);
        if !(r.is_finite() && drdt.is_finite() && theta.is_finite()) {
            return Err(SimulationError::NonFiniteState {
                method: config.solver,
                t: grid[i],
            });
        }
        traj.push(grid[i], r, drdt, theta);
    }

    // The solver must have reached every requested sample time
    if traj.len() != config.samples {
        return Err(SimulationError::SolverFailure {
            method: config.solver,
            detail: format!(
                "solver returned {} of {} requested samples",
                traj.len(),
                config.samples
            ),
        });
    }

    Ok(traj)
}
