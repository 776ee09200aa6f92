//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - run parameters (`ParticleConfig`)
//! - initial conditions (`InitialState`)
//! - integration horizon
//!
//! The binary loads a YAML file into a `ScenarioConfig` and runs the
//! trajectory from the resulting `Scenario`.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::error::SimulationError;
use crate::simulation::integrator::simulate_trajectory;
use crate::simulation::params::ParticleConfig;
use crate::simulation::states::{InitialState, Trajectory};

/// Default solver tolerances when the scenario does not set them.
const DEFAULT_RTOL: f64 = 1.0e-6;
const DEFAULT_ATOL: f64 = 1.0e-9;

/// Fully-initialized runtime scenario: everything one integration run needs.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub particle: ParticleConfig,
    pub initial: InitialState,
    pub t_end: f64, // integration horizon
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Runtime ParticleConfig from the particle section
        let p_cfg = cfg.particle;
        let particle = ParticleConfig {
            mass: p_cfg.mass,
            center_mass: p_cfg.center_mass,
            exponent: p_cfg.exponent,
            samples: p_cfg.samples,
            solver: p_cfg.solver,
            atol: p_cfg.atol.unwrap_or(DEFAULT_ATOL),
            rtol: p_cfg.rtol.unwrap_or(DEFAULT_RTOL),
        };

        // Initial conditions at t = 0
        let i_cfg = cfg.initial;
        let initial = InitialState {
            r0: i_cfg.r0,
            drdt0: i_cfg.drdt0,
            theta0: i_cfg.theta0,
            dthetadt0: i_cfg.dthetadt0,
        };

        Self {
            particle,
            initial,
            t_end: cfg.run.t_end,
        }
    }

    /// Run one full integration of this scenario.
    pub fn run(&self) -> Result<Trajectory, SimulationError> {
        simulate_trajectory(&self.particle, &self.initial, self.t_end)
    }
}
