//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParticleSectionConfig`] – particle/center masses, force law, solver
//! - [`InitialConfig`]         – polar initial conditions at t = 0
//! - [`RunConfig`]             – the integration horizon
//! - [`ScenarioConfig`]        – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! particle:
//!   mass: 1.0               # test particle mass
//!   center_mass: 1.0        # mass of the fixed attracting center
//!   exponent: -2.0          # force power law, -2 -> Newtonian gravity
//!   samples: 1000           # number of output time samples
//!   solver: "rk45"          # rk45 | rk23 | dop853 | radau | bdf | lsoda
//!   rtol: 1.0e-6            # relative error tolerance (optional)
//!   atol: 1.0e-9            # absolute error tolerance (optional)
//!
//! initial:
//!   r0: 1.0                 # initial radius, must be > 0
//!   drdt0: 0.0              # initial radial velocity
//!   theta0: 0.0             # initial angle
//!   dthetadt0: 1.0          # initial angular velocity
//!
//! run:
//!   t_end: 6.2831853        # integration horizon T
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

use crate::simulation::solver::SolverMethod;

/// Particle, force-law, and solver settings for one scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleSectionConfig {
    pub mass: f64, // test particle mass
    pub center_mass: f64, // attracting-center mass
    pub exponent: f64, // force power-law exponent
    pub samples: usize, // number of output time samples
    #[serde(default)]
    pub solver: SolverMethod, // adaptive solver tag, defaults to rk45
    pub rtol: Option<f64>, // relative tolerance, solver default if absent
    pub atol: Option<f64>, // absolute tolerance, solver default if absent
}

/// Initial polar-coordinate state of the particle
#[derive(Deserialize, Debug, Clone)]
pub struct InitialConfig {
    pub r0: f64, // initial radius
    pub drdt0: f64, // initial radial velocity
    pub theta0: f64, // initial angle
    pub dthetadt0: f64, // initial angular velocity
}

/// Integration-run settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub t_end: f64, // integration horizon T
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub particle: ParticleSectionConfig, // masses, force law, solver
    pub initial: InitialConfig, // initial conditions
    pub run: RunConfig, // integration horizon
}
