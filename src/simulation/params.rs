//! Physical and numerical parameters for one simulation run
//!
//! `ParticleConfig` holds the per-run settings:
//! - particle and attracting-center masses,
//! - power-law force exponent (`-2.0` is Newtonian gravity),
//! - number of output samples and solver method,
//! - error tolerances for the adaptive solver

use crate::simulation::solver::SolverMethod;

#[derive(Debug, Clone)]
pub struct ParticleConfig {
    pub mass: f64, // test particle mass, > 0
    pub center_mass: f64, // mass of the fixed attracting center, > 0
    pub exponent: f64, // force power-law exponent
    pub samples: usize, // number of output time samples, >= 2
    pub solver: SolverMethod, // adaptive solver selection
    pub atol: f64, // absolute error tolerance
    pub rtol: f64, // relative error tolerance
}
