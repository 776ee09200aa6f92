//! Central-force motion model in reduced polar form
//!
//! For a central force, the angular momentum `h = r^2 dtheta/dt` is
//! conserved, which removes the angular velocity from the integrated state
//! and makes `theta` a first-order consequence:
//!
//! - `dr/dt      = r'`
//! - `d(r')/dt   = h^2 / r^3 + F(r) / m`
//! - `dtheta/dt  = h / r^2`
//!
//! The model is pure: the solver evaluates the right-hand side at whatever
//! internal times it chooses and nothing here mutates between calls.

use ivp::prelude::*;

use crate::simulation::params::ParticleConfig;
use crate::simulation::states::{InitialState, StateVec};

/// Power-law central force field with the angular momentum of one run
/// bound in. Built fresh per integration; `h` is fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct CentralForceModel {
    pub mass: f64, // particle mass
    pub center_mass: f64, // attracting-center mass
    pub exponent: f64, // force power-law exponent
    h: f64, // conserved angular momentum of this run
}

impl CentralForceModel {
    /// Bind the run parameters and derive `h = r0^2 * dthetadt0` from the
    /// initial conditions.
    pub fn new(config: &ParticleConfig, initial: &InitialState) -> Self {
        Self {
            mass: config.mass,
            center_mass: config.center_mass,
            exponent: config.exponent,
            h: initial.angular_momentum(),
        }
    }

    /// Radial force magnitude `F(r) = -m * M * r^exponent`.
    ///
    /// Callers guarantee `r > 0` at the start of a run; the force law is
    /// genuinely singular at the origin and the model does not mask that.
    pub fn central_force(&self, r: f64) -> f64 {
        -self.mass * self.center_mass * r.powf(self.exponent)
    }

    /// Angular momentum bound into this run.
    pub fn angular_momentum(&self) -> f64 {
        self.h
    }

    /// Right-hand side over the state `y = (r, drdt, theta)`.
    pub fn state_derivative(&self, _t: f64, y: &StateVec) -> StateVec {
        let r = y[0];
        let drdt = y[1];

        StateVec::new(
            drdt,
            // effective radial acceleration: centrifugal term plus central force
            self.h * self.h / (r * r * r) + self.central_force(r) / self.mass,
            self.h / (r * r),
        )
    }
}

impl FirstOrderSystem for CentralForceModel {
    fn derivative(&self, t: f64, y: &[f64], dydt: &mut [f64]) {
        let d = self.state_derivative(t, &StateVec::new(y[0], y[1], y[2]));
        dydt[0] = d[0];
        dydt[1] = d[1];
        dydt[2] = d[2];
    }
}
