//! Error taxonomy for the simulation core
//!
//! Two failure categories, both fatal to the call and propagated
//! synchronously with no partial trajectory:
//! - parameter rejection, raised before the solver is ever invoked
//! - integration failure, raised when the solver breaks down or produces
//!   non-finite state (typically the radial coordinate approaching the
//!   force-law singularity at r = 0)

use thiserror::Error;

use crate::simulation::solver::SolverMethod;

#[derive(Debug, Clone, Error)]
pub enum SimulationError {
    #[error("initial radius must be strictly positive (got {0})")]
    NonPositiveRadius(f64),

    #[error("integration horizon must be positive (got {0})")]
    NonPositiveHorizon(f64),

    #[error("at least two output samples are required (got {0})")]
    SampleCountTooSmall(usize),

    #[error("{name} mass must be positive (got {value})")]
    NonPositiveMass { name: &'static str, value: f64 },

    #[error("{method} solver failed: {detail}")]
    SolverFailure { method: SolverMethod, detail: String },

    #[error("{method} solver produced non-finite state near t = {t}")]
    NonFiniteState { method: SolverMethod, t: f64 },
}

impl SimulationError {
    /// True for errors raised by precondition checks, before any solver work.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            SimulationError::NonPositiveRadius(_)
                | SimulationError::NonPositiveHorizon(_)
                | SimulationError::SampleCountTooSmall(_)
                | SimulationError::NonPositiveMass { .. }
        )
    }

    /// True for errors raised by the numerical integration itself.
    pub fn is_integration_error(&self) -> bool {
        !self.is_parameter_error()
    }
}
