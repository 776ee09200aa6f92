//! Adaptive ODE solver selection
//!
//! `SolverMethod` is the closed set of supported integration algorithms,
//! mapped one-to-one onto the `ivp` crate's methods. The external contract
//! is identical across all six; they differ in order and stiffness handling.

use std::fmt;

use ivp::prelude::Method;
use serde::Deserialize;

/// Which adaptive solver integrates the motion equations
/// `solver: "rk45"` through `solver: "lsoda"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverMethod {
    #[serde(rename = "rk45")] // explicit Runge-Kutta 5(4), the default
    Rk45,

    #[serde(rename = "rk23")] // explicit Runge-Kutta 3(2), cheaper per step
    Rk23,

    #[serde(rename = "dop853")] // explicit Runge-Kutta of order 8
    Dop853,

    #[serde(rename = "radau")] // implicit Runge-Kutta, for stiff problems
    Radau,

    #[serde(rename = "bdf")] // backward differentiation formulas, stiff
    Bdf,

    #[serde(rename = "lsoda")] // multistep with automatic stiffness switching
    Lsoda,
}

impl SolverMethod {
    /// All supported methods, in selector order.
    pub const ALL: [SolverMethod; 6] = [
        SolverMethod::Rk45,
        SolverMethod::Rk23,
        SolverMethod::Dop853,
        SolverMethod::Radau,
        SolverMethod::Bdf,
        SolverMethod::Lsoda,
    ];

    /// Map the tag to the underlying solver implementation.
    pub fn to_ivp(self) -> Method {
        match self {
            // ivp names the explicit 5(4) pair after Dormand-Prince
            SolverMethod::Rk45 => Method::DOPRI5,
            SolverMethod::Rk23 => Method::RK23,
            SolverMethod::Dop853 => Method::DOP853,
            SolverMethod::Radau => Method::RADAU,
            SolverMethod::Bdf => Method::BDF,
            SolverMethod::Lsoda => Method::LSODA,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolverMethod::Rk45 => "rk45",
            SolverMethod::Rk23 => "rk23",
            SolverMethod::Dop853 => "dop853",
            SolverMethod::Radau => "radau",
            SolverMethod::Bdf => "bdf",
            SolverMethod::Lsoda => "lsoda",
        }
    }
}

impl Default for SolverMethod {
    fn default() -> Self {
        SolverMethod::Rk45
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
