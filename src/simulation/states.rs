//! Core state types for the central-force simulation.
//!
//! Defines:
//! - `InitialState` - the particle's polar initial conditions
//! - `StateVec` - the integrated state vector `(r, r', theta)` using nalgebra
//! - `Trajectory` / `TrajectorySample` - the time-sampled solver output
//!
//! Angular velocity is absorbed into the conserved angular momentum, so the
//! integrated state has three components, not four.

use nalgebra::Vector3;

/// Integrated state vector `(r, drdt, theta)`.
pub type StateVec = Vector3<f64>;

/// Initial conditions in polar coordinates at `t = 0`.
#[derive(Debug, Clone, Copy)]
pub struct InitialState {
    pub r0: f64, // initial radius, must be > 0
    pub drdt0: f64, // initial radial velocity
    pub theta0: f64, // initial angle
    pub dthetadt0: f64, // initial angular velocity
}

impl InitialState {
    /// Conserved angular momentum `h = r0^2 * dthetadt0`.
    pub fn angular_momentum(&self) -> f64 {
        self.r0 * self.r0 * self.dthetadt0
    }

    /// Pack the integrated components into a state vector.
    /// `dthetadt0` does not appear directly; it only enters through `h`.
    pub fn state_vector(&self) -> StateVec {
        StateVec::new(self.r0, self.drdt0, self.theta0)
    }
}

/// One trajectory sample in polar coordinates.
#[derive(Debug, Clone, Copy)]
pub struct TrajectorySample {
    pub t: f64, // sample time
    pub r: f64, // radius
    pub drdt: f64, // radial velocity
    pub theta: f64, // angle
}

/// Time-sampled solution of one integration run.
///
/// Stored as parallel sequences over the uniform output grid: `t` is strictly
/// increasing, starts at 0, ends at the integration horizon. Consumers that
/// want Cartesian points apply `(r cos theta, r sin theta)` themselves.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub t: Vec<f64>, // sample times
    pub r: Vec<f64>, // radius per sample
    pub drdt: Vec<f64>, // radial velocity per sample
    pub theta: Vec<f64>, // angle per sample
}

impl Trajectory {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            r: Vec::with_capacity(n),
            drdt: Vec::with_capacity(n),
            theta: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, t: f64, r: f64, drdt: f64, theta: f64) {
        self.t.push(t);
        self.r.push(r);
        self.drdt.push(drdt);
        self.theta.push(theta);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn sample(&self, i: usize) -> TrajectorySample {
        TrajectorySample {
            t: self.t[i],
            r: self.r[i],
            drdt: self.drdt[i],
            theta: self.theta[i],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        (0..self.len()).map(|i| self.sample(i))
    }
}
