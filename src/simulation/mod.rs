pub mod states;
pub mod params;
pub mod model;
pub mod solver;
pub mod error;
pub mod integrator;
pub mod scenario;
