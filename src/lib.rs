pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{InitialState, StateVec, Trajectory, TrajectorySample};
pub use simulation::params::ParticleConfig;
pub use simulation::model::CentralForceModel;
pub use simulation::solver::SolverMethod;
pub use simulation::integrator::{linspace, simulate_trajectory};
pub use simulation::error::SimulationError;
pub use simulation::scenario::Scenario;

pub use configuration::config::{InitialConfig, ParticleSectionConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_sample_scaling, bench_solvers};
