//! Simulated Annealing (SA) over tours.
//!
//! A schedule of constant-temperature phases. Each phase runs a fixed
//! number of Metropolis trials; between phases the temperature decays
//! geometrically and the next phase restarts from the previous best.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod phase;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use phase::{metropolis_accept, run_phase, AnnealPhase, PhaseState};
pub use runner::{run_schedule, AnnealRunner};
pub use types::{PhaseResult, ScheduleResult, ScoredTour};
