//! Simulated annealing for tour problems.
//!
//! Searches permutations of `N` labelled points for a short closed tour:
//!
//! - **Operators**: [`Transition`] proposes neighbors (pairwise swap,
//!   segment reversal); [`Objective`] scores tours (closed tour length).
//! - **Phase**: [`AnnealPhase`] / [`run_phase`] run a fixed number of
//!   Metropolis trials at one temperature, tracking current and best.
//! - **Schedule**: [`run_schedule`] / [`AnnealRunner`] chain phases with
//!   geometric cooling, seeding each phase from the previous best.
//!
//! Every randomized call takes an explicit `&mut R: Rng`, so a fixed seed
//! replays the same trajectory.
//!
//! # Example
//!
//! ```
//! use u_anneal::{run_schedule, Coordinates, Objective, Transition};
//! use u_numflow::random::create_rng;
//!
//! let coords = Coordinates::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let mut rng = create_rng(42);
//!
//! // T0 = 1.0, alpha = 0.9, 50 trials per phase, 10 phases
//! let result = run_schedule(
//!     &[0, 2, 1, 3],
//!     &coords,
//!     Transition::Swap,
//!     Objective::ClosedTourLength,
//!     1.0,
//!     0.9,
//!     50,
//!     10,
//!     &mut rng,
//! )
//! .unwrap();
//! assert_eq!(result.score_trajectory.len(), 10);
//! ```

pub mod error;
pub mod geometry;
pub mod operators;
pub mod sa;
pub mod tour;

pub use error::{AnnealError, Result};
pub use geometry::{Coordinates, Point};
pub use operators::{
    closed_tour_length, segment_reverse, swap, Objective, Transition, DEFAULT_MAX_FRACTION,
};
pub use sa::{
    metropolis_accept, run_phase, run_schedule, AnnealConfig, AnnealPhase, AnnealRunner,
    PhaseResult, PhaseState, ScheduleResult, ScoredTour,
};
