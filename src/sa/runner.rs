//! Multi-phase annealing schedule.
//!
//! # Algorithm
//!
//! 1. Run phase `k` at temperature `T_k` from the incoming tour
//! 2. Record the phase's best score; decay `T_{k+1} = alpha * T_k`
//! 3. Seed phase `k + 1` from phase `k`'s best (not its current state)
//!
//! The global best is the last phase's best. Since every phase starts from
//! the previous best and its own best never regresses, the score
//! trajectory is non-increasing.

use super::config::{decay, AnnealConfig};
use super::phase::AnnealPhase;
use super::types::{ScheduleResult, ScoredTour};
use crate::error::{AnnealError, Result};
use crate::geometry::Coordinates;
use crate::operators::{Objective, Transition};
use crate::tour::check_permutation;
use rand::Rng;
use tracing::{debug, info};
use u_numflow::random::create_rng;

/// Runs `n_phases` phases of `n_steps` trials, starting at temperature
/// `t0` and multiplying it by `alpha` after each phase.
///
/// # Errors
/// `Configuration` if `t0 <= 0`, `alpha` is outside (0, 1), `n_steps` or
/// `n_phases` is zero, the seed is not a permutation of
/// `0..coords.len()`, or `transition` is undefined for the tour length.
#[allow(clippy::too_many_arguments)]
pub fn run_schedule<R: Rng>(
    seed: &[usize],
    coords: &Coordinates,
    transition: Transition,
    objective: Objective,
    t0: f64,
    alpha: f64,
    n_steps: usize,
    n_phases: usize,
    rng: &mut R,
) -> Result<ScheduleResult> {
    let config = AnnealConfig {
        initial_temperature: t0,
        alpha,
        steps_per_phase: n_steps,
        phases: n_phases,
        seed: None,
        check_invariants: false,
    };
    anneal(seed, coords, transition, objective, &config, rng)
}

fn anneal<R: Rng>(
    seed: &[usize],
    coords: &Coordinates,
    transition: Transition,
    objective: Objective,
    config: &AnnealConfig,
    rng: &mut R,
) -> Result<ScheduleResult> {
    config.validate()?;
    check_permutation(seed, coords.len())?;
    transition.validate(seed.len())?;

    info!(
        event = "schedule_start",
        points = seed.len(),
        phases = config.phases,
        steps_per_phase = config.steps_per_phase,
        initial_temperature = config.initial_temperature,
        alpha = config.alpha,
    );

    let mut best: Option<ScoredTour> = None;
    let mut temperature = config.initial_temperature;
    let mut score_trajectory = Vec::with_capacity(config.phases);
    let mut temperatures = Vec::with_capacity(config.phases);
    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    for phase_index in 0..config.phases {
        let incoming = best.as_ref().map_or(seed, |b| b.tour.as_slice());
        let result = AnnealPhase::new(incoming, coords, transition, objective, temperature)?
            .with_invariant_checks(config.check_invariants)
            .run(config.steps_per_phase, rng)?;

        debug!(
            event = "phase_end",
            phase_index,
            temperature,
            best_score = result.best.score,
            current_score = result.current.score,
            accepted = result.accepted_moves,
            improving = result.improving_moves,
        );

        temperatures.push(temperature);
        temperature = decay(temperature, config.alpha);
        score_trajectory.push(result.best.score);
        iterations += result.iterations;
        accepted_moves += result.accepted_moves;
        improving_moves += result.improving_moves;
        best = Some(result.best);
    }

    let best = best.ok_or_else(|| AnnealError::config("phases must be at least 1"))?;

    info!(
        event = "schedule_end",
        best_score = best.score,
        iterations,
        accepted = accepted_moves,
        final_temperature = temperature,
    );

    Ok(ScheduleResult {
        best,
        score_trajectory,
        temperatures,
        final_temperature: temperature,
        iterations,
        accepted_moves,
        improving_moves,
    })
}

/// Executes annealing schedules with a generator built from the config.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the schedule described by `config`.
    ///
    /// The generator is seeded from `config.seed`, or from a random seed
    /// when none is set. Candidates are checked against the seed's ids
    /// when `config.check_invariants` is on.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_anneal::{AnnealConfig, AnnealRunner, Coordinates, Objective, Transition};
    ///
    /// let coords = Coordinates::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    /// let config = AnnealConfig::default()
    ///     .with_initial_temperature(1.0)
    ///     .with_alpha(0.9)
    ///     .with_steps_per_phase(50)
    ///     .with_phases(20)
    ///     .with_seed(42);
    ///
    /// let result = AnnealRunner::run(
    ///     &[0, 2, 1, 3],
    ///     &coords,
    ///     Transition::Swap,
    ///     Objective::ClosedTourLength,
    ///     &config,
    /// )
    /// .unwrap();
    /// assert!((result.best.score - 2.0).abs() < 1e-12);
    /// assert_eq!(result.score_trajectory.len(), 20);
    /// ```
    pub fn run(
        seed: &[usize],
        coords: &Coordinates,
        transition: Transition,
        objective: Objective,
        config: &AnnealConfig,
    ) -> Result<ScheduleResult> {
        let mut rng = match config.seed {
            Some(s) => create_rng(s),
            None => create_rng(rand::random()),
        };
        anneal(seed, coords, transition, objective, config, &mut rng)
    }
}
