//! A single constant-temperature annealing phase.
//!
//! # Algorithm
//!
//! For each trial:
//! 1. Propose a candidate from the current tour
//! 2. Score it; `delta = score - new_score`
//! 3. Strict improvement: accept, and update the phase best if it beats it
//! 4. Otherwise accept with probability `exp(delta / T)` (Metropolis)
//!
//! The best is only updated after an accepted strict improvement, so it
//! never regresses within a phase.

use super::config::{validate_steps, validate_temperature};
use super::types::{PhaseResult, ScoredTour};
use crate::error::{AnnealError, Result};
use crate::geometry::Coordinates;
use crate::operators::{Objective, Transition};
use crate::tour::{check_permutation, check_same_ids};
use rand::Rng;

/// Lifecycle of an [`AnnealPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseState {
    /// Seed scored, no trial run yet.
    Initialized,
    /// At least one trial has run.
    Running,
    /// No further trials are accepted.
    Completed,
}

/// Metropolis acceptance test for a non-improving move.
///
/// `delta` is `current - candidate` (so `<= 0` here). Draws one uniform
/// value in `[0, 1)` and accepts iff it is strictly below `exp(delta / T)`.
/// A zero delta always accepts.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    let probability = (delta / temperature).exp();
    rng.random::<f64>() < probability
}

/// A phase of trials at a fixed temperature, driven one trial at a time.
///
/// # Examples
///
/// ```
/// use u_anneal::{AnnealPhase, Coordinates, Objective, PhaseState, Transition};
/// use u_numflow::random::create_rng;
///
/// let coords = Coordinates::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let mut phase = AnnealPhase::new(
///     &[0, 2, 1, 3],
///     &coords,
///     Transition::Swap,
///     Objective::ClosedTourLength,
///     1.0,
/// )
/// .unwrap();
/// assert_eq!(phase.state(), PhaseState::Initialized);
///
/// let mut rng = create_rng(42);
/// phase.step(&mut rng).unwrap();
/// assert_eq!(phase.state(), PhaseState::Running);
///
/// let result = phase.finish();
/// assert!(result.best.score <= 6.0f64.sqrt());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealPhase<'a> {
    coords: &'a Coordinates,
    transition: Transition,
    objective: Objective,
    temperature: f64,
    seed_ids: Option<Vec<usize>>,
    current: ScoredTour,
    best: ScoredTour,
    state: PhaseState,
    iterations: usize,
    accepted_moves: usize,
    improving_moves: usize,
}

impl<'a> AnnealPhase<'a> {
    /// Scores the seed and prepares the phase.
    ///
    /// # Errors
    /// `Configuration` if `temperature` is not positive, the seed is not a
    /// permutation of `0..coords.len()`, or `transition` is undefined for
    /// the tour length.
    pub fn new(
        seed: &[usize],
        coords: &'a Coordinates,
        transition: Transition,
        objective: Objective,
        temperature: f64,
    ) -> Result<Self> {
        validate_temperature(temperature)?;
        check_permutation(seed, coords.len())?;
        transition.validate(seed.len())?;

        let current = ScoredTour::new(objective.score(seed, coords), seed.to_vec());
        let best = current.clone();

        Ok(Self {
            coords,
            transition,
            objective,
            temperature,
            seed_ids: None,
            current,
            best,
            state: PhaseState::Initialized,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
        })
    }

    /// Verify each candidate against the seed's ids.
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.seed_ids = enabled.then(|| self.current.tour.clone());
        self
    }

    pub fn state(&self) -> PhaseState {
        self.state
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current(&self) -> &ScoredTour {
        &self.current
    }

    pub fn best(&self) -> &ScoredTour {
        &self.best
    }

    /// Runs one trial. Returns whether the candidate was accepted.
    ///
    /// # Errors
    /// `Configuration` if the phase is already completed;
    /// `InvariantViolation` if checks are enabled and the candidate lost
    /// or duplicated an id.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<bool> {
        if self.state == PhaseState::Completed {
            return Err(AnnealError::config("step called on a completed phase"));
        }
        self.state = PhaseState::Running;

        let candidate = self
            .transition
            .propose(&self.current.tour, self.coords, rng)?;
        if let Some(ids) = &self.seed_ids {
            check_same_ids(ids, &candidate)?;
        }
        let new_score = self.objective.score(&candidate, self.coords);
        let delta = self.current.score - new_score;
        self.iterations += 1;

        let accepted = if new_score < self.current.score {
            self.improving_moves += 1;
            self.current = ScoredTour::new(new_score, candidate);
            if new_score < self.best.score {
                self.best = self.current.clone();
            }
            true
        } else if metropolis_accept(delta, self.temperature, rng) {
            self.current = ScoredTour::new(new_score, candidate);
            true
        } else {
            false
        };

        if accepted {
            self.accepted_moves += 1;
        }
        Ok(accepted)
    }

    /// Runs `n_steps` trials and completes the phase.
    pub fn run<R: Rng>(mut self, n_steps: usize, rng: &mut R) -> Result<PhaseResult> {
        validate_steps(n_steps)?;
        for _ in 0..n_steps {
            self.step(rng)?;
        }
        Ok(self.finish())
    }

    /// Completes the phase and returns its current and best states.
    ///
    /// Further calls to [`step`](Self::step) fail.
    pub fn finish(&mut self) -> PhaseResult {
        self.state = PhaseState::Completed;
        PhaseResult {
            current: self.current.clone(),
            best: self.best.clone(),
            iterations: self.iterations,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
        }
    }
}

/// Runs one annealing phase of `n_steps` trials at `temperature`.
///
/// Returns the final `current` state and the phase `best`, which is the
/// seed itself when nothing improved on it.
///
/// # Errors
/// `Configuration` for a non-positive temperature, `n_steps == 0`, a seed
/// that is not a permutation of `0..coords.len()`, or a transition that
/// is undefined for the tour length.
pub fn run_phase<R: Rng>(
    seed: &[usize],
    coords: &Coordinates,
    transition: Transition,
    objective: Objective,
    n_steps: usize,
    temperature: f64,
    rng: &mut R,
) -> Result<PhaseResult> {
    AnnealPhase::new(seed, coords, transition, objective, temperature)?.run(n_steps, rng)
}
