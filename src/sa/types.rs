//! Result types shared by phases and schedules.

/// A tour paired with its objective score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredTour {
    /// Objective value of `tour`. Lower is better.
    pub score: f64,

    /// The visiting order.
    pub tour: Vec<usize>,
}

impl ScoredTour {
    pub fn new(score: f64, tour: Vec<usize>) -> Self {
        Self { score, tour }
    }
}

/// Outcome of one annealing phase.
#[derive(Debug, Clone)]
pub struct PhaseResult {
    /// State the phase ended in. May be worse than `best`.
    pub current: ScoredTour,

    /// Best state seen in the phase, the seed included.
    pub best: ScoredTour,

    /// Trials executed.
    pub iterations: usize,

    /// Accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Strictly improving candidates.
    pub improving_moves: usize,
}

/// Outcome of a full schedule.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleResult {
    /// Best state of the last phase.
    pub best: ScoredTour,

    /// Best score of each phase, in phase order.
    pub score_trajectory: Vec<f64>,

    /// Temperature each phase ran at, in phase order.
    pub temperatures: Vec<f64>,

    /// Temperature after the final decay.
    pub final_temperature: f64,

    /// Total trials over all phases.
    pub iterations: usize,

    /// Total accepted candidates over all phases.
    pub accepted_moves: usize,

    /// Total strictly improving candidates over all phases.
    pub improving_moves: usize,
}
