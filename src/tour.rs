//! Tour construction and permutation checks.
//!
//! A tour is a `Vec<usize>` holding every id of `0..n` exactly once,
//! read as a closed cycle (the last id connects back to the first).

use crate::error::{AnnealError, Result};
use rand::Rng;

/// The tour `[0, 1, ..., n-1]`.
pub fn identity_tour(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// A uniformly shuffled tour over `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour = identity_tour(n);
    u_numflow::random::shuffle(&mut tour, rng);
    tour
}

/// Whether `tour` holds every id of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &id in tour {
        if id >= n || seen[id] {
            return false;
        }
        seen[id] = true;
    }
    true
}

/// Checks that `tour` is a permutation of `0..n`.
///
/// Used on caller-supplied seeds, so failures are configuration errors.
pub fn check_permutation(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(AnnealError::config(format!(
            "tour has {} ids but coordinate set has {n} points",
            tour.len()
        )));
    }
    let mut seen = vec![false; n];
    for &id in tour {
        if id >= n {
            return Err(AnnealError::config(format!(
                "id {id} out of range for {n} points"
            )));
        }
        if seen[id] {
            return Err(AnnealError::config(format!("id {id} appears more than once")));
        }
        seen[id] = true;
    }
    Ok(())
}

/// Checks that `candidate` holds exactly the ids of `seed`.
pub fn check_same_ids(seed: &[usize], candidate: &[usize]) -> Result<()> {
    if seed.len() != candidate.len() {
        return Err(AnnealError::InvariantViolation(format!(
            "candidate has {} ids, seed has {}",
            candidate.len(),
            seed.len()
        )));
    }
    let mut expected = seed.to_vec();
    let mut actual = candidate.to_vec();
    expected.sort_unstable();
    actual.sort_unstable();
    if expected != actual {
        return Err(AnnealError::InvariantViolation(format!(
            "candidate {candidate:?} is not a permutation of the seed ids"
        )));
    }
    Ok(())
}
