//! Neighborhood moves on tours.
//!
//! Each move copies the incoming tour and perturbs the copy, so the
//! caller's tour is never touched and the result is a fresh permutation
//! of the same ids.
//!
//! - [`swap`]: exchange two distinct positions. O(n) copy, O(1) move
//! - [`segment_reverse`]: reverse a random contiguous window (2-opt style)

use crate::error::{AnnealError, Result};
use crate::geometry::Coordinates;
use rand::Rng;

/// Default cap on the reversed window, as a fraction of the tour length.
pub const DEFAULT_MAX_FRACTION: f64 = 0.25;

/// The available neighborhood moves.
///
/// # Examples
///
/// ```
/// use u_anneal::{Coordinates, Transition};
/// use u_numflow::random::create_rng;
///
/// let coords = Coordinates::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
/// let mut rng = create_rng(7);
/// let next = Transition::Swap.propose(&[0, 1, 2], &coords, &mut rng).unwrap();
/// assert_eq!(next.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Exchange the ids at two distinct positions. Needs `n >= 2`.
    #[default]
    Swap,

    /// Reverse a window of length `2..=floor(n * max_fraction)`.
    SegmentReverse {
        /// Upper bound on the window, as a fraction of `n`, in (0, 1].
        max_fraction: f64,
    },
}

impl Transition {
    /// `SegmentReverse` with [`DEFAULT_MAX_FRACTION`].
    pub fn segment_reverse_default() -> Self {
        Transition::SegmentReverse {
            max_fraction: DEFAULT_MAX_FRACTION,
        }
    }

    /// Produces a candidate neighbor of `tour`.
    pub fn propose<R: Rng>(
        &self,
        tour: &[usize],
        coords: &Coordinates,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        match *self {
            Transition::Swap => swap(tour, coords, rng),
            Transition::SegmentReverse { max_fraction } => {
                segment_reverse(tour, coords, max_fraction, rng)
            }
        }
    }

    /// Checks that this move is defined for tours of length `n`.
    pub fn validate(&self, n: usize) -> Result<()> {
        match *self {
            Transition::Swap => {
                if n < 2 {
                    return Err(AnnealError::config(format!(
                        "swap needs at least 2 ids, got {n}"
                    )));
                }
                Ok(())
            }
            Transition::SegmentReverse { max_fraction } => {
                max_segment_len(n, max_fraction).map(|_| ())
            }
        }
    }
}

/// Swap move: exchange the ids at two distinct random positions.
///
/// Exactly two positions of the returned tour differ from `tour`.
///
/// # Errors
/// `Configuration` if `tour` has fewer than 2 ids.
pub fn swap<R: Rng>(tour: &[usize], _coords: &Coordinates, rng: &mut R) -> Result<Vec<usize>> {
    let n = tour.len();
    if n < 2 {
        return Err(AnnealError::config(format!(
            "swap needs at least 2 ids, got {n}"
        )));
    }
    let i = rng.random_range(0..n);
    // Draw from the n-1 other positions and skip over i.
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    let mut next = tour.to_vec();
    next.swap(i, j);
    Ok(next)
}

/// Segment reversal: reverse `next[i..i + len]` for a random window.
///
/// `len` is uniform in `2..=floor(n * max_fraction)` and `i` uniform in
/// `0..=n - len`. The window never wraps around the end of the tour.
///
/// # Errors
/// `Configuration` if `max_fraction` is outside (0, 1] or the window
/// bound `floor(n * max_fraction)` is below 2.
pub fn segment_reverse<R: Rng>(
    tour: &[usize],
    _coords: &Coordinates,
    max_fraction: f64,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = tour.len();
    let max_len = max_segment_len(n, max_fraction)?;
    let len = rng.random_range(2..=max_len);
    let start = rng.random_range(0..=n - len);
    let mut next = tour.to_vec();
    next[start..start + len].reverse();
    Ok(next)
}

/// Largest window `segment_reverse` may pick for `n` ids.
fn max_segment_len(n: usize, max_fraction: f64) -> Result<usize> {
    if !(max_fraction > 0.0 && max_fraction <= 1.0) {
        return Err(AnnealError::config(format!(
            "max_fraction must be in (0, 1], got {max_fraction}"
        )));
    }
    let max_len = (n as f64 * max_fraction).floor() as usize;
    if max_len < 2 {
        return Err(AnnealError::config(format!(
            "segment reversal needs floor({n} * {max_fraction}) >= 2"
        )));
    }
    Ok(max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{identity_tour, is_permutation};
    use proptest::prelude::*;
    use u_numflow::random::create_rng;

    fn line(n: usize) -> Coordinates {
        (0..n)
            .map(|i| crate::geometry::Point::new(i as f64, 0.0))
            .collect()
    }

    // ---- Swap ----

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = create_rng(42);
        let coords = line(10);
        let tour = identity_tour(10);
        for _ in 0..200 {
            let next = swap(&tour, &coords, &mut rng).unwrap();
            let changed = tour.iter().zip(&next).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2, "swap changed {changed} positions: {next:?}");
        }
    }

    #[test]
    fn test_swap_two_elements() {
        let mut rng = create_rng(42);
        let coords = line(2);
        let next = swap(&[0, 1], &coords, &mut rng).unwrap();
        assert_eq!(next, vec![1, 0]);
    }

    #[test]
    fn test_swap_does_not_mutate_input() {
        let mut rng = create_rng(3);
        let coords = line(5);
        let tour = vec![4, 2, 0, 1, 3];
        let _ = swap(&tour, &coords, &mut rng).unwrap();
        assert_eq!(tour, vec![4, 2, 0, 1, 3]);
    }

    #[test]
    fn test_swap_too_short() {
        let mut rng = create_rng(42);
        let coords = line(1);
        assert!(matches!(
            swap(&[0], &coords, &mut rng),
            Err(AnnealError::Configuration(_))
        ));
        assert!(Transition::Swap.validate(1).is_err());
        assert!(Transition::Swap.validate(2).is_ok());
    }

    // ---- Segment reverse ----

    #[test]
    fn test_segment_reverse_window() {
        let mut rng = create_rng(42);
        let n = 20;
        let coords = line(n);
        let tour = identity_tour(n);
        for _ in 0..200 {
            let next = segment_reverse(&tour, &coords, 0.25, &mut rng).unwrap();
            let first = next.iter().zip(&tour).position(|(a, b)| a != b);
            let last = next.iter().zip(&tour).rposition(|(a, b)| a != b);
            let (Some(start), Some(end)) = (first, last) else {
                panic!("reversal of length >= 2 must change the tour");
            };
            let len = end - start + 1;
            // an odd window keeps its middle element, so the changed span is the window
            assert!((2..=5).contains(&len), "window length {len} out of range");
            let mut expected = tour[start..=end].to_vec();
            expected.reverse();
            assert_eq!(&next[start..=end], expected.as_slice());
        }
    }

    #[test]
    fn test_segment_reverse_minimum_size() {
        // floor(8 * 0.25) = 2: every move reverses an adjacent pair
        let mut rng = create_rng(42);
        let coords = line(8);
        let tour = identity_tour(8);
        for _ in 0..50 {
            let next = segment_reverse(&tour, &coords, 0.25, &mut rng).unwrap();
            let changed = tour.iter().zip(&next).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
        }
    }

    #[test]
    fn test_segment_reverse_degenerate_size() {
        let mut rng = create_rng(42);
        let coords = line(7);
        let tour = identity_tour(7);
        // floor(7 * 0.25) = 1
        assert!(matches!(
            segment_reverse(&tour, &coords, 0.25, &mut rng),
            Err(AnnealError::Configuration(_))
        ));
        assert!(Transition::segment_reverse_default().validate(7).is_err());
        assert!(Transition::segment_reverse_default().validate(8).is_ok());
    }

    #[test]
    fn test_segment_reverse_bad_fraction() {
        let mut rng = create_rng(42);
        let coords = line(10);
        let tour = identity_tour(10);
        for fraction in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(segment_reverse(&tour, &coords, fraction, &mut rng).is_err());
        }
        // the whole tour is a valid window
        assert!(segment_reverse(&tour, &coords, 1.0, &mut rng).is_ok());
    }

    #[test]
    fn test_propose_dispatch() {
        let mut rng = create_rng(42);
        let coords = line(12);
        let tour = identity_tour(12);
        for transition in [Transition::Swap, Transition::segment_reverse_default()] {
            let next = transition.propose(&tour, &coords, &mut rng).unwrap();
            assert!(is_permutation(&next, 12));
            assert_ne!(next, tour);
        }
    }

    proptest! {
        #[test]
        fn prop_transitions_preserve_ids(
            n in 8usize..60,
            fraction in 0.25f64..1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let coords = line(n);
            let tour = crate::tour::random_tour(n, &mut rng);

            let swapped = swap(&tour, &coords, &mut rng).unwrap();
            prop_assert!(crate::tour::check_same_ids(&tour, &swapped).is_ok());

            let reversed = segment_reverse(&tour, &coords, fraction, &mut rng).unwrap();
            prop_assert!(crate::tour::check_same_ids(&tour, &reversed).is_ok());
        }
    }
}
