//! Tour scoring.

use crate::geometry::Coordinates;

/// The available objective functions. Lower scores are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// See [`closed_tour_length`].
    #[default]
    ClosedTourLength,
}

impl Objective {
    /// Scores `tour`.
    ///
    /// # Panics
    /// Panics if an id in `tour` is not a valid index into `coords`.
    pub fn score(&self, tour: &[usize], coords: &Coordinates) -> f64 {
        match self {
            Objective::ClosedTourLength => closed_tour_length(tour, coords),
        }
    }
}

/// Length score of the closed tour.
///
/// Sums the squared edge lengths between consecutive ids, including the
/// wrap-around edge from the last id to the first, and takes a single
/// square root of the total:
///
/// ```text
/// score = sqrt( sum_k |p[t_k+1] - p[t_k]|^2 + |p[t_0] - p[t_n-1]|^2 )
/// ```
///
/// This is not the sum of per-edge Euclidean lengths. It orders tours
/// consistently within a run, which is all acceptance needs. Tours with
/// fewer than two ids score 0.
///
/// # Panics
/// Panics if an id in `tour` is not a valid index into `coords`.
///
/// # Examples
///
/// ```
/// use u_anneal::{closed_tour_length, Coordinates};
///
/// let square = Coordinates::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// assert!((closed_tour_length(&[0, 1, 2, 3], &square) - 2.0).abs() < 1e-12);
/// ```
pub fn closed_tour_length(tour: &[usize], coords: &Coordinates) -> f64 {
    let n = tour.len();
    if n < 2 {
        return 0.0;
    }

    let open: f64 = tour
        .windows(2)
        .map(|w| coords[w[0]].distance_squared(&coords[w[1]]))
        .sum();
    let closing = coords[tour[n - 1]].distance_squared(&coords[tour[0]]);

    (open + closing).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Coordinates {
        Coordinates::from_pairs(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_empty_and_single() {
        let coords = unit_square();
        assert_eq!(closed_tour_length(&[], &coords), 0.0);
        assert_eq!(closed_tour_length(&[2], &coords), 0.0);
    }

    #[test]
    fn test_two_points_counts_edge_twice() {
        let coords = Coordinates::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]);
        let d: f64 = 5.0;
        let expected = (2.0 * d * d).sqrt();
        assert!((closed_tour_length(&[0, 1], &coords) - expected).abs() < 1e-12);
        assert!((closed_tour_length(&[1, 0], &coords) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_square_perimeter_beats_crossing() {
        let coords = unit_square();
        let perimeter = closed_tour_length(&[0, 1, 2, 3], &coords);
        let crossing = closed_tour_length(&[0, 2, 1, 3], &coords);
        assert!((perimeter - 2.0).abs() < 1e-12);
        // two diagonals (2 each) and two sides (1 each)
        assert!((crossing - 6.0f64.sqrt()).abs() < 1e-12);
        assert!(perimeter < crossing);
    }

    #[test]
    fn test_rotation_invariant() {
        let coords = unit_square();
        let a = closed_tour_length(&[0, 1, 2, 3], &coords);
        let b = closed_tour_length(&[2, 3, 0, 1], &coords);
        let c = closed_tour_length(&[3, 2, 1, 0], &coords);
        assert!((a - b).abs() < 1e-12);
        assert!((a - c).abs() < 1e-12);
    }

    #[test]
    fn test_objective_dispatch() {
        let coords = unit_square();
        let tour = [0, 2, 1, 3];
        assert_eq!(
            Objective::ClosedTourLength.score(&tour, &coords),
            closed_tour_length(&tour, &coords)
        );
    }
}
