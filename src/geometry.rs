//! Point locations addressed by tour ids.

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// The fixed set of point locations for a run, indexed by id `0..len()`.
///
/// Owned by the caller; operators and runners only borrow it.
///
/// # Examples
///
/// ```
/// use u_anneal::Coordinates;
///
/// let coords = Coordinates::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(coords.len(), 2);
/// assert_eq!(coords[0].distance_squared(&coords[1]), 25.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    points: Vec<Point>,
}

impl Coordinates {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().copied().map(Point::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Point> {
        self.points.get(id)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl std::ops::Index<usize> for Coordinates {
    type Output = Point;

    fn index(&self, id: usize) -> &Point {
        &self.points[id]
    }
}

impl FromIterator<Point> for Coordinates {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((a.distance_squared(&b) - 25.0).abs() < 1e-12);
        assert!((b.distance_squared(&a) - 25.0).abs() < 1e-12);
        assert_eq!(a.distance_squared(&a), 0.0);
    }

    #[test]
    fn test_coordinates_lookup() {
        let coords: Coordinates = vec![Point::new(0.0, 0.0), Point::new(2.0, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(coords.len(), 2);
        assert!(!coords.is_empty());
        assert_eq!(coords[1], Point::new(2.0, 1.0));
        assert!(coords.get(2).is_none());
    }

    #[test]
    fn test_empty() {
        let coords = Coordinates::default();
        assert!(coords.is_empty());
        assert!(coords.points().is_empty());
    }
}
