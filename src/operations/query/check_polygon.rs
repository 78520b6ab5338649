use std::fmt;

use crate::math::intersect_2d::segments_cross;
use crate::math::Point2;

/// Outcome of checking whether a vertex list forms a simple polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// At least three vertices and no two edges properly cross.
    Valid,
    /// Fewer than three vertices; carries the actual count.
    TooFewPoints(usize),
    /// Two edges of the closed polygon cross each other.
    EdgesCross,
}

impl Validity {
    /// Returns `true` for [`Validity::Valid`].
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid polygon"),
            Self::TooFewPoints(n) => write!(f, "only {n} points defined"),
            Self::EdgesCross => f.write_str("edges cross"),
        }
    }
}

/// Checks that a closed vertex list is a simple polygon.
///
/// Every path edge `(i, i + 1)` is tested against every edge `(j, j + 1 mod n)`
/// with `j >= i`, the last of which is the closing edge. This is quadratic in
/// the vertex count, which stays small for hand-placed points.
#[derive(Debug)]
pub struct CheckPolygon<'a> {
    vertices: &'a [Point2],
}

impl<'a> CheckPolygon<'a> {
    /// Creates a new `CheckPolygon` query.
    #[must_use]
    pub fn new(vertices: &'a [Point2]) -> Self {
        Self { vertices }
    }

    /// Executes the check.
    #[must_use]
    pub fn execute(&self) -> Validity {
        let path = self.vertices;
        let n = path.len();
        if n < 3 {
            return Validity::TooFewPoints(n);
        }

        for i in 0..n - 1 {
            let (a0, a1) = (&path[i], &path[i + 1]);
            for j in i..n {
                let (b0, b1) = (&path[j], &path[(j + 1) % n]);
                if segments_cross(a0, a1, b0, b1) {
                    return Validity::EdgesCross;
                }
            }
        }

        Validity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn too_few_points_reports_exact_count() {
        let all = pts(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)]);
        for n in 0..3 {
            assert_eq!(CheckPolygon::new(&all[..n]).execute(), Validity::TooFewPoints(n));
        }
    }

    #[test]
    fn square_is_valid() {
        let path = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert_eq!(CheckPolygon::new(&path).execute(), Validity::Valid);
    }

    #[test]
    fn triangle_is_valid() {
        let path = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        assert!(CheckPolygon::new(&path).execute().is_valid());
    }

    #[test]
    fn bowtie_edges_cross() {
        let path = pts(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert_eq!(CheckPolygon::new(&path).execute(), Validity::EdgesCross);
    }

    #[test]
    fn closing_edge_crossing_is_detected() {
        // An outward spiral whose open path is simple.
        let mut path = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (-1.0, 1.0),
            (-1.0, -1.0),
            (2.0, -1.0),
        ]);
        assert_eq!(CheckPolygon::new(&path).execute(), Validity::Valid);

        // Closing from (3, 2) back to the origin cuts through (1, 0) -> (1, 1).
        path.push(Point2::new(3.0, 2.0));
        assert_eq!(CheckPolygon::new(&path).execute(), Validity::EdgesCross);
    }

    #[test]
    fn concave_polygon_is_valid() {
        let path = pts(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 6.0),
            (4.0, 6.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (0.0, 6.0),
        ]);
        assert_eq!(CheckPolygon::new(&path).execute(), Validity::Valid);
    }

    #[test]
    fn display_matches_reason() {
        assert_eq!(Validity::TooFewPoints(1).to_string(), "only 1 points defined");
        assert_eq!(Validity::EdgesCross.to_string(), "edges cross");
        assert_eq!(Validity::Valid.to_string(), "valid polygon");
    }
}
