use super::{Point2, CROSSING_TOLERANCE};

/// Parametric intersection of the lines through segments `a0 → a1` and `b0 → b1`.
///
/// Returns `(ua, ub)` such that the lines meet at `a0 + ua * (a1 - a0)` and
/// `b0 + ub * (b1 - b0)`, or `None` when the lines are parallel or coincident
/// (denominator within [`CROSSING_TOLERANCE`] of zero).
#[must_use]
pub fn segment_parameters_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let denom = db.y * da.x - db.x * da.y;
    if denom.abs() <= CROSSING_TOLERANCE {
        return None;
    }

    let dx = a0.x - b0.x;
    let dy = a0.y - b0.y;
    let ua = (db.x * dy - db.y * dx) / denom;
    let ub = (da.x * dy - da.y * dx) / denom;
    Some((ua, ub))
}

/// Returns `true` iff the two segments cross at a point strictly inside both.
///
/// Intersections at (or within [`CROSSING_TOLERANCE`] of) either segment's
/// endpoints do not count, so segments sharing an endpoint never cross.
#[must_use]
pub fn segments_cross(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let inside = |t: f64| (CROSSING_TOLERANCE..=1.0 - CROSSING_TOLERANCE).contains(&t);
    segment_parameters_2d(a0, a1, b0, b1).is_some_and(|(ua, ub)| inside(ua) && inside(ub))
}
