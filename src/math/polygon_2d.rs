use super::Point2;

/// An integer, inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

/// Computes the bounding box of `points`, with each extent rounded to the
/// nearest pixel.
///
/// Returns `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pixel_bounds(points: &[Point2]) -> Option<PixelBounds> {
    let first = points.first()?;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (first.x, first.x, first.y, first.y);
    for pt in &points[1..] {
        x_min = x_min.min(pt.x);
        x_max = x_max.max(pt.x);
        y_min = y_min.min(pt.y);
        y_max = y_max.max(pt.y);
    }
    Some(PixelBounds {
        x_min: x_min.round() as i64,
        x_max: x_max.round() as i64,
        y_min: y_min.round() as i64,
        y_max: y_max.round() as i64,
    })
}

/// Jordan-curve inclusion test (PNPOLY) for a closed polygon.
///
/// Casts a ray in +x from `point` and counts the edges it crosses. Each vertex
/// is paired with its predecessor, vertex 0 with the last vertex; the
/// rasterizer output depends on this pairing, so it must not be flipped to
/// successor pairing.
#[must_use]
pub fn contains(polygon: &[Point2], point: &Point2) -> bool {
    let Some(last) = polygon.last() else {
        return false;
    };
    let mut inside = false;
    let mut vb = last;
    for va in polygon {
        if (va.y > point.y) != (vb.y > point.y)
            && point.x < (vb.x - va.x) * (point.y - va.y) / (vb.y - va.y) + va.x
        {
            inside = !inside;
        }
        vb = va;
    }
    inside
}
