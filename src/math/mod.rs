pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type, in image-local coordinates (+x right, +y down).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance used when deciding whether two segments properly cross.
///
/// Parameters within this distance of a segment end are treated as touching
/// the endpoint, so consecutive polygon edges (which share a vertex) are
/// never reported as crossing. Coarse on purpose: vertices come from mouse
/// clicks, so they sit on whole pixels.
pub const CROSSING_TOLERANCE: f64 = 1e-4;
