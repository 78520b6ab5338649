use tracing::trace;

use super::check_polygon::{CheckPolygon, Validity};
use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{contains, pixel_bounds};
use crate::math::Point2;

/// A maximal run of interior pixels on one row, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanSegment {
    pub y: i64,
    pub start_x: i64,
    pub end_x: i64,
}

impl ScanSegment {
    /// Number of pixels covered by the segment.
    #[must_use]
    pub fn width(&self) -> i64 {
        self.end_x - self.start_x + 1
    }
}

/// Total number of pixels covered by `segments`.
#[must_use]
pub fn pixel_count(segments: &[ScanSegment]) -> i64 {
    segments.iter().map(ScanSegment::width).sum()
}

/// Converts a simple polygon into horizontal pixel runs.
///
/// Every pixel of the rounded bounding box is classified with [`contains`];
/// cost is proportional to the bounding-box area times the vertex count.
/// Rows are emitted top to bottom and runs within a row left to right.
#[derive(Debug)]
pub struct Rasterize<'a> {
    vertices: &'a [Point2],
}

impl<'a> Rasterize<'a> {
    /// Creates a new `Rasterize` operation.
    #[must_use]
    pub fn new(vertices: &'a [Point2]) -> Self {
        Self { vertices }
    }

    /// Executes the scan conversion.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` carrying the [`CheckPolygon`]
    /// result if the vertices do not form a simple polygon.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<ScanSegment>> {
        let validity = CheckPolygon::new(self.vertices).execute();
        if validity != Validity::Valid {
            return Err(GeometryError::InvalidPolygon(validity).into());
        }
        let Some(bounds) = pixel_bounds(self.vertices) else {
            return Err(GeometryError::InvalidPolygon(Validity::TooFewPoints(0)).into());
        };

        let mut result = Vec::new();
        for ty in bounds.y_min..=bounds.y_max {
            let before = result.len();
            let mut open: Option<i64> = None;
            for tx in bounds.x_min..=bounds.x_max {
                let inside = contains(self.vertices, &Point2::new(tx as f64, ty as f64));
                match (open, inside) {
                    (None, true) => open = Some(tx),
                    (Some(start_x), false) => {
                        result.push(ScanSegment {
                            y: ty,
                            start_x,
                            end_x: tx - 1,
                        });
                        open = None;
                    }
                    _ => {}
                }
            }
            // Rounding can leave x_max short of the rightmost edge.
            if let Some(start_x) = open {
                result.push(ScanSegment {
                    y: ty,
                    start_x,
                    end_x: bounds.x_max,
                });
            }
            trace!(row = ty, segments = result.len() - before, "rasterized row");
        }

        Ok(result)
    }
}
