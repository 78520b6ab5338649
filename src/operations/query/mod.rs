mod check_polygon;
mod rasterize;

pub use check_polygon::{CheckPolygon, Validity};
pub use rasterize::{pixel_count, Rasterize, ScanSegment};
