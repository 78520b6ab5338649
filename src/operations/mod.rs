pub mod query;

pub use query::{pixel_count, CheckPolygon, Rasterize, ScanSegment, Validity};
