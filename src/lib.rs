pub mod error;
pub mod math;
pub mod operations;
pub mod path;
pub mod render;

pub use error::{GeometryError, PathError, Result, TracerError};
