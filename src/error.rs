use thiserror::Error;

use crate::operations::Validity;

/// Top-level error type for the region tracer.
#[derive(Debug, Error)]
pub enum TracerError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while editing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("no renderer attached; call attach() first")]
    NotAttached,

    #[error("cannot remove a point from an empty path")]
    EmptyPath,
}

/// Errors related to geometric computations on a finished path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(Validity),
}

/// Convenience type alias for results using [`TracerError`].
pub type Result<T> = std::result::Result<T, TracerError>;
