//! Error types for constellation-gen.

use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A shape operation failed.
    #[error("shape error: {0}")]
    Shape(#[from] constellation_shape::Error),

    /// The requested shape size is too small to generate.
    #[error("invalid target size: {size} cells")]
    InvalidTargetSize { size: usize },
}
