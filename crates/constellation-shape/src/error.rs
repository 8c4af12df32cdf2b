//! Error types for constellation-shape.

use thiserror::Error;

/// Result type for shape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shape operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A cell coordinate was invalid.
    #[error("hex error: {0}")]
    Hex(#[from] constellation_hex::Error),

    /// Two shapes compared for distance have different cell counts.
    #[error("shape size mismatch: {left} cells vs {right} cells")]
    SizeMismatch { left: usize, right: usize },
}
