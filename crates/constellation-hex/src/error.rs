//! Error types for constellation-hex.

use thiserror::Error;

/// Result type for hex algebra operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur constructing grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The three cube components do not sum to zero.
    #[error("invalid cube coordinate: {q} + {r} + {s} != 0")]
    InvalidCoordinate { q: i64, r: i64, s: i64 },
}
