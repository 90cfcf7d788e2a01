//! Error types for pixedit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Pixel-index and buffer-size mismatches are programming errors and
//! fail fast rather than silently proceeding with wrong results.

use thiserror::Error;

/// pixedit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height * 4
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Malformed curve input (fatal configuration error)
    #[error("bad curve: {0}")]
    BadCurve(String),
}

/// Result type alias for pixedit operations
pub type Result<T> = std::result::Result<T, Error>;
