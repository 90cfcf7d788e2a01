//! I/O error types
//!
//! Provides a unified error type for the decode, render and texture
//! boundaries. Each adapter module maps its underlying errors into
//! `IoError` variants so that callers only need to handle one error
//! type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A decoder collaborator returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// The render surface is missing or cannot be acquired.
    ///
    /// Recoverable: [`crate::render`] reports it and turns the call
    /// into a no-op instead of propagating.
    #[error("render surface unavailable")]
    SurfaceUnavailable,

    /// An error from the core library (e.g. byte-length mismatch)
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
