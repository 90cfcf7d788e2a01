//! pixedit - Client-side image adjustment library
//!
//! # Overview
//!
//! pixedit provides non-destructive pixel transforms for interactive
//! image editing:
//!
//! - An RGBA buffer with bilinear sampling and resizing
//! - A filter catalog (exposure, contrast, temperature, tint,
//!   saturation, hue, gamma, sepia, noise, clip, clarity, sharpness,
//!   and luminance-gated tone adjustments)
//! - A convolution engine with fixed 3x3 kernels
//! - Curve maps (bezier, hermite) for tone-curve editing
//! - Decode/render/texture adapters at the host boundary
//!
//! Every filter reads an immutable source buffer and returns a new
//! one, so callers can preview cheaply and commit later.
//!
//! # Example
//!
//! ```
//! use pixedit::RgbaImage;
//! use pixedit::filter;
//!
//! let src = RgbaImage::new(64, 48).unwrap();
//! let warmed = filter::temperature(&src, 20.0);
//! assert_eq!(warmed.width(), 64);
//! assert_eq!(src, RgbaImage::new(64, 48).unwrap()); // source untouched
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixedit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixedit_filter as filter;
pub use pixedit_io as io;
