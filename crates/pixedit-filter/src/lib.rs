//! pixedit-filter - Photographic adjustment filters
//!
//! This crate provides the filter catalog built on top of the
//! [`pixedit_core::RgbaImage`] transform primitive and the convolution
//! engine:
//!
//! - Basic adjustments (exposure, brightness, contrast, temperature,
//!   tint, saturation, hue)
//! - Luminance-gated tone adjustments (highlight, shadow, white, black)
//! - Effects (gamma, sepia, noise, clip)
//! - Convolution-backed detail filters (clarity, sharpness)
//!
//! Every filter reads an immutable source buffer and returns a new
//! buffer; the source is never modified, which supports the
//! preview-then-commit usage pattern expected of callers.

pub mod adjust;
pub mod convolve;
pub mod detail;
pub mod effects;
mod error;
pub mod kernel;
pub mod tone;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export the catalog at the crate root
pub use adjust::{brightness, contrast, exposure, hue, saturation_rgb, temperature, tint};
pub use convolve::convolve;
pub use detail::{clarity, sharpness};
pub use effects::{clip, gamma, noise, sepia};
pub use tone::{black, highlight, shadow, white};
