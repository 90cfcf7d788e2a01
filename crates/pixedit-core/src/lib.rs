//! pixedit-core - Basic data structures for image adjustment
//!
//! This crate provides the fundamental types used throughout the
//! pixedit library:
//!
//! - [`RgbaImage`] - The in-memory RGBA pixel buffer
//! - [`Color`] - A four-channel color value used by pixel math
//! - [`calc`] - Numeric helpers (distance, luminance, random ranges)
//! - [`curve`] - Dense tone-curve maps built from sparse control points
//!
//! Everything here is single-threaded and synchronous: each operation
//! runs to completion on the calling thread and buffers carry no
//! synchronization.

pub mod calc;
pub mod color;
pub mod curve;
pub mod error;
pub mod image;

pub use color::Color;
pub use curve::CurveMap;
pub use error::{Error, Result};
pub use image::RgbaImage;
