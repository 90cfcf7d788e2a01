//! pixedit-test - Regression test framework for pixedit
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use pixedit_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("filter");
//! let src = gradient_image(32, 32);
//! rp.compare_images(&src, &src);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixedit_core::{Color, RgbaImage};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixedit-test is at crates/pixedit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Opaque single-color test image.
pub fn solid_image(width: u32, height: u32, r: u8, g: u8, b: u8) -> RgbaImage {
    let mut img = RgbaImage::new(width, height).expect("nonzero test dimensions");
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, Color::new(r as f32, g as f32, b as f32, 255.0));
        }
    }
    img
}

/// Opaque diagonal gradient covering the full tonal range.
///
/// Red ramps left to right, green top to bottom, blue along the
/// diagonal, so every filter under test sees shadows, midtones and
/// highlights.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height).expect("nonzero test dimensions");
    let wmax = (width - 1).max(1) as f32;
    let hmax = (height - 1).max(1) as f32;
    for y in 0..height {
        for x in 0..width {
            let r = x as f32 / wmax * 255.0;
            let g = y as f32 / hmax * 255.0;
            let b = (x + y) as f32 / (wmax + hmax) * 255.0;
            img.set_pixel(x, y, Color::new(r, g, b, 255.0));
        }
    }
    img
}

/// Opaque two-color checkerboard with the given cell size.
pub fn checkerboard_image(width: u32, height: u32, cell: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height).expect("nonzero test dimensions");
    let cell = cell.max(1);
    for y in 0..height {
        for x in 0..width {
            let on = ((x / cell) + (y / cell)) % 2 == 0;
            let v = if on { 220.0 } else { 35.0 };
            img.set_pixel(x, y, Color::new(v, v, v, 255.0));
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_image_uniform() {
        let img = solid_image(3, 2, 10, 20, 30);
        for y in 0..2 {
            for x in 0..3 {
                let c = img.get_pixel(x, y);
                assert_eq!((c.r, c.g, c.b, c.a), (10.0, 20.0, 30.0, 255.0));
            }
        }
    }

    #[test]
    fn test_gradient_spans_full_range() {
        let img = gradient_image(16, 16);
        assert_eq!(img.get_pixel(0, 0).r, 0.0);
        assert_eq!(img.get_pixel(15, 0).r, 255.0);
        assert_eq!(img.get_pixel(0, 15).g, 255.0);
        assert_eq!(img.get_pixel(15, 15).b, 255.0);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let img = checkerboard_image(4, 4, 2);
        assert_eq!(img.get_pixel(0, 0).r, 220.0);
        assert_eq!(img.get_pixel(2, 0).r, 35.0);
        assert_eq!(img.get_pixel(2, 2).r, 220.0);
    }
}
