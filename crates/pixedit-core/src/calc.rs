//! Numeric helpers shared by the filter catalog and the curve engine.

use crate::color::Color;
use rand::RngExt;

/// Euclidean distance between two points.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Weighted luminance of a single pixel.
///
/// Uses the Rec. 601 weights `0.299 R + 0.587 G + 0.114 B`.
pub fn luminance(c: &Color) -> f32 {
    0.299 * c.r + 0.587 * c.g + 0.114 * c.b
}

/// Uniformly distributed integer in `[min, max]`, rounded.
///
/// An empty range (`min >= max`) returns `min` rounded, so a zero-width
/// range is deterministic.
pub fn random_range(min: f64, max: f64) -> i32 {
    if min >= max {
        return min.round() as i32;
    }
    let mut rng = rand::rng();
    rng.random_range(min..=max).round() as i32
}

/// Uniformly distributed float in `[min, max]`, rounded to one decimal
/// place.
pub fn random_range_float(min: f64, max: f64) -> f64 {
    if min >= max {
        return (min * 10.0).round() / 10.0;
    }
    let mut rng = rand::rng();
    let v: f64 = rng.random_range(min..=max);
    (v * 10.0).round() / 10.0
}
