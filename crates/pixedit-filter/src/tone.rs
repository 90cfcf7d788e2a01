//! Luminance-gated tone adjustments
//!
//! Highlight, shadow, white and black act on restricted tonal ranges.
//! Shadow/white/black gate each pixel twice: on its weighted luminance
//! (thresholds 60 and 200) and on a per-channel near-black/near-white
//! test, so midtones and saturated colors pass through unchanged.

use pixedit_core::{RgbaImage, calc};

const SHADOW_LUMINANCE: f32 = 60.0;
const HIGHLIGHT_LUMINANCE: f32 = 200.0;

/// All three channels at or below the near-black threshold.
fn is_near_black(r: f32, g: f32, b: f32) -> bool {
    r <= SHADOW_LUMINANCE && g <= SHADOW_LUMINANCE && b <= SHADOW_LUMINANCE
}

/// All three channels at or above the near-white threshold.
fn is_near_white(r: f32, g: f32, b: f32) -> bool {
    r >= HIGHLIGHT_LUMINANCE && g >= HIGHLIGHT_LUMINANCE && b >= HIGHLIGHT_LUMINANCE
}

/// Scale all channels by `1 + value/500`, clamped.
///
/// The divisor keeps the usable parameter range wide; even at 100 the
/// gain is only 1.2x.
pub fn highlight(src: &RgbaImage, value: f32) -> RgbaImage {
    let gain = 1.0 + value / 500.0;
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        data[idx] = (c.r * gain).clamp(0.0, 255.0) as u8;
        data[idx + 1] = (c.g * gain).clamp(0.0, 255.0) as u8;
        data[idx + 2] = (c.b * gain).clamp(0.0, 255.0) as u8;
    })
}

/// Lift (or deepen) dark pixels uniformly.
///
/// Affects only pixels whose luminance is below 60 and that also pass
/// the near-black channel gate.
pub fn shadow(src: &RgbaImage, value: f32) -> RgbaImage {
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        if calc::luminance(&c) < SHADOW_LUMINANCE && is_near_black(c.r, c.g, c.b) {
            data[idx] = (c.r + value).clamp(0.0, 255.0) as u8;
            data[idx + 1] = (c.g + value).clamp(0.0, 255.0) as u8;
            data[idx + 2] = (c.b + value).clamp(0.0, 255.0) as u8;
        }
    })
}

/// Push (or pull) bright pixels uniformly.
///
/// Affects only pixels whose luminance is above 200 and that also pass
/// the near-white channel gate.
pub fn white(src: &RgbaImage, value: f32) -> RgbaImage {
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        if calc::luminance(&c) > HIGHLIGHT_LUMINANCE && is_near_white(c.r, c.g, c.b) {
            data[idx] = (c.r + value).clamp(0.0, 255.0) as u8;
            data[idx + 1] = (c.g + value).clamp(0.0, 255.0) as u8;
            data[idx + 2] = (c.b + value).clamp(0.0, 255.0) as u8;
        }
    })
}

/// Deepen (or lift) the darkest pixels; positive values darken.
///
/// Same gates as [`shadow`] with the sign inverted, so the two can be
/// driven by independent sliders without fighting over midtones.
pub fn black(src: &RgbaImage, value: f32) -> RgbaImage {
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        if calc::luminance(&c) < SHADOW_LUMINANCE && is_near_black(c.r, c.g, c.b) {
            data[idx] = (c.r - value).clamp(0.0, 255.0) as u8;
            data[idx + 1] = (c.g - value).clamp(0.0, 255.0) as u8;
            data[idx + 2] = (c.b - value).clamp(0.0, 255.0) as u8;
        }
    })
}
