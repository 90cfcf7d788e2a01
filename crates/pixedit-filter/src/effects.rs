//! Stylistic effects
//!
//! Gamma curves, sepia toning, uniform noise and hard channel clipping.

use pixedit_core::{RgbaImage, calc};

/// Power-curve gamma with exponent `2^(value/30.5)`.
///
/// Channels are normalized to [0,1] before exponentiation, so a
/// positive value darkens midtones and a negative value lifts them.
/// `gamma(src, 0.0)` is the identity transform.
pub fn gamma(src: &RgbaImage, value: f32) -> RgbaImage {
    let exponent = 2.0f32.powf(value / 30.5);
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        let r = (c.r / 255.0).powf(exponent) * 255.0;
        let g = (c.g / 255.0).powf(exponent) * 255.0;
        let b = (c.b / 255.0).powf(exponent) * 255.0;
        data[idx] = r.round().clamp(0.0, 255.0) as u8;
        data[idx + 1] = g.round().clamp(0.0, 255.0) as u8;
        data[idx + 2] = b.round().clamp(0.0, 255.0) as u8;
    })
}

/// Blend toward the classic sepia color-mixing matrix.
///
/// `value` in [0,100] scales the matrix; 0 is the identity and 100 the
/// full sepia tone. All three outputs mix the unmodified source
/// channels.
pub fn sepia(src: &RgbaImage, value: f32) -> RgbaImage {
    let n = value / 100.0;
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        let r = c.r * (1.0 - 0.607 * n) + c.g * (0.769 * n) + c.b * (0.189 * n);
        let g = c.r * (0.349 * n) + c.g * (1.0 - 0.314 * n) + c.b * (0.168 * n);
        let b = c.r * (0.272 * n) + c.g * (0.534 * n) + c.b * (1.0 - 0.869 * n);
        data[idx] = r.round().clamp(0.0, 255.0) as u8;
        data[idx + 1] = g.round().clamp(0.0, 255.0) as u8;
        data[idx + 2] = b.round().clamp(0.0, 255.0) as u8;
    })
}

/// Add independent uniform noise to every channel of every pixel.
///
/// The offset magnitude is `|value| * 2.55`, so the parameter reads as
/// a percentage of full scale. `noise(src, 0.0)` is exactly the
/// identity transform.
pub fn noise(src: &RgbaImage, value: f32) -> RgbaImage {
    let adjust = (value.abs() * 2.55) as f64;
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        let r = c.r + calc::random_range(-adjust, adjust) as f32;
        let g = c.g + calc::random_range(-adjust, adjust) as f32;
        let b = c.b + calc::random_range(-adjust, adjust) as f32;
        data[idx] = r.clamp(0.0, 255.0) as u8;
        data[idx + 1] = g.clamp(0.0, 255.0) as u8;
        data[idx + 2] = b.clamp(0.0, 255.0) as u8;
    })
}

/// Hard-clip channels near the ends of the range to pure 0 or 255.
///
/// Channels within `|value| * 2.55` of either end snap to that end;
/// everything in between is untouched.
pub fn clip(src: &RgbaImage, value: f32) -> RgbaImage {
    let adjust = value.abs() * 2.55;
    let clip_channel = move |c: f32| -> f32 {
        if c > 255.0 - adjust {
            255.0
        } else if c < adjust {
            0.0
        } else {
            c
        }
    };
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        data[idx] = clip_channel(c.r) as u8;
        data[idx + 1] = clip_channel(c.g) as u8;
        data[idx + 2] = clip_channel(c.b) as u8;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixedit_core::Color;

    fn gray_ramp() -> RgbaImage {
        let mut img = RgbaImage::new(4, 1).unwrap();
        for (x, v) in [0.0, 64.0, 192.0, 255.0].into_iter().enumerate() {
            img.set_pixel(x as u32, 0, Color::new(v, v, v, 255.0));
        }
        img
    }

    #[test]
    fn test_gamma_zero_is_identity() {
        let src = gray_ramp();
        assert_eq!(gamma(&src, 0.0), src);
    }

    #[test]
    fn test_gamma_positive_darkens_midtones() {
        let src = gray_ramp();
        let out = gamma(&src, 30.5);
        assert_eq!(out.get_pixel(0, 0).r, 0.0, "black fixed");
        assert_eq!(out.get_pixel(3, 0).r, 255.0, "white fixed");
        // exponent 2: (64/255)^2 * 255 ~= 16
        assert_eq!(out.get_pixel(1, 0).r, 16.0);
        assert!(out.get_pixel(2, 0).r < 192.0);
    }

    #[test]
    fn test_gamma_negative_lifts_midtones() {
        let src = gray_ramp();
        let out = gamma(&src, -30.5);
        assert!(out.get_pixel(1, 0).r > 64.0);
    }

    #[test]
    fn test_sepia_full_strength_red() {
        let mut src = RgbaImage::new(2, 2).unwrap();
        src.apply(|_| Color::new(255.0, 0.0, 0.0, 255.0));
        let out = sepia(&src, 100.0);
        for y in 0..2 {
            for x in 0..2 {
                let c = out.get_pixel(x, y);
                assert!((c.r - 100.0).abs() <= 1.0, "r = {}", c.r);
                assert!((c.g - 89.0).abs() <= 1.0, "g = {}", c.g);
                assert!((c.b - 69.0).abs() <= 1.0, "b = {}", c.b);
                assert_eq!(c.a, 255.0);
            }
        }
    }

    #[test]
    fn test_sepia_zero_is_identity() {
        let src = gray_ramp();
        assert_eq!(sepia(&src, 0.0), src);
    }

    #[test]
    fn test_noise_zero_is_identity() {
        let src = gray_ramp();
        assert_eq!(noise(&src, 0.0), src);
    }

    #[test]
    fn test_noise_stays_within_magnitude() {
        let mut src = RgbaImage::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                src.set_pixel(x, y, Color::new(128.0, 128.0, 128.0, 255.0));
            }
        }
        let out = noise(&src, 10.0); // magnitude 25.5
        for y in 0..8 {
            for x in 0..8 {
                let c = out.get_pixel(x, y);
                for v in [c.r, c.g, c.b] {
                    assert!((v - 128.0).abs() <= 26.0, "offset too large: {v}");
                }
                assert_eq!(c.a, 255.0);
            }
        }
    }

    #[test]
    fn test_clip_zero_is_identity() {
        let src = gray_ramp();
        assert_eq!(clip(&src, 0.0), src);
    }

    #[test]
    fn test_clip_snaps_near_extremes() {
        let src = gray_ramp(); // 0, 64, 192, 255
        let out = clip(&src, 30.0); // adjust = 76.5
        assert_eq!(out.get_pixel(0, 0).r, 0.0);
        assert_eq!(out.get_pixel(1, 0).r, 0.0, "64 < 76.5 snaps to 0");
        assert_eq!(out.get_pixel(2, 0).r, 255.0, "192 > 178.5 snaps to 255");
        assert_eq!(out.get_pixel(3, 0).r, 255.0);
    }

    #[test]
    fn test_effects_leave_source_unmodified() {
        let src = gray_ramp();
        let before = src.clone();
        let _ = gamma(&src, 20.0);
        let _ = sepia(&src, 50.0);
        let _ = noise(&src, 50.0);
        let _ = clip(&src, 50.0);
        assert_eq!(src, before);
    }
}
