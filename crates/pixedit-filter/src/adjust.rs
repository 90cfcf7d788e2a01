//! Basic photographic adjustments
//!
//! Exposure, brightness, contrast, temperature, tint, saturation and
//! hue. Each filter is a pure function over an immutable source buffer
//! built on [`RgbaImage::map_pixels`].

use pixedit_core::RgbaImage;

/// Multiply linear intensity by `2^(value/100)`.
///
/// `exposure(src, 0.0)` is the identity transform.
pub fn exposure(src: &RgbaImage, value: f32) -> RgbaImage {
    let factor = 2.0f32.powf(value / 100.0);
    src.map_pixels(|data, idx, _, _, x, y| {
        let mut c = src.get_pixel(x, y).mul(factor);
        c.clamp();
        data[idx] = c.r as u8;
        data[idx + 1] = c.g as u8;
        data[idx + 2] = c.b as u8;
    })
}

/// Add `value` to all three color channels.
pub fn brightness(src: &RgbaImage, value: f32) -> RgbaImage {
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        data[idx] = (c.r + value).clamp(0.0, 255.0) as u8;
        data[idx + 1] = (c.g + value).clamp(0.0, 255.0) as u8;
        data[idx + 2] = (c.b + value).clamp(0.0, 255.0) as u8;
    })
}

/// Scale-and-bias contrast about the mid-gray point.
///
/// Uses `a = 1 + value/200` and `b = 128 - 128a`, so 128 is (up to
/// rounding) a fixed point of the transform.
pub fn contrast(src: &RgbaImage, value: f32) -> RgbaImage {
    let alpha = 1.0 + value / 200.0;
    let beta = 128.0 - alpha * 128.0;
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        data[idx] = (alpha * c.r + beta).clamp(0.0, 255.0) as u8;
        data[idx + 1] = (alpha * c.g + beta).clamp(0.0, 255.0) as u8;
        data[idx + 2] = (alpha * c.b + beta).clamp(0.0, 255.0) as u8;
    })
}

/// Shift red up and blue down symmetrically (or vice versa for
/// negative values). Green is untouched. The shift is half the raw
/// parameter value.
pub fn temperature(src: &RgbaImage, value: f32) -> RgbaImage {
    let shift = value / 2.0;
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        data[idx] = (c.r + shift).clamp(0.0, 255.0) as u8;
        data[idx + 2] = (c.b - shift).clamp(0.0, 255.0) as u8;
    })
}

/// Shift the green channel only; red and blue are untouched.
pub fn tint(src: &RgbaImage, value: f32) -> RgbaImage {
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        data[idx + 1] = (c.g - value).clamp(0.0, 255.0) as u8;
    })
}

/// Pull non-max channels toward (or away from) the per-pixel max.
///
/// Positive values increase saturation: each channel below the pixel's
/// max channel moves further away from it by a proportional factor.
pub fn saturation_rgb(src: &RgbaImage, value: f32) -> RgbaImage {
    let correction = value * -0.01;
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        let max = c.r.max(c.g).max(c.b);
        let mut r = c.r;
        let mut g = c.g;
        let mut b = c.b;
        if r != max {
            r += (max - r) * correction;
        }
        if g != max {
            g += (max - g) * correction;
        }
        if b != max {
            b += (max - b) * correction;
        }
        data[idx] = r.clamp(0.0, 255.0) as u8;
        data[idx + 1] = g.clamp(0.0, 255.0) as u8;
        data[idx + 2] = b.clamp(0.0, 255.0) as u8;
    })
}

/// Rotate hue on a 0..100 wheel, wrapping modulo 100.
///
/// Converts each pixel to a hue/saturation/value representation,
/// rotates the hue, and converts back.
pub fn hue(src: &RgbaImage, value: f32) -> RgbaImage {
    src.map_pixels(|data, idx, _, _, x, y| {
        let c = src.get_pixel(x, y);
        let (h, s, v) = rgb_to_hsv(c.r, c.g, c.b);
        let h = (h * 100.0 + value).rem_euclid(100.0) / 100.0;
        let (r, g, b) = hsv_to_rgb(h, s, v);
        data[idx] = r.clamp(0.0, 255.0) as u8;
        data[idx + 1] = g.clamp(0.0, 255.0) as u8;
        data[idx + 2] = b.clamp(0.0, 255.0) as u8;
    })
}

/// RGB (0..255) to HSV with h in [0, 1), s and v in [0, 1].
fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    if delta == 0.0 {
        return (0.0, 0.0, v);
    }
    let s = delta / max;
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (sector / 6.0, s, v)
}

/// HSV (h, s, v in [0, 1]) back to RGB in 0..255.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (r * 255.0, g * 255.0, b * 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixedit_core::Color;

    fn test_image() -> RgbaImage {
        let mut img = RgbaImage::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                img.set_pixel(
                    x,
                    y,
                    Color::new(
                        (40 * (x + 1)) as f32,
                        (30 * (y + 1)) as f32,
                        (20 * (x + y + 1)) as f32,
                        255.0,
                    ),
                );
            }
        }
        img
    }

    #[test]
    fn test_exposure_zero_is_identity() {
        let src = test_image();
        assert_eq!(exposure(&src, 0.0), src);
    }

    #[test]
    fn test_exposure_doubles_at_100() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(50.0, 100.0, 200.0, 255.0));
        let out = exposure(&src, 100.0);
        let c = out.get_pixel(0, 0);
        assert_eq!(c.r, 100.0);
        assert_eq!(c.g, 200.0);
        assert_eq!(c.b, 255.0, "clamped");
        assert_eq!(c.a, 255.0);
    }

    #[test]
    fn test_brightness_adds() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(10.0, 250.0, 0.0, 255.0));
        let out = brightness(&src, 20.0);
        let c = out.get_pixel(0, 0);
        assert_eq!((c.r, c.g, c.b), (30.0, 255.0, 20.0));
    }

    #[test]
    fn test_contrast_midgray_fixed_point() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(128.0, 128.0, 128.0, 255.0));
        for value in [-100.0, -25.0, 0.0, 40.0, 100.0] {
            let c = contrast(&src, value).get_pixel(0, 0);
            assert!((c.r - 128.0).abs() <= 1.0, "value {value}: r = {}", c.r);
        }
    }

    #[test]
    fn test_contrast_spreads_extremes() {
        let mut src = RgbaImage::new(2, 1).unwrap();
        src.set_pixel(0, 0, Color::new(100.0, 100.0, 100.0, 255.0));
        src.set_pixel(1, 0, Color::new(156.0, 156.0, 156.0, 255.0));
        let out = contrast(&src, 100.0);
        assert!(out.get_pixel(0, 0).r < 100.0);
        assert!(out.get_pixel(1, 0).r > 156.0);
    }

    #[test]
    fn test_temperature_shifts_red_and_blue() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(100.0, 100.0, 100.0, 255.0));
        let warm = temperature(&src, 40.0).get_pixel(0, 0);
        assert_eq!((warm.r, warm.g, warm.b), (120.0, 100.0, 80.0));
        let cool = temperature(&src, -40.0).get_pixel(0, 0);
        assert_eq!((cool.r, cool.g, cool.b), (80.0, 100.0, 120.0));
    }

    #[test]
    fn test_tint_touches_green_only() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(100.0, 100.0, 100.0, 255.0));
        let c = tint(&src, 30.0).get_pixel(0, 0);
        assert_eq!((c.r, c.g, c.b), (100.0, 70.0, 100.0));
    }

    #[test]
    fn test_saturation_pulls_away_from_max() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(200.0, 100.0, 100.0, 255.0));
        let more = saturation_rgb(&src, 50.0).get_pixel(0, 0);
        assert_eq!(more.r, 200.0, "max channel unchanged");
        assert!(more.g < 100.0);
        assert!(more.b < 100.0);

        let less = saturation_rgb(&src, -50.0).get_pixel(0, 0);
        assert!(less.g > 100.0, "desaturation moves toward max");
    }

    #[test]
    fn test_saturation_zero_is_identity() {
        let src = test_image();
        assert_eq!(saturation_rgb(&src, 0.0), src);
    }

    #[test]
    fn test_hue_full_rotation_wraps() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(200.0, 60.0, 30.0, 255.0));
        let c = hue(&src, 100.0).get_pixel(0, 0);
        let orig = src.get_pixel(0, 0);
        assert!((c.r - orig.r).abs() <= 1.0);
        assert!((c.g - orig.g).abs() <= 1.0);
        assert!((c.b - orig.b).abs() <= 1.0);
    }

    #[test]
    fn test_hue_rotation_moves_red_toward_green() {
        let mut src = RgbaImage::new(1, 1).unwrap();
        src.set_pixel(0, 0, Color::new(255.0, 0.0, 0.0, 255.0));
        // A third of the wheel turns pure red into pure green.
        let c = hue(&src, 100.0 / 3.0).get_pixel(0, 0);
        assert!(c.g > 200.0, "g = {}", c.g);
        assert!(c.r < 50.0, "r = {}", c.r);
    }

    #[test]
    fn test_hsv_round_trip() {
        for (r, g, b) in [
            (255.0, 0.0, 0.0),
            (0.0, 255.0, 0.0),
            (0.0, 0.0, 255.0),
            (128.0, 64.0, 32.0),
            (10.0, 200.0, 150.0),
        ] {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            let (rr, gg, bb) = hsv_to_rgb(h, s, v);
            assert!((rr - r).abs() < 1.0, "({r},{g},{b}) -> r {rr}");
            assert!((gg - g).abs() < 1.0, "({r},{g},{b}) -> g {gg}");
            assert!((bb - b).abs() < 1.0, "({r},{g},{b}) -> b {bb}");
        }
    }
}
