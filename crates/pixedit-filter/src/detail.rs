//! Convolution-backed detail filters
//!
//! Clarity and sharpness both reduce to selecting a fixed 3x3 kernel
//! from the parameter value and running it through the convolution
//! engine.

use pixedit_core::RgbaImage;

use crate::FilterResult;
use crate::convolve::convolve;
use crate::kernel::Kernel;

/// Local-contrast adjustment.
///
/// The raw parameter is normalized by 80. Zero selects the identity
/// kernel, positive values a contrast-boosting kernel whose strength
/// grows with the value, negative values a smoothing kernel.
pub fn clarity(src: &RgbaImage, value: f32) -> FilterResult<RgbaImage> {
    let v = value / 80.0;
    let weights: [f32; 9] = if v == 0.0 {
        [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]
    } else if v > 0.0 {
        [
            0.0,
            -0.5,
            v.abs() / 5.0,
            -0.5 + v.abs() / 50.0,
            2.9,
            -0.5 + v.abs() / 50.0,
            0.0,
            -0.5,
            0.0,
        ]
    } else {
        [
            0.1,
            0.1,
            0.1,
            0.1,
            0.19 + v.abs() / 50.0,
            0.1,
            0.1,
            0.1,
            0.1,
        ]
    };
    let kernel = Kernel::from_slice(3, 3, &weights)?;
    Ok(convolve(src, &kernel))
}

/// Banded sharpen/blur.
///
/// The parameter selects one of six fixed kernels by threshold band:
/// heavy blur below -20, light blur in [-20,-10), identity in [-10,0],
/// then mild, medium and strong sharpening at 30 and 70.
pub fn sharpness(src: &RgbaImage, value: f32) -> FilterResult<RgbaImage> {
    #[rustfmt::skip]
    let weights: [f32; 9] = if value < -20.0 {
        // box blur
        [
            1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0,
            1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0,
            1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0,
        ]
    } else if value < -10.0 {
        // binomial blur
        [
            1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
            1.0 / 8.0,  1.0 / 4.0, 1.0 / 8.0,
            1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
        ]
    } else if value <= 0.0 {
        [
            0.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 0.0,
        ]
    } else if value <= 30.0 {
        [
             0.0, -0.5,  0.0,
            -0.5,  3.0, -0.5,
             0.0, -0.5,  0.0,
        ]
    } else if value <= 70.0 {
        [
             0.0, -1.0,  0.0,
            -1.0,  5.0, -1.0,
             0.0, -1.0,  0.0,
        ]
    } else {
        [
            -1.0, -1.0, -1.0,
            -1.0,  9.0, -1.0,
            -1.0, -1.0, -1.0,
        ]
    };
    let kernel = Kernel::from_slice(3, 3, &weights)?;
    Ok(convolve(src, &kernel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixedit_core::Color;

    fn speckle() -> RgbaImage {
        // Uniform gray with one bright pixel in the middle.
        let mut img = RgbaImage::new(5, 5).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                img.set_pixel(x, y, Color::new(100.0, 100.0, 100.0, 255.0));
            }
        }
        img.set_pixel(2, 2, Color::new(200.0, 200.0, 200.0, 255.0));
        img
    }

    #[test]
    fn test_clarity_zero_is_identity() {
        let src = speckle();
        assert_eq!(clarity(&src, 0.0).unwrap(), src);
    }

    #[test]
    fn test_clarity_positive_boosts_local_contrast() {
        let src = speckle();
        let out = clarity(&src, 40.0).unwrap();
        assert!(out.get_pixel(2, 2).r > 200.0);
    }

    #[test]
    fn test_clarity_negative_smooths() {
        let src = speckle();
        let out = clarity(&src, -40.0).unwrap();
        assert!(out.get_pixel(2, 2).r < 200.0);
    }

    #[test]
    fn test_sharpness_identity_band() {
        let src = speckle();
        for value in [-10.0, -5.0, 0.0] {
            assert_eq!(sharpness(&src, value).unwrap(), src, "value {value}");
        }
    }

    #[test]
    fn test_sharpness_blur_bands_spread_speckle() {
        let src = speckle();
        for value in [-15.0, -50.0] {
            let out = sharpness(&src, value).unwrap();
            assert!(out.get_pixel(2, 2).r < 200.0, "value {value}");
            assert!(out.get_pixel(1, 2).r > 100.0, "value {value}");
        }
    }

    #[test]
    fn test_sharpness_sharpen_bands_increase_with_value() {
        let src = speckle();
        let mild = sharpness(&src, 20.0).unwrap().get_pixel(2, 2).r;
        let medium = sharpness(&src, 50.0).unwrap().get_pixel(2, 2).r;
        let strong = sharpness(&src, 90.0).unwrap().get_pixel(2, 2).r;
        assert!(mild > 200.0);
        assert!(medium >= mild);
        assert!(strong >= medium);
    }

    #[test]
    fn test_detail_filters_leave_source_unmodified() {
        let src = speckle();
        let before = src.clone();
        let _ = clarity(&src, 30.0).unwrap();
        let _ = sharpness(&src, 50.0).unwrap();
        assert_eq!(src, before);
    }
}
