//! Convolution engine
//!
//! Applies an odd-sized 2D kernel to every pixel of an RGBA buffer.
//! Kernel taps that fall outside the buffer contribute zero (black),
//! not a mirrored or edge-clamped sample; edges therefore darken
//! asymmetrically under averaging kernels. This is deliberate and must
//! be preserved for compatibility with existing kernel definitions.
//!
//! Only R, G and B are processed; alpha is always copied through from
//! the source untouched.

use crate::Kernel;
use pixedit_core::RgbaImage;

/// Convolve an RGBA buffer with a kernel, producing a new buffer.
///
/// For every output pixel, sums `weight(dy,dx) * channel(x+dx, y+dy)`
/// over the centered kernel footprint, then clamps each of R,G,B
/// independently into [0, 255].
pub fn convolve(src: &RgbaImage, kernel: &Kernel) -> RgbaImage {
    let w = src.width() as i32;
    let h = src.height() as i32;
    let kw = kernel.width() as i32;
    let kh = kernel.height() as i32;
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;

    src.map_pixels(|data, idx, _, _, x, y| {
        let mut sum_r = 0.0f32;
        let mut sum_g = 0.0f32;
        let mut sum_b = 0.0f32;

        for ky in 0..kh {
            for kx in 0..kw {
                let sx = x as i32 + kx - kcx;
                let sy = y as i32 + ky - kcy;
                if sx < 0 || sx >= w || sy < 0 || sy >= h {
                    // out-of-bounds taps are black
                    continue;
                }
                let weight = kernel.get(kx as u32, ky as u32);
                let c = src.get_pixel(sx as u32, sy as u32);
                sum_r += weight * c.r;
                sum_g += weight * c.g;
                sum_b += weight * c.b;
            }
        }

        data[idx] = sum_r.round().clamp(0.0, 255.0) as u8;
        data[idx + 1] = sum_g.round().clamp(0.0, 255.0) as u8;
        data[idx + 2] = sum_b.round().clamp(0.0, 255.0) as u8;
    })
}
