//! RGBA image buffer
//!
//! The `RgbaImage` structure is the fundamental image type in pixedit.
//! It owns a flat byte vector of interleaved R,G,B,A samples in
//! row-major order; pixel `(x, y)` lives at byte offset `(y*w + x) * 4`.
//!
//! # Invariants
//!
//! - `data.len() == w * h * 4` at all times.
//! - Stored bytes are the source of truth for all pixel math; any
//!   display-side handle belongs to the render adapter, not the buffer.
//!
//! # Ownership model
//!
//! Filters read an immutable source buffer and build a separate
//! destination via [`RgbaImage::map_pixels`]; the only mutating entry
//! point is the in-place [`RgbaImage::apply`] transform.

use crate::color::Color;
use crate::error::{Error, Result};

/// In-memory RGBA pixel buffer with explicit width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    w: u32,
    h: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Create a zero-filled buffer (fully transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimension {
                width: w,
                height: h,
            });
        }
        let len = w as usize * h as usize * 4;
        Ok(RgbaImage {
            w,
            h,
            data: vec![0; len],
        })
    }

    /// Create a buffer from existing interleaved RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `data.len() != w*h*4` — the
    /// buffer never silently truncates or overreads caller bytes.
    pub fn from_bytes(w: u32, h: u32, data: Vec<u8>) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimension {
                width: w,
                height: h,
            });
        }
        let expected = w as usize * h as usize * 4;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbaImage { w, h, data })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.w
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.h
    }

    /// Raw access to the interleaved RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the interleaved RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.w as usize + x as usize) * 4
    }

    /// Read the pixel at (x, y).
    ///
    /// Out-of-range coordinates are a programming error and panic via
    /// slice indexing; callers are expected to stay in bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        let idx = self.offset(x, y);
        Color::new(
            self.data[idx] as f32,
            self.data[idx + 1] as f32,
            self.data[idx + 2] as f32,
            self.data[idx + 3] as f32,
        )
    }

    /// Write the pixel at (x, y).
    ///
    /// Channels are stored with a saturating `as u8` cast; callers
    /// must clamp beforehand when exact values matter.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Color) {
        let idx = self.offset(x, y);
        self.data[idx] = c.r as u8;
        self.data[idx + 1] = c.g as u8;
        self.data[idx + 2] = c.b as u8;
        self.data[idx + 3] = c.a as u8;
    }

    /// Bilinear sample at real-valued coordinates.
    ///
    /// Blends the four pixels surrounding the point, using floor/ceil
    /// neighbors and the fractional offsets as weights, then clamps the
    /// result to correct floating rounding drift. Coordinates must lie
    /// in `[0, w-1] x [0, h-1]`; sampling outside is undefined and
    /// callers must pre-clamp.
    pub fn sample(&self, x: f32, y: f32) -> Color {
        let lx = x.floor() as u32;
        let rx = x.ceil() as u32;
        let ty = y.floor() as u32;
        let dy = y.ceil() as u32;
        let fx = x - lx as f32;
        let fy = y - ty as f32;

        let mut c = self
            .get_pixel(lx, ty)
            .mul((1.0 - fy) * (1.0 - fx))
            .add(self.get_pixel(lx, dy).mul(fy * (1.0 - fx)))
            .add(self.get_pixel(rx, ty).mul((1.0 - fy) * fx))
            .add(self.get_pixel(rx, dy).mul(fy * fx));
        c.clamp();
        c
    }

    /// In-place per-pixel transform.
    ///
    /// Replaces every pixel with `f(pixel)` in row-major order. Pixels
    /// are overwritten as visited, so `f` must not depend on
    /// neighboring pixels.
    pub fn apply<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(Color) -> Color,
    {
        for y in 0..self.h {
            for x in 0..self.w {
                let c = f(self.get_pixel(x, y));
                self.set_pixel(x, y, c);
            }
        }
        self
    }

    /// Transform to a new buffer through a per-pixel byte callback.
    ///
    /// The destination starts as a byte copy of this buffer, then `f`
    /// is invoked once per pixel with the destination bytes, the
    /// current byte offset, the dimensions, and (x, y). The callback
    /// writes R,G,B at the offset; alpha is preserved from the copy.
    ///
    /// This is the backbone of the filter catalog: filters read only
    /// from the immutable source pixels and never observe their own
    /// partial writes. The callback is invoked allocation-free in the
    /// pixel loop.
    pub fn map_pixels<F>(&self, mut f: F) -> RgbaImage
    where
        F: FnMut(&mut [u8], usize, u32, u32, u32, u32),
    {
        let mut dst = RgbaImage {
            w: self.w,
            h: self.h,
            data: self.data.clone(),
        };
        let mut idx = 0usize;
        for y in 0..self.h {
            for x in 0..self.w {
                f(&mut dst.data, idx, self.w, self.h, x, y);
                idx += 4;
            }
        }
        dst
    }

    /// Bilinear resize to a new buffer.
    ///
    /// Output coordinates step by `1/(dim-1)` in each axis, so the four
    /// corner output pixels map exactly onto the four corner input
    /// pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either target dimension
    /// is below 2 (the corner step would divide by zero).
    pub fn resize(&self, w: u32, h: u32) -> Result<RgbaImage> {
        if w < 2 || h < 2 {
            return Err(Error::InvalidDimension {
                width: w,
                height: h,
            });
        }
        let mut dst = RgbaImage::new(w, h)?;
        let sw = (self.w - 1) as f32;
        let sh = (self.h - 1) as f32;
        for i in 0..h {
            let y = i as f32 / (h - 1) as f32 * sh;
            for j in 0..w {
                let x = j as f32 / (w - 1) as f32 * sw;
                dst.set_pixel(j, i, self.sample(x, y));
            }
        }
        Ok(dst)
    }

    /// Scale so the longer edge equals `max_edge`, preserving aspect
    /// ratio; the shorter edge is rounded to the nearest integer.
    ///
    /// The target size is computed once from the original dimensions,
    /// so the two axis checks can never both fire against an already
    /// mutated dimension. A no-op copy is returned when the image is
    /// already within bound on both axes.
    pub fn resize_to_long_edge(&self, max_edge: u32) -> Result<RgbaImage> {
        if self.w <= max_edge && self.h <= max_edge {
            return Ok(self.clone());
        }
        let (nw, nh) = if self.w >= self.h {
            let nh = (max_edge as f32 / self.w as f32 * self.h as f32).round() as u32;
            (max_edge, nh)
        } else {
            let nw = (max_edge as f32 / self.h as f32 * self.w as f32).round() as u32;
            (nw, max_edge)
        };
        self.resize(nw, nh)
    }
}
