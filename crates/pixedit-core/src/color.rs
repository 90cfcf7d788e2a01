//! Four-channel color value
//!
//! A pure value type used by pixel arithmetic. Channels hold `f32`
//! values that are conceptually in [0, 255] but may leave that range
//! during intermediate math; [`Color::clamp`] must be called before
//! the value is stored back into a buffer.

/// An RGBA color with floating-point channels.
///
/// `mul` and `add` do not clamp; they are used by the bilinear sampler
/// to blend four neighboring pixels with weights that sum to 1, after
/// which `clamp` corrects any rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from four channel values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Scale all four channels by `factor`. Does not clamp.
    #[inline]
    pub fn mul(self, factor: f32) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }

    /// Channel-wise sum with `other`. Does not clamp.
    #[inline]
    pub fn add(self, other: Color) -> Color {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
            a: self.a + other.a,
        }
    }

    /// Clamp each channel independently into [0, 255]. Idempotent.
    #[inline]
    pub fn clamp(&mut self) {
        self.r = self.r.clamp(0.0, 255.0);
        self.g = self.g.clamp(0.0, 255.0);
        self.b = self.b.clamp(0.0, 255.0);
        self.a = self.a.clamp(0.0, 255.0);
    }
}
