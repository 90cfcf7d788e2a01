//! Convolution kernels
//!
//! Defines the square-weight matrix used by the convolution engine.
//! Kernels carry no normalization invariant: callers produce weights
//! that sum appropriately for the intended effect (sharpening kernels
//! deliberately sum to 1, blur kernels average, and unnormalized
//! kernels are valid).

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel with odd dimensions, centered at
/// `(width/2, height/2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is
    /// zero or even, or if `data.len() != width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be odd, got {width}x{height}"
            )));
        }
        let expected = (width * height) as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "kernel data length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// The 3x3 identity kernel (pass-through convolution).
    pub fn identity() -> Self {
        Kernel {
            width: 3,
            height: 3,
            data: vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.width / 2
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.height / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the weight at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y * self.width + x) as usize]
    }

    /// Sum of all kernel weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_rejects_even_dims() {
        assert!(Kernel::from_slice(2, 3, &[0.0; 6]).is_err());
        assert!(Kernel::from_slice(3, 4, &[0.0; 12]).is_err());
        assert!(Kernel::from_slice(0, 3, &[]).is_err());
    }

    #[test]
    fn test_from_slice_rejects_bad_length() {
        assert!(Kernel::from_slice(3, 3, &[1.0; 8]).is_err());
    }

    #[test]
    fn test_identity_kernel() {
        let k = Kernel::identity();
        assert_eq!(k.width(), 3);
        assert_eq!(k.height(), 3);
        assert_eq!(k.center_x(), 1);
        assert_eq!(k.center_y(), 1);
        assert_eq!(k.get(1, 1), 1.0);
        assert_eq!(k.sum(), 1.0);
    }

    #[test]
    fn test_get_row_major() {
        let k = Kernel::from_slice(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        assert_eq!(k.get(2, 0), 3.0);
        assert_eq!(k.get(0, 2), 7.0);
        assert_eq!(k.sum(), 45.0);
    }
}
