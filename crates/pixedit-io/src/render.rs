//! Render boundary
//!
//! Committing a buffer to a display surface goes through a
//! [`RenderTarget`] collaborator. The core transfers the raw bytes
//! unchanged and never draws anything itself.

use pixedit_core::RgbaImage;

use crate::{IoError, IoResult};

/// A writable display surface.
pub trait RenderTarget {
    /// Prepare a same-size writable target.
    ///
    /// Returns [`IoError::SurfaceUnavailable`] when the surface cannot
    /// be acquired.
    fn begin_frame(&mut self, width: u32, height: u32) -> IoResult<()>;

    /// Commit raw RGBA bytes, `width * height * 4` of them.
    fn commit_rgba(&mut self, data: &[u8]) -> IoResult<()>;
}

/// Present an image on a target.
///
/// An unavailable surface is a recoverable condition: it is reported
/// on stderr and the call becomes a no-op. All other errors propagate.
pub fn render(img: &RgbaImage, target: &mut dyn RenderTarget) -> IoResult<()> {
    match target.begin_frame(img.width(), img.height()) {
        Err(IoError::SurfaceUnavailable) => {
            eprintln!("render target surface not available, skipping render");
            return Ok(());
        }
        other => other?,
    }
    target.commit_rgba(img.data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryTarget {
        size: Option<(u32, u32)>,
        committed: Vec<u8>,
        available: bool,
    }

    impl RenderTarget for MemoryTarget {
        fn begin_frame(&mut self, width: u32, height: u32) -> IoResult<()> {
            if !self.available {
                return Err(IoError::SurfaceUnavailable);
            }
            self.size = Some((width, height));
            Ok(())
        }

        fn commit_rgba(&mut self, data: &[u8]) -> IoResult<()> {
            self.committed = data.to_vec();
            Ok(())
        }
    }

    #[test]
    fn test_render_transfers_bytes_unchanged() {
        let img = RgbaImage::from_bytes(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let mut target = MemoryTarget {
            available: true,
            ..Default::default()
        };
        render(&img, &mut target).unwrap();
        assert_eq!(target.size, Some((2, 1)));
        assert_eq!(target.committed, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_render_missing_surface_is_a_no_op() {
        let img = RgbaImage::new(2, 2).unwrap();
        let mut target = MemoryTarget::default();
        render(&img, &mut target).unwrap();
        assert!(target.committed.is_empty());
    }
}
