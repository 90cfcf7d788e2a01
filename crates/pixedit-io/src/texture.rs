//! GPU texture upload boundary
//!
//! Thin contract for handing a buffer to a GPU context. No rendering
//! is performed here.

use pixedit_core::RgbaImage;

use crate::IoResult;

/// A bound GPU texture slot.
pub trait TextureUnit {
    /// Select nearest-neighbor filtering and clamp-to-edge wrapping.
    fn configure_nearest_clamped(&mut self);

    /// Upload raw RGBA bytes, 8 bits per channel.
    fn upload_rgba(&mut self, width: u32, height: u32, data: &[u8]) -> IoResult<()>;
}

/// Configure sampling and upload an image as an RGBA texture.
pub fn upload_texture(img: &RgbaImage, unit: &mut dyn TextureUnit) -> IoResult<()> {
    unit.configure_nearest_clamped();
    unit.upload_rgba(img.width(), img.height(), img.data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingUnit {
        configured: bool,
        uploaded: Option<(u32, u32, Vec<u8>)>,
    }

    impl TextureUnit for RecordingUnit {
        fn configure_nearest_clamped(&mut self) {
            self.configured = true;
        }

        fn upload_rgba(&mut self, width: u32, height: u32, data: &[u8]) -> IoResult<()> {
            assert!(self.configured, "sampling configured before upload");
            self.uploaded = Some((width, height, data.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_upload_configures_then_transfers() {
        let img = RgbaImage::from_bytes(1, 2, vec![9, 8, 7, 6, 5, 4, 3, 2]).unwrap();
        let mut unit = RecordingUnit::default();
        upload_texture(&img, &mut unit).unwrap();
        let (w, h, data) = unit.uploaded.unwrap();
        assert_eq!((w, h), (1, 2));
        assert_eq!(data, vec![9, 8, 7, 6, 5, 4, 3, 2]);
    }
}
