//! Decode boundary
//!
//! The core never fetches or decodes files itself; it asks a
//! [`PixelSource`] collaborator for dimensions and raw RGBA bytes.

use pixedit_core::RgbaImage;

use crate::{IoError, IoResult};

/// A decoded image source: the host decoder collaborator.
///
/// Implementors hand over width, height and the pixel bytes in
/// interleaved RGBA order, 8 bits per channel. Fetching the encoded
/// data (file, network) is the implementor's concern.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Raw pixel contents, `width * height * 4` bytes in RGBA order.
    fn read_rgba(&self) -> IoResult<Vec<u8>>;
}

/// Build an [`RgbaImage`] from a decoded source.
///
/// The byte length is validated against the advertised dimensions; a
/// short or oversized buffer fails fast rather than truncating.
pub fn from_source(source: &dyn PixelSource) -> IoResult<RgbaImage> {
    let data = source.read_rgba()?;
    RgbaImage::from_bytes(source.width(), source.height(), data).map_err(IoError::Core)
}

/// Decode and clamp to a maximum long edge in one step.
///
/// Images already within the bound are returned at their original
/// size.
pub fn load_limited(source: &dyn PixelSource, max_edge: u32) -> IoResult<RgbaImage> {
    let img = from_source(source)?;
    img.resize_to_long_edge(max_edge).map_err(IoError::Core)
}
