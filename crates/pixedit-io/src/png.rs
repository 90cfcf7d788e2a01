//! PNG image format support
//!
//! Concrete decode/encode adapter used by tests and CLI-style callers.
//! Everything decodes into the editor's single RGBA representation;
//! gray and gray+alpha and RGB inputs are expanded on read.

use crate::{IoError, IoResult};
use pixedit_core::RgbaImage;
use ::png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read an 8-bit PNG image and expand it to RGBA.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbaImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + x as usize * samples;
            match color_type {
                ColorType::Grayscale => {
                    let v = data[idx];
                    rgba.extend_from_slice(&[v, v, v, 255]);
                }
                ColorType::GrayscaleAlpha => {
                    let v = data[idx];
                    rgba.extend_from_slice(&[v, v, v, data[idx + 1]]);
                }
                ColorType::Rgb => {
                    rgba.extend_from_slice(&[data[idx], data[idx + 1], data[idx + 2], 255]);
                }
                ColorType::Rgba => {
                    rgba.extend_from_slice(&data[idx..idx + 4]);
                }
                _ => unreachable!(),
            }
        }
    }

    RgbaImage::from_bytes(width, height, rgba).map_err(IoError::Core)
}

/// Write an image as an 8-bit RGBA PNG.
pub fn write_png<W: Write>(img: &RgbaImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, img.width(), img.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(img.data())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;
    Ok(())
}
