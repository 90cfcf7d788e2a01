//! pixedit-io - Decode, render and texture adapters
//!
//! The editor core works on [`pixedit_core::RgbaImage`] buffers and
//! delegates everything at the host boundary to small collaborator
//! traits defined here:
//!
//! - [`PixelSource`] hands the core decoded RGBA bytes
//! - [`RenderTarget`] receives raw bytes for display
//! - [`TextureUnit`] receives raw bytes as a GPU texture
//!
//! PNG decode/encode ships behind the default `png-format` feature as
//! the concrete [`PixelSource`]-side adapter.

mod error;
pub mod render;
pub mod source;
pub mod texture;

#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use render::{RenderTarget, render};
pub use source::{PixelSource, from_source, load_limited};
pub use texture::{TextureUnit, upload_texture};

#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};
