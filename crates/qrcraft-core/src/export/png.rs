//! PNG encoding for display and download.
//!
//! This module provides PNG encoding using the `image` crate's PNG encoder.
//! The output is deterministic: the same surface always encodes to the same
//! bytes.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Png(String),
}

/// A finished QR code image, encoded as PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputImage {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl OutputImage {
    /// Name offered for the downloaded file.
    pub const FILE_NAME: &'static str = "custom-qr-code.png";
    /// MIME type of the encoded bytes.
    pub const MIME_TYPE: &'static str = "image/png";

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The PNG file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:image/png;base64,...` URL usable as an image source and as a
    /// download link target.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", Self::MIME_TYPE, STANDARD.encode(&self.bytes))
    }
}

/// Encode an RGBA image to PNG bytes.
///
/// # Errors
///
/// Returns `ExportError::InvalidDimensions` for an empty image and
/// `ExportError::Png` if the encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<OutputImage, ExportError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidDimensions { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::Png(e.to_string()))?;

    let bytes = buffer.into_inner();
    log::debug!("Encoded {width}x{height} PNG ({} bytes)", bytes.len());

    Ok(OutputImage {
        width,
        height,
        bytes,
    })
}
