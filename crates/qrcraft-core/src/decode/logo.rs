//! Decoded logo bitmap.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbaImage};

use super::{LogoError, LogoPlacement};

/// A decoded logo, owned by the pipeline for one composition.
#[derive(Debug, Clone)]
pub struct LogoOverlay {
    image: RgbaImage,
}

impl LogoOverlay {
    /// Decode a logo from raw file bytes.
    ///
    /// The format is detected from the content, not a file name.
    ///
    /// # Errors
    ///
    /// Returns `LogoError::Empty` for empty input,
    /// `LogoError::UnsupportedFormat` if the format is not recognized and
    /// `LogoError::Decode` if the image is corrupted or truncated.
    pub fn decode(bytes: &[u8]) -> Result<Self, LogoError> {
        if bytes.is_empty() {
            return Err(LogoError::Empty);
        }

        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| LogoError::Decode(e.to_string()))?;

        if reader.format().is_none() {
            return Err(LogoError::UnsupportedFormat);
        }

        let img = reader
            .decode()
            .map_err(|e| LogoError::Decode(e.to_string()))?;

        Ok(Self::from_image(img))
    }

    /// Wrap an already decoded image.
    pub fn from_image(img: DynamicImage) -> Self {
        Self {
            image: img.into_rgba8(),
        }
    }

    /// Wrap an RGBA buffer.
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Placement of the logo on a surface of `surface_size` pixels.
    pub fn placement(surface_size: u32) -> Option<LogoPlacement> {
        LogoPlacement::centered(surface_size)
    }

    /// The logo stretched to `size x size` with bilinear filtering.
    ///
    /// Non-square logos are not letterboxed.
    pub fn scaled(&self, size: u32) -> RgbaImage {
        if self.image.dimensions() == (size, size) {
            return self.image.clone();
        }
        image::imageops::resize(&self.image, size, size, FilterType::Triangle)
    }
}
