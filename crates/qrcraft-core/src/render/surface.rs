//! The drawing surface owned by one composition.

use image::RgbaImage;
use thiserror::Error;

use crate::decode::LogoOverlay;
use crate::encode::ModuleMatrix;
use crate::export::{encode_png, ExportError, OutputImage};
use crate::Rgba;

/// Largest surface side accepted, in pixels.
///
/// Keeps the `pixel_size² × 4` byte buffer addressable with a 32-bit `usize`.
pub const MAX_PIXEL_SIZE: u32 = 4096;

/// Errors that can occur while rasterizing a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// The requested surface has no pixels.
    #[error("Invalid pixel size: must be greater than zero")]
    InvalidPixelSize,

    /// The requested surface exceeds [`MAX_PIXEL_SIZE`].
    #[error("Pixel size {pixel_size} exceeds the maximum of {max}px")]
    PixelSizeTooLarge { pixel_size: u32, max: u32 },
}

/// A square RGBA pixel buffer holding one rendered QR code.
///
/// A new surface is allocated for every composition; nothing is shared
/// between calls.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Draw `matrix` onto a fresh `pixel_size x pixel_size` surface.
    ///
    /// # Arguments
    ///
    /// * `matrix` - The encoded symbol
    /// * `pixel_size` - Side length of the output in pixels
    /// * `margin` - Quiet zone width in modules, on every side
    /// * `dark` - Color of dark modules
    /// * `light` - Color of light modules and the margin
    ///
    /// # Algorithm
    ///
    /// With `total = width + 2 * margin` and `scale = pixel_size / total`,
    /// pixel `(x, y)` inside the scaled margin samples module
    /// `floor((x - margin * scale) / scale)`; everything else is `light`.
    /// When `scale < 1` several modules share a pixel and the sampled one
    /// wins, so the output keeps the requested size.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidPixelSize`] for a zero size and
    /// [`RasterError::PixelSizeTooLarge`] above [`MAX_PIXEL_SIZE`].
    pub fn rasterize(
        matrix: &ModuleMatrix,
        pixel_size: u32,
        margin: u32,
        dark: Rgba,
        light: Rgba,
    ) -> Result<Self, RasterError> {
        if pixel_size == 0 {
            return Err(RasterError::InvalidPixelSize);
        }
        if pixel_size > MAX_PIXEL_SIZE {
            return Err(RasterError::PixelSizeTooLarge {
                pixel_size,
                max: MAX_PIXEL_SIZE,
            });
        }

        let width = matrix.width() as u32;
        let total = width.saturating_add(margin.saturating_mul(2));

        let scale = pixel_size as f64 / total as f64;
        let scaled_margin = margin as f64 * scale;
        let inner_end = pixel_size as f64 - scaled_margin;
        let last = matrix.width() - 1;

        // Precompute the module index for each pixel column/row.
        let module_at: Vec<Option<usize>> = (0..pixel_size)
            .map(|p| {
                let p = p as f64;
                if p >= scaled_margin && p < inner_end {
                    Some((((p - scaled_margin) / scale).floor() as usize).min(last))
                } else {
                    None
                }
            })
            .collect();

        let dark_px = dark.to_pixel();
        let light_px = light.to_pixel();

        let image = RgbaImage::from_fn(pixel_size, pixel_size, |x, y| {
            match (module_at[x as usize], module_at[y as usize]) {
                (Some(mx), Some(my)) if matrix.is_dark(mx, my) => dark_px,
                _ => light_px,
            }
        });

        log::debug!(
            "Rasterized {}x{} modules (margin {}) onto {}px surface, scale {:.3}",
            width,
            width,
            margin,
            pixel_size,
            scale
        );

        Ok(Self { image })
    }

    /// Composite a logo centered on the surface.
    ///
    /// The logo is resized to a fifth of the surface side and drawn
    /// source-over, so opaque logo pixels replace the modules beneath them.
    /// No quiet zone is kept around the logo; a large logo can make the code
    /// unscannable.
    pub fn overlay_logo(&mut self, logo: &LogoOverlay) {
        let side = self.size();
        let Some(placement) = LogoOverlay::placement(side) else {
            log::warn!("Skipping logo overlay: {side}px surface is too small for a logo");
            return;
        };

        let scaled = logo.scaled(placement.size);
        image::imageops::overlay(
            &mut self.image,
            &scaled,
            i64::from(placement.x),
            i64::from(placement.y),
        );

        log::debug!(
            "Overlaid {}x{} logo at ({}, {})",
            placement.size,
            placement.size,
            placement.x,
            placement.y
        );
    }

    /// Encode the surface as PNG.
    pub fn export_png(&self) -> Result<OutputImage, ExportError> {
        encode_png(&self.image)
    }

    /// Side length in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        Rgba::new(r, g, b, a)
    }

    /// Borrow the underlying image buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
