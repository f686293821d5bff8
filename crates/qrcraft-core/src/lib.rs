//! qrcraft Core - QR code composition library
//!
//! This crate provides the core functionality behind the qrcraft web form:
//! encoding text into a QR symbol, rasterizing it with custom colors, size
//! and margin, overlaying an optional logo and exporting the result as PNG.

pub mod color;
pub mod decode;
pub mod encode;
pub mod export;
pub mod form;
pub mod pipeline;
pub mod render;

pub use color::{ColorError, Rgba};
pub use decode::{LogoError, LogoOverlay, LogoPlacement};
pub use encode::{encode_matrix, EncodingError, ModuleMatrix};
pub use export::{ExportError, OutputImage};
pub use form::{FormError, QrForm};
pub use pipeline::{compose, compose_with_overlay, ComposeError};
pub use render::{RasterError, RasterSurface, MAX_PIXEL_SIZE};

/// Output sizes offered by the form, in pixels.
pub const PIXEL_SIZE_PRESETS: [u32; 4] = [150, 200, 300, 400];

/// Largest margin, in modules, the form allows.
pub const MAX_MARGIN: u32 = 10;

/// Content and display options for one QR code.
///
/// Deserializes from the camelCase object the web form sends; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodingRequest {
    /// Text or URL to encode. Empty content produces no image.
    pub content: String,
    /// Color of dark modules
    pub dark_color: Rgba,
    /// Color of light modules and the margin
    pub light_color: Rgba,
    /// Leave light pixels fully transparent instead of `light_color`
    pub transparent_background: bool,
    /// Side length of the output image in pixels
    pub pixel_size: u32,
    /// Quiet zone around the symbol, in modules
    pub margin: u32,
}

impl Default for EncodingRequest {
    fn default() -> Self {
        Self {
            content: String::new(),
            dark_color: Rgba::BLACK,
            light_color: Rgba::WHITE,
            transparent_background: false,
            pixel_size: 300,
            margin: 2,
        }
    }
}

impl EncodingRequest {
    /// Create a request for `content` with default options.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Whether there is nothing to encode
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The color light pixels are actually painted with.
    pub fn effective_light_color(&self) -> Rgba {
        if self.transparent_background {
            Rgba::TRANSPARENT
        } else {
            self.light_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = EncodingRequest::default();
        assert!(req.is_empty());
        assert_eq!(req.dark_color, Rgba::BLACK);
        assert_eq!(req.light_color, Rgba::WHITE);
        assert!(!req.transparent_background);
        assert_eq!(req.pixel_size, 300);
        assert_eq!(req.margin, 2);
    }

    #[test]
    fn test_effective_light_color() {
        let mut req = EncodingRequest::new("hi");
        req.light_color = Rgba::rgb(1, 2, 3);
        assert_eq!(req.effective_light_color(), Rgba::rgb(1, 2, 3));

        req.transparent_background = true;
        assert_eq!(req.effective_light_color(), Rgba::TRANSPARENT);
        // The chosen color is kept for when the checkbox is cleared
        assert_eq!(req.light_color, Rgba::rgb(1, 2, 3));
    }

    #[test]
    fn test_presets_are_sorted_and_within_margin_bounds() {
        assert!(PIXEL_SIZE_PRESETS.windows(2).all(|w| w[0] < w[1]));
        assert!(PIXEL_SIZE_PRESETS.contains(&EncodingRequest::default().pixel_size));
        assert!(EncodingRequest::default().margin <= MAX_MARGIN);
    }
}
