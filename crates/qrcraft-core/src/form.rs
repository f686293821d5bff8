//! Form state for the QR generator page.
//!
//! [`QrForm`] holds what the user has entered so far, the uploaded logo and
//! the last generated image. Setters apply the input-control limits (size
//! presets, margin range); [`QrForm::generate`] runs the pipeline and only
//! replaces the stored image when a new one was produced.

use thiserror::Error;

use crate::color::ColorError;
use crate::pipeline::{compose, ComposeError};
use crate::{EncodingRequest, OutputImage, Rgba, MAX_MARGIN, PIXEL_SIZE_PRESETS};

/// Errors raised by form setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A color field received an invalid hex string.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The size is not one of the offered presets.
    #[error("Unsupported QR size {0}px: expected one of 150, 200, 300, 400")]
    UnsupportedSize(u32),
}

/// The generator form: request fields, optional logo and last output.
#[derive(Debug, Clone, Default)]
pub struct QrForm {
    request: EncodingRequest,
    logo: Option<Vec<u8>>,
    output: Option<OutputImage>,
}

impl QrForm {
    /// Create a form with default options and no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form from a complete request, clamping the margin.
    ///
    /// The pixel size is taken as-is so callers can go beyond the presets.
    pub fn from_request(request: EncodingRequest) -> Self {
        let mut form = Self {
            request,
            ..Self::default()
        };
        form.set_margin(form.request.margin);
        form
    }

    pub fn request(&self) -> &EncodingRequest {
        &self.request
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.request.content = content.into();
    }

    pub fn set_dark_color(&mut self, hex: &str) -> Result<(), FormError> {
        self.request.dark_color = Rgba::from_hex(hex)?;
        Ok(())
    }

    pub fn set_light_color(&mut self, hex: &str) -> Result<(), FormError> {
        self.request.light_color = Rgba::from_hex(hex)?;
        Ok(())
    }

    pub fn set_transparent_background(&mut self, transparent: bool) {
        self.request.transparent_background = transparent;
    }

    /// Select an output size. Only [`PIXEL_SIZE_PRESETS`] are accepted.
    pub fn set_pixel_size(&mut self, pixel_size: u32) -> Result<(), FormError> {
        if !PIXEL_SIZE_PRESETS.contains(&pixel_size) {
            return Err(FormError::UnsupportedSize(pixel_size));
        }
        self.request.pixel_size = pixel_size;
        Ok(())
    }

    /// Set the margin in modules, clamped to `0..=MAX_MARGIN`.
    pub fn set_margin(&mut self, margin: u32) {
        self.request.margin = margin.min(MAX_MARGIN);
    }

    /// Store raw logo file bytes. They are decoded on the next generation.
    pub fn set_logo(&mut self, bytes: Vec<u8>) {
        self.logo = Some(bytes);
    }

    pub fn clear_logo(&mut self) {
        self.logo = None;
    }

    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Run the composition pipeline with the current fields.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when a new image replaced the stored one, `Ok(false)` when
    /// the content is empty (the previous image is kept).
    ///
    /// # Errors
    ///
    /// Any [`ComposeError`]; the previous image is kept.
    pub fn generate(&mut self) -> Result<bool, ComposeError> {
        match compose(&self.request, self.logo.as_deref())? {
            Some(image) => {
                self.output = Some(image);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The last generated image, if any.
    pub fn output(&self) -> Option<&OutputImage> {
        self.output.as_ref()
    }

    /// Data URL of the last generated image, if any.
    pub fn data_url(&self) -> Option<String> {
        self.output.as_ref().map(OutputImage::data_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::LogoError;

    #[test]
    fn test_new_form_has_no_output() {
        let form = QrForm::new();
        assert!(form.output().is_none());
        assert!(form.data_url().is_none());
        assert!(!form.has_logo());
    }

    #[test]
    fn test_generate_stores_output() {
        let mut form = QrForm::new();
        form.set_content("https://example.com");
        assert_eq!(form.generate(), Ok(true));

        let output = form.output().unwrap();
        assert_eq!(output.width(), 300);
        assert!(form.data_url().unwrap().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_empty_content_keeps_previous_output() {
        let mut form = QrForm::new();
        form.set_content("first");
        form.generate().unwrap();
        let before = form.output().cloned();

        form.set_content("");
        assert_eq!(form.generate(), Ok(false));
        assert_eq!(form.output().cloned(), before);
    }

    #[test]
    fn test_error_keeps_previous_output() {
        let mut form = QrForm::new();
        form.set_content("first");
        form.generate().unwrap();
        let before = form.output().cloned();

        form.set_logo(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(
            form.generate(),
            Err(ComposeError::Logo(LogoError::UnsupportedFormat))
        );
        assert_eq!(form.output().cloned(), before);

        form.clear_logo();
        assert_eq!(form.generate(), Ok(true));
    }

    #[test]
    fn test_new_generation_replaces_output() {
        let mut form = QrForm::new();
        form.set_content("one");
        form.generate().unwrap();
        let first = form.output().cloned();

        form.set_content("two");
        form.generate().unwrap();
        assert_ne!(form.output().cloned(), first);
    }

    #[test]
    fn test_set_pixel_size_presets_only() {
        let mut form = QrForm::new();
        assert_eq!(form.set_pixel_size(400), Ok(()));
        assert_eq!(form.request().pixel_size, 400);

        assert_eq!(form.set_pixel_size(250), Err(FormError::UnsupportedSize(250)));
        assert_eq!(form.request().pixel_size, 400);
    }

    #[test]
    fn test_set_margin_clamps() {
        let mut form = QrForm::new();
        form.set_margin(7);
        assert_eq!(form.request().margin, 7);
        form.set_margin(50);
        assert_eq!(form.request().margin, MAX_MARGIN);
    }

    #[test]
    fn test_from_request_clamps_margin() {
        let form = QrForm::from_request(EncodingRequest {
            margin: 99,
            ..EncodingRequest::new("x")
        });
        assert_eq!(form.request().margin, MAX_MARGIN);
    }

    #[test]
    fn test_color_setters() {
        let mut form = QrForm::new();
        form.set_dark_color("#336699").unwrap();
        form.set_light_color("#fff").unwrap();
        assert_eq!(form.request().dark_color, Rgba::rgb(0x33, 0x66, 0x99));
        assert_eq!(form.request().light_color, Rgba::WHITE);

        assert!(matches!(
            form.set_dark_color("blue"),
            Err(FormError::Color(ColorError::InvalidDigit(_)))
        ));
        // Failed update leaves the field untouched
        assert_eq!(form.request().dark_color, Rgba::rgb(0x33, 0x66, 0x99));
    }

    #[test]
    fn test_transparent_background_output() {
        let mut form = QrForm::new();
        form.set_content("clear");
        form.set_transparent_background(true);
        form.generate().unwrap();

        let img = image::load_from_memory(form.output().unwrap().bytes())
            .unwrap()
            .into_rgba8();
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }
}
