//! Generator form WASM bindings.
//!
//! This module provides JavaScript bindings for the QrForm type, so the page
//! can push each input's value as it changes and generate on click.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const form = new QrForm();
//! form.text = 'https://example.com';
//! form.color = '#1e3a8a';
//! form.transparent_bg = true;
//! form.qr_size = 400;
//!
//! if (form.generate()) {
//!   img.src = form.data_url()!;
//! }
//! ```

use crate::types::JsQrImage;
use wasm_bindgen::prelude::*;

/// Generator form wrapper for JavaScript
#[wasm_bindgen(js_name = QrForm)]
pub struct JsQrForm {
    inner: qrcraft_core::QrForm,
}

#[wasm_bindgen(js_class = QrForm)]
impl JsQrForm {
    /// Create a form with default options
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: qrcraft_core::QrForm::new(),
        }
    }

    /// Get the text to encode
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.request().content.clone()
    }

    /// Set the text to encode
    #[wasm_bindgen(setter)]
    pub fn set_text(&mut self, value: String) {
        self.inner.set_content(value);
    }

    /// Get the module color as hex
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String {
        self.inner.request().dark_color.to_hex()
    }

    /// Set the module color from a hex string
    #[wasm_bindgen(setter)]
    pub fn set_color(&mut self, value: String) -> Result<(), JsValue> {
        self.inner
            .set_dark_color(&value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the background color as hex
    #[wasm_bindgen(getter)]
    pub fn bg_color(&self) -> String {
        self.inner.request().light_color.to_hex()
    }

    /// Set the background color from a hex string
    #[wasm_bindgen(setter)]
    pub fn set_bg_color(&mut self, value: String) -> Result<(), JsValue> {
        self.inner
            .set_light_color(&value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get whether the background is transparent
    #[wasm_bindgen(getter)]
    pub fn transparent_bg(&self) -> bool {
        self.inner.request().transparent_background
    }

    /// Set whether the background is transparent
    #[wasm_bindgen(setter)]
    pub fn set_transparent_bg(&mut self, value: bool) {
        self.inner.set_transparent_background(value);
    }

    /// Get the output size in pixels
    #[wasm_bindgen(getter)]
    pub fn qr_size(&self) -> u32 {
        self.inner.request().pixel_size
    }

    /// Set the output size; must be one of the presets
    #[wasm_bindgen(setter)]
    pub fn set_qr_size(&mut self, value: u32) -> Result<(), JsValue> {
        self.inner
            .set_pixel_size(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the margin in modules
    #[wasm_bindgen(getter)]
    pub fn margin(&self) -> u32 {
        self.inner.request().margin
    }

    /// Set the margin in modules (clamped to 0-10)
    #[wasm_bindgen(setter)]
    pub fn set_margin(&mut self, value: u32) {
        self.inner.set_margin(value);
    }

    /// Store the bytes of an uploaded logo file
    pub fn set_logo(&mut self, bytes: Vec<u8>) {
        self.inner.set_logo(bytes);
    }

    /// Remove the logo
    pub fn clear_logo(&mut self) {
        self.inner.clear_logo();
    }

    /// Check if a logo has been uploaded
    pub fn has_logo(&self) -> bool {
        self.inner.has_logo()
    }

    /// Generate the QR code from the current fields.
    ///
    /// Returns `true` when a new image was produced and `false` when the
    /// text is empty. On empty text or an error the previous image is kept.
    pub fn generate(&mut self) -> Result<bool, JsValue> {
        self.inner.generate().map_err(|e| {
            log::warn!("QR generation failed: {e}");
            JsValue::from_str(&e.to_string())
        })
    }

    /// The last generated image
    pub fn image(&self) -> Option<JsQrImage> {
        self.inner.output().cloned().map(JsQrImage::from_output)
    }

    /// Data URL of the last generated image
    pub fn data_url(&self) -> Option<String> {
        self.inner.data_url()
    }

    /// Serialize the current request for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.request())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a form from a stored request
    pub fn from_json(value: JsValue) -> Result<JsQrForm, JsValue> {
        let request: qrcraft_core::EncodingRequest =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: qrcraft_core::QrForm::from_request(request),
        })
    }
}

impl Default for JsQrForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests that work on all targets

    #[test]
    fn test_form_defaults() {
        let form = JsQrForm::new();
        assert_eq!(form.text(), "");
        assert_eq!(form.color(), "#000000");
        assert_eq!(form.bg_color(), "#ffffff");
        assert!(!form.transparent_bg());
        assert_eq!(form.qr_size(), 300);
        assert_eq!(form.margin(), 2);
        assert!(!form.has_logo());
        assert!(form.image().is_none());
    }

    #[test]
    fn test_form_infallible_setters() {
        let mut form = JsQrForm::new();
        form.set_text("hello".to_string());
        form.set_transparent_bg(true);
        form.set_margin(42);

        assert_eq!(form.text(), "hello");
        assert!(form.transparent_bg());
        assert_eq!(form.margin(), 10);
    }

    #[test]
    fn test_form_logo_flags() {
        let mut form = JsQrForm::new();
        form.set_logo(vec![1, 2, 3]);
        assert!(form.has_logo());
        form.clear_logo();
        assert!(!form.has_logo());
    }

    #[test]
    fn test_form_image_after_core_generation() {
        let mut form = JsQrForm::new();
        form.set_text("bound".to_string());
        // Drive the core form directly; `generate` returns JsValue errors
        assert_eq!(form.inner.generate(), Ok(true));

        let image = form.image().unwrap();
        assert_eq!(image.width(), 300);
        assert_eq!(form.data_url(), Some(image.data_url()));
    }
}
