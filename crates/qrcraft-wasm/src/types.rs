//! WASM-compatible wrapper types for generated images.
//!
//! This module provides JavaScript-friendly types that wrap the core qrcraft
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use qrcraft_core::OutputImage;
use wasm_bindgen::prelude::*;

/// A generated QR code image for JavaScript.
///
/// Wraps the core `OutputImage`: PNG bytes plus everything the page needs to
/// show the image and offer it as a download.
///
/// # Memory Management
///
/// The PNG bytes are stored in WASM memory. `bytes()` and `data_url()` copy
/// them into JavaScript memory on every call.
#[wasm_bindgen]
pub struct JsQrImage {
    inner: OutputImage,
}

#[wasm_bindgen]
impl JsQrImage {
    /// Image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Size of the PNG file in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes().len()
    }

    /// Returns the PNG file contents as Uint8Array.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes().to_vec()
    }

    /// Returns a `data:image/png;base64,...` URL for `<img src>` and
    /// `<a href download>`.
    pub fn data_url(&self) -> String {
        self.inner.data_url()
    }

    /// Suggested download file name
    pub fn file_name(&self) -> String {
        OutputImage::FILE_NAME.to_string()
    }

    /// MIME type of `bytes()`, for building a Blob
    pub fn mime_type(&self) -> String {
        OutputImage::MIME_TYPE.to_string()
    }
}

impl JsQrImage {
    pub(crate) fn from_output(inner: OutputImage) -> Self {
        Self { inner }
    }
}
