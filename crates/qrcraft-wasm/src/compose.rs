//! One-shot composition bindings.
//!
//! # Functions
//!
//! - [`compose_qr`] - Generate a QR code from a request object and optional logo
//! - [`size_presets`] - The output sizes offered by the form
//! - [`max_margin`] - Upper bound of the margin slider
//!
//! # Example
//!
//! ```typescript
//! import { compose_qr } from '@qrcraft/wasm';
//!
//! const logo = file ? new Uint8Array(await file.arrayBuffer()) : undefined;
//! const image = compose_qr({ content: text, darkColor: '#000000', pixelSize: 300 }, logo);
//! if (image) {
//!   img.src = image.data_url();
//! }
//! ```

use crate::types::JsQrImage;
use qrcraft_core::{compose, EncodingRequest, MAX_MARGIN, PIXEL_SIZE_PRESETS};
use wasm_bindgen::prelude::*;

/// Generate a QR code image.
///
/// # Arguments
///
/// * `request` - Object with `content`, `darkColor`, `lightColor`,
///   `transparentBackground`, `pixelSize` and `margin`; missing fields use
///   defaults
/// * `logo` - Raw bytes of a logo image file, or `undefined`
///
/// # Returns
///
/// The generated image, or `undefined` when `content` is empty.
///
/// # Errors
///
/// Returns an error if:
/// - The request object is malformed (e.g. an invalid hex color)
/// - The content is too long for a QR code
/// - `pixelSize` is zero or larger than the supported maximum
/// - The logo is not a decodable image
#[wasm_bindgen]
pub fn compose_qr(request: JsValue, logo: Option<Vec<u8>>) -> Result<Option<JsQrImage>, JsValue> {
    let request: EncodingRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    compose(&request, logo.as_deref())
        .map(|output| output.map(JsQrImage::from_output))
        .map_err(|e| {
            log::warn!("QR generation failed: {e}");
            JsValue::from_str(&e.to_string())
        })
}

/// Output sizes offered by the form, in pixels
#[wasm_bindgen]
pub fn size_presets() -> Vec<u32> {
    PIXEL_SIZE_PRESETS.to_vec()
}

/// Largest margin in modules
#[wasm_bindgen]
pub fn max_margin() -> u32 {
    MAX_MARGIN
}
