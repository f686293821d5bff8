//! qrcraft WASM - WebAssembly bindings for qrcraft
//!
//! This crate provides WASM bindings to expose the qrcraft-core composition
//! pipeline to the generator page.
//!
//! # Module Structure
//!
//! - `form` - Stateful form object (fields, logo, last image)
//! - `compose` - One-shot generation from a request object
//! - `types` - WASM-compatible wrapper for generated images
//! - `logging` - Routes `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { QrForm } from '@qrcraft/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const form = new QrForm();
//! form.text = input.value;
//! if (logoFile) {
//!   form.set_logo(new Uint8Array(await logoFile.arrayBuffer()));
//! }
//! if (form.generate()) {
//!   const image = form.image()!;
//!   link.href = image.data_url();
//!   link.download = image.file_name();
//! }
//! ```

use wasm_bindgen::prelude::*;

mod compose;
mod form;
mod logging;
mod types;

// Re-export public types
pub use compose::{compose_qr, max_margin, size_presets};
pub use form::JsQrForm;
pub use types::JsQrImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init();
    log::debug!("qrcraft-wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
