//! Export stage of the composition pipeline.
//!
//! This module provides functionality for:
//! - Encoding a rendered surface to PNG
//! - Presenting the PNG as a data URL for an `<img>` element
//! - Naming the download offered to the user
//!
//! # Examples
//!
//! ```ignore
//! use qrcraft_core::export::{encode_png, OutputImage};
//!
//! let img = image::RgbaImage::new(100, 100);
//! let output = encode_png(&img).unwrap();
//! println!("{} -> {} bytes", OutputImage::FILE_NAME, output.bytes().len());
//! ```

mod png;

pub use png::{encode_png, ExportError, OutputImage};
