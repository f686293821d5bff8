//! QR encoding stage of the composition pipeline.
//!
//! Text is handed to the `qrcode` crate, which picks the smallest symbol
//! version and the best segment modes for the data. The result is copied
//! into a [`ModuleMatrix`] so later stages never depend on the encoder's
//! types.
//!
//! The error-correction level is fixed at [`ERROR_CORRECTION`] (M, ~15%
//! recovery), the level web QR generators use when none is configured.
//!
//! # Examples
//!
//! ```ignore
//! use qrcraft_core::encode::encode_matrix;
//!
//! let matrix = encode_matrix("https://example.com").unwrap();
//! println!("version {} ({}x{})", matrix.version(), matrix.width(), matrix.width());
//! ```

mod matrix;

pub use matrix::{encode_matrix, EncodingError, ModuleMatrix, ERROR_CORRECTION};
