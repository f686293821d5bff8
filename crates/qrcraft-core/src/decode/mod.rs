//! Logo decoding for the optional overlay.
//!
//! This module provides functionality for:
//! - Decoding an uploaded logo (PNG, JPEG, GIF, WebP or BMP) to RGBA
//! - Computing where the logo lands on a surface of a given size
//! - Resizing the logo to its overlay size
//!
//! # Ordering
//!
//! In the composition pipeline the logo is decoded only after the base QR
//! raster has been drawn, so the overlay always lands on a complete symbol.
//!
//! # Examples
//!
//! ```ignore
//! use qrcraft_core::decode::LogoOverlay;
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let logo = LogoOverlay::decode(&bytes).unwrap();
//! println!("Logo is {}x{}", logo.width(), logo.height());
//! ```

mod logo;
mod types;

pub use logo::LogoOverlay;
pub use types::{LogoError, LogoPlacement, LOGO_FRACTION};
