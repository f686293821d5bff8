//! Core types for logo decoding and placement.

use thiserror::Error;

/// The logo side is the surface side divided by this value.
pub const LOGO_FRACTION: u32 = 5;

/// Error types for logo decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoError {
    /// No bytes were provided.
    #[error("Logo file is empty")]
    Empty,

    /// The bytes are not in a recognized image format.
    #[error("Logo is not a supported image format")]
    UnsupportedFormat,

    /// The image format was recognized but decoding failed.
    #[error("Failed to decode logo: {0}")]
    Decode(String),
}

/// Where a logo is drawn on a square surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Side length of the (square) logo in pixels.
    pub size: u32,
}

impl LogoPlacement {
    /// Center a logo of `surface_size / LOGO_FRACTION` pixels on a surface.
    ///
    /// Returns `None` when the logo would be smaller than one pixel.
    pub fn centered(surface_size: u32) -> Option<Self> {
        let size = surface_size / LOGO_FRACTION;
        if size == 0 {
            return None;
        }
        let offset = (surface_size - size) / 2;
        Some(Self {
            x: offset,
            y: offset,
            size,
        })
    }
}
