//! Rasterization of a module matrix onto an RGBA surface.
//!
//! The surface is always exactly `pixel_size x pixel_size`. The symbol plus
//! its margin (in modules) is stretched over that square with a fractional
//! scale, so modules may differ by one pixel in width. This matches how
//! browser QR renderers fill a fixed-width canvas.

mod surface;

pub use surface::{RasterError, RasterSurface, MAX_PIXEL_SIZE};
