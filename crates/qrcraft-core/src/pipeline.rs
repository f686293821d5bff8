//! The QR composition pipeline: encode, rasterize, overlay, export.
//!
//! Every call runs all stages from scratch on a freshly allocated surface.
//! The stages run strictly in order; in particular the logo is decoded only
//! after the base raster is complete.

use thiserror::Error;

use crate::decode::{LogoError, LogoOverlay};
use crate::encode::{encode_matrix, EncodingError};
use crate::export::{ExportError, OutputImage};
use crate::render::{RasterError, RasterSurface};
use crate::EncodingRequest;

/// Any failure of the composition pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Logo(#[from] LogoError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Compose a QR code image, decoding the logo from raw file bytes.
///
/// # Arguments
///
/// * `request` - Content and display options
/// * `logo` - Raw bytes of an uploaded logo file, if any
///
/// # Returns
///
/// `Ok(None)` when the content is empty (nothing is drawn), otherwise the
/// finished PNG.
///
/// # Errors
///
/// Fails if the content does not fit in a QR code, the pixel size is zero or
/// above [`crate::MAX_PIXEL_SIZE`], the logo cannot be decoded, or PNG
/// encoding fails.
///
/// # Example
///
/// ```ignore
/// use qrcraft_core::{compose, EncodingRequest};
///
/// let request = EncodingRequest::new("https://example.com");
/// let output = compose(&request, None)?.expect("content is not empty");
/// std::fs::write(qrcraft_core::OutputImage::FILE_NAME, output.bytes())?;
/// ```
pub fn compose(
    request: &EncodingRequest,
    logo: Option<&[u8]>,
) -> Result<Option<OutputImage>, ComposeError> {
    let Some(mut surface) = draw_base(request)? else {
        return Ok(None);
    };

    if let Some(bytes) = logo {
        let overlay = LogoOverlay::decode(bytes)?;
        surface.overlay_logo(&overlay);
    }

    Ok(Some(surface.export_png()?))
}

/// Compose a QR code image with an already decoded logo.
///
/// Same as [`compose`], minus the decode step.
pub fn compose_with_overlay(
    request: &EncodingRequest,
    logo: Option<LogoOverlay>,
) -> Result<Option<OutputImage>, ComposeError> {
    let Some(mut surface) = draw_base(request)? else {
        return Ok(None);
    };

    if let Some(overlay) = logo {
        surface.overlay_logo(&overlay);
    }

    Ok(Some(surface.export_png()?))
}

/// Encode and rasterize the request, without logo or export.
///
/// Returns `Ok(None)` for empty content.
pub fn draw_base(request: &EncodingRequest) -> Result<Option<RasterSurface>, ComposeError> {
    if request.is_empty() {
        log::debug!("Skipping QR generation: content is empty");
        return Ok(None);
    }

    let matrix = encode_matrix(&request.content)?;
    log::debug!(
        "Encoded {} bytes as version {} ({} modules)",
        request.content.len(),
        matrix.version(),
        matrix.width()
    );

    let surface = RasterSurface::rasterize(
        &matrix,
        request.pixel_size,
        request.margin,
        request.dark_color,
        request.effective_light_color(),
    )?;

    Ok(Some(surface))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::PIXEL_SIZE_PRESETS;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Property: Output dimensions always equal the requested pixel size.
        #[test]
        fn prop_output_matches_pixel_size(
            content in "\\PC{1,40}",
            preset in 0usize..PIXEL_SIZE_PRESETS.len(),
            margin in 0u32..=10,
        ) {
            let pixel_size = PIXEL_SIZE_PRESETS[preset];
            let request = EncodingRequest {
                pixel_size,
                margin,
                ..EncodingRequest::new(content)
            };
            let output = compose(&request, None).unwrap().unwrap();
            prop_assert_eq!((output.width(), output.height()), (pixel_size, pixel_size));
            prop_assert!(!output.bytes().is_empty());
        }

        /// Property: Identical requests produce byte-identical images.
        #[test]
        fn prop_compose_idempotent(content in "[ -~]{1,50}", margin in 0u32..=10) {
            let request = EncodingRequest { margin, ..EncodingRequest::new(content) };
            let a = compose(&request, None).unwrap();
            let b = compose(&request, None).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
