//! Module matrix produced by the QR encoder.

use qrcode::bits::Bits;
use qrcode::optimize::{Parser, Segment};
use qrcode::types::{Mode, QrError};
use qrcode::{Color, EcLevel, QrCode, Version};
use thiserror::Error;

/// Error-correction level used for every symbol.
pub const ERROR_CORRECTION: EcLevel = EcLevel::M;

const MAX_VERSION: i16 = 40;

/// Errors that can occur while encoding content into a QR symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The content does not fit in the largest symbol at the fixed EC level.
    #[error("Content too long for a QR code: {len} bytes exceeds the capacity of version 40-M")]
    DataTooLong { len: usize },

    /// Any other failure reported by the encoder.
    #[error("QR encoding failed: {0}")]
    Encoder(String),
}

/// A square grid of dark/light modules.
///
/// Modules are stored row-major, `true` meaning dark. The matrix never
/// includes the quiet zone; margins are applied at rasterization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    version: i16,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix from raw module data.
    ///
    /// Returns `None` if `modules.len() != width * width`.
    pub fn from_modules(width: usize, version: i16, modules: Vec<bool>) -> Option<Self> {
        if width == 0 || modules.len() != width * width {
            return None;
        }
        Some(Self {
            width,
            version,
            modules,
        })
    }

    /// Side length in modules (21 for version 1, up to 177 for version 40).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The symbol version chosen by the encoder.
    #[inline]
    pub fn version(&self) -> i16 {
        self.version
    }

    /// Whether the module at column `x`, row `y` is dark.
    ///
    /// Out-of-range coordinates are light.
    #[inline]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Number of dark modules in the symbol.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }
}

/// Encode `content` into a module matrix.
///
/// The smallest version that fits is selected automatically. Content is
/// always treated as UTF-8: segments the encoder's optimizer classifies as
/// Kanji (Shift JIS) are written in byte mode instead, otherwise readers
/// would decode some UTF-8 sequences as Japanese text.
///
/// # Errors
///
/// Returns [`EncodingError::DataTooLong`] if the content exceeds the
/// capacity of a version 40 symbol at [`ERROR_CORRECTION`].
pub fn encode_matrix(content: &str) -> Result<ModuleMatrix, EncodingError> {
    let data = content.as_bytes();
    let too_long = || EncodingError::DataTooLong { len: data.len() };
    let failed = |e: QrError| EncodingError::Encoder(e.to_string());

    for v in 1..=MAX_VERSION {
        let version = Version::Normal(v);
        let segments = Parser::new(data).optimize(version).map(|segment| {
            if segment.mode == Mode::Kanji {
                Segment {
                    mode: Mode::Byte,
                    ..segment
                }
            } else {
                segment
            }
        });

        let mut bits = Bits::new(version);
        match bits
            .push_segments(data, segments)
            .and_then(|()| bits.push_terminator(ERROR_CORRECTION))
        {
            Ok(()) => {
                let code = QrCode::with_bits(bits, ERROR_CORRECTION).map_err(failed)?;
                return from_code(&code, v).ok_or_else(|| {
                    EncodingError::Encoder("encoder returned a malformed matrix".to_string())
                });
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(failed(e)),
        }
    }

    Err(too_long())
}

fn from_code(code: &QrCode, version: i16) -> Option<ModuleMatrix> {
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();
    ModuleMatrix::from_modules(code.width(), version, modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_short_text_is_version_1() {
        let matrix = encode_matrix("hello").unwrap();
        assert_eq!(matrix.version(), 1);
        assert_eq!(matrix.width(), 21);
    }

    #[test]
    fn test_encode_url_picks_minimum_version() {
        // 19 bytes exceeds the 14-byte capacity of 1-M but fits 2-M
        let matrix = encode_matrix("https://example.com").unwrap();
        assert_eq!(matrix.version(), 2);
        assert_eq!(matrix.width(), 25);
    }

    #[test]
    fn test_width_matches_version() {
        for content in ["a", "hello world", &"x".repeat(200), &"9".repeat(1000)] {
            let matrix = encode_matrix(content).unwrap();
            assert_eq!(matrix.width(), matrix.version() as usize * 4 + 17);
        }
    }

    #[test]
    fn test_finder_pattern_corners_are_dark() {
        let matrix = encode_matrix("hello").unwrap();
        let last = matrix.width() - 1;
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(last, 0));
        assert!(matrix.is_dark(0, last));
        // Separator next to the top-left finder is always light
        assert!(!matrix.is_dark(7, 0));
    }

    #[test]
    fn test_out_of_range_is_light() {
        let matrix = encode_matrix("hello").unwrap();
        assert!(!matrix.is_dark(21, 0));
        assert!(!matrix.is_dark(0, 1000));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = encode_matrix("same input").unwrap();
        let b = encode_matrix("same input").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dark_count_is_plausible() {
        let matrix = encode_matrix("hello").unwrap();
        let total = matrix.width() * matrix.width();
        let dark = matrix.dark_count();
        assert!(dark > total / 4 && dark < total * 3 / 4);
    }

    #[test]
    fn test_content_too_long() {
        // Version 40-M holds 2331 bytes in byte mode
        let content = "\u{e9}".repeat(2000);
        let result = encode_matrix(&content);
        assert_eq!(
            result,
            Err(EncodingError::DataTooLong { len: content.len() })
        );
    }

    #[test]
    fn test_from_modules_rejects_bad_length() {
        assert!(ModuleMatrix::from_modules(2, 1, vec![true; 3]).is_none());
        assert!(ModuleMatrix::from_modules(0, 1, vec![]).is_none());
        assert!(ModuleMatrix::from_modules(2, 1, vec![true, false, false, true]).is_some());
    }

    #[test]
    fn test_encoding_error_display() {
        let err = EncodingError::DataTooLong { len: 5000 };
        assert_eq!(
            err.to_string(),
            "Content too long for a QR code: 5000 bytes exceeds the capacity of version 40-M"
        );
    }
}
