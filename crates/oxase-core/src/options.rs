//! Decode and conversion options

use crate::color::XyzToRgb;

/// Default bound on group nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for decoding swatch files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject anomalies that are otherwise only logged: a block handler
    /// reading past the declared block length, and groups still open at
    /// the end of the stream
    pub strict: bool,
    /// Maximum group nesting depth (the synthetic root not counted)
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Lenient defaults with `strict` enabled
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Options for color conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionOptions {
    /// XYZ → RGB transform used whenever a Lab value is converted
    pub xyz_to_rgb: XyzToRgb,
}

impl ConversionOptions {
    /// Options reproducing legacy tooling output bit-for-bit
    pub fn reference() -> Self {
        Self {
            xyz_to_rgb: XyzToRgb::Reference,
        }
    }
}
