//! Color model types and conversions
//!
//! This module provides:
//! - The four swatch color models (CMYK, RGB, CIELAB, grayscale)
//! - CIE XYZ as the intermediate of the RGB↔Lab transforms
//! - Named, kind-tagged swatch [`Color`] entries
//! - Pairwise conversions and 8-bit quantization

pub mod cmyk;
pub mod convert;
pub mod lab;
pub mod rgb;
pub mod space;
pub mod swatch;
pub mod white_point;
pub mod xyz;

pub use cmyk::Cmyk;
pub use convert::{
    REFERENCE_XYZ_TO_RGB, XYZ_TO_RGB, XyzToRgb, cmyk_to_rgb, grayscale_to_rgb, lab_to_rgb,
    rgb_to_cmyk, rgb_to_grayscale, rgb_to_lab, rgb_to_xyz, xyz_to_rgb,
};
pub use lab::Lab;
pub use rgb::Rgb;
pub use space::{ColorKind, ColorSpace};
pub use swatch::{Color, ColorValue};
pub use white_point::{REFERENCE_WHITE, WhitePoint};
pub use xyz::{RGB_TO_XYZ, Xyz};
