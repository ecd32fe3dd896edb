//! Pairwise conversions between the swatch color models
//!
//! Every function here is total: out-of-range input produces out-of-range
//! output, nothing is clamped. Conversions without a direct formula chain
//! through RGB (e.g. CMYK → Lab is `rgb_to_lab(cmyk_to_rgb(..))`).

use crate::color::xyz::RGB_TO_XYZ;
use crate::color::{Cmyk, Lab, Rgb, Xyz};
use crate::math::Matrix3x3;

/// Exact inverse of [`RGB_TO_XYZ`]
pub const XYZ_TO_RGB: Matrix3x3 = Matrix3x3::new([
    [3.240_481_343_200_526_6, -1.537_151_516_271_318_5, -0.498_536_326_168_887_93],
    [-0.969_254_949_996_568_4, 1.875_990_001_489_890_7, 0.041_555_926_558_292_83],
    [0.055_646_639_135_177_16, -0.204_041_338_366_511_25, 1.057_311_069_645_344_5],
]);

/// XYZ → RGB matrix used by legacy swatch tooling
///
/// The blue row repeats the leading red coefficient three times instead of
/// holding the inverse's blue row. Kept only to reproduce existing output.
pub const REFERENCE_XYZ_TO_RGB: Matrix3x3 = Matrix3x3::new([
    [3.240_481_343_200_526_6, -1.537_151_516_271_318_5, -0.498_536_326_168_887_8],
    [-0.969_254_949_996_568_2, 1.875_990_001_489_890_7, 0.041_555_926_558_292_84],
    [3.240_481_343_200_526_6, 3.240_481_343_200_526_6, 3.240_481_343_200_526_6],
]);

/// Which XYZ → RGB transform the Lab → RGB direction uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XyzToRgb {
    /// Exact inverse of the RGB → XYZ matrix; Lab↔RGB round-trips
    #[default]
    Corrected,
    /// Bit-compatible with legacy tooling: [`REFERENCE_XYZ_TO_RGB`] plus
    /// the sign-flipped Z recovery of [`Lab::to_xyz_reference`]
    Reference,
}

/// CMYK → RGB
#[inline]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    cmyk.to_rgb()
}

/// RGB → CMYK, pure black becomes `(0, 0, 0, 1)`
#[inline]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    Cmyk::from_rgb(rgb)
}

/// Gray → RGB by replicating the value across channels
#[inline]
pub fn grayscale_to_rgb(value: f64) -> Rgb {
    Rgb::splat(value)
}

/// RGB → Gray using BT.601 luma weights
#[inline]
pub fn rgb_to_grayscale(rgb: Rgb) -> f64 {
    rgb.luma()
}

/// RGB → XYZ
#[inline]
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    Xyz::from(RGB_TO_XYZ * rgb.to_array())
}

/// XYZ → RGB with the selected matrix
#[inline]
pub fn xyz_to_rgb(xyz: Xyz, matrix: XyzToRgb) -> Rgb {
    let m = match matrix {
        XyzToRgb::Corrected => XYZ_TO_RGB,
        XyzToRgb::Reference => REFERENCE_XYZ_TO_RGB,
    };
    Rgb::from(m * xyz.to_array())
}

/// RGB → Lab via XYZ
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    Lab::from_xyz(rgb_to_xyz(rgb))
}

/// Lab → RGB via XYZ
pub fn lab_to_rgb(lab: Lab, matrix: XyzToRgb) -> Rgb {
    let xyz = match matrix {
        XyzToRgb::Corrected => lab.to_xyz(),
        XyzToRgb::Reference => lab.to_xyz_reference(),
    };
    xyz_to_rgb(xyz, matrix)
}
