//! Reference white for the Lab transforms
//!
//! Lab values in swatch files are relative to the white that the RGB→XYZ
//! matrix maps `(1, 1, 1)` to. Its X and Z components are the row sums of
//! that matrix.

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

/// White of the swatch RGB↔Lab transforms (Xn = 0.950456, Zn = 1.088754)
pub const REFERENCE_WHITE: WhitePoint = WhitePoint::new("D65", 0.950456, 1.0, 1.088754);
