//! CIELAB (L*a*b*) Color Space
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! The transforms use the classic 0.008856 / 7.787 / 903.3 constants
//! rather than the exact CIE fractions, so results match files written by
//! design tools that use the same rounded values.

use crate::color::{REFERENCE_WHITE, Xyz};

/// Threshold between the cube-root and linear segments of `f`
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment of `f`
const SLOPE: f64 = 7.787;
/// Offset of the linear segment of `f`
const OFFSET: f64 = 16.0 / 116.0;
/// L* per unit of Y below the threshold
const KAPPA: f64 = 903.3;
/// `f(EPSILON)`: the threshold for the inverse of `f`
const F_INV_THRESHOLD: f64 = 0.206_893_034_422_963_83;
/// Lightness at Y = EPSILON
const L_THRESHOLD: f64 = 7.999_591_993_063_806;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ relative to [`REFERENCE_WHITE`]
    pub fn from_xyz(xyz: Xyz) -> Self {
        let white = REFERENCE_WHITE.xyz;
        let xr = xyz.x / white.x;
        let yr = xyz.y;
        let zr = xyz.z / white.z;

        let l = if yr > EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            KAPPA * yr
        };

        Self {
            l,
            a: 500.0 * (lab_f(xr) - lab_f(yr)),
            b: 200.0 * (lab_f(yr) - lab_f(zr)),
        }
    }

    /// Convert to XYZ relative to [`REFERENCE_WHITE`]
    pub fn to_xyz(&self) -> Xyz {
        let white = REFERENCE_WHITE.xyz;
        let y = self.luminance();
        let fy = lab_f(y);

        Xyz::new(
            white.x * lab_f_inv(self.a / 500.0 + fy),
            y,
            white.z * lab_f_inv(fy - self.b / 200.0),
        )
    }

    /// Convert to XYZ the way legacy swatch tooling does
    ///
    /// Z is recovered as `-Zn·f⁻¹(b/200 - fy)`. That equals the correct
    /// value only on the cube segment of `f⁻¹`; for typical colors the
    /// linear segment is taken instead and Z comes out wrong.
    pub fn to_xyz_reference(&self) -> Xyz {
        let white = REFERENCE_WHITE.xyz;
        let y = self.luminance();
        let fy = lab_f(y);

        Xyz::new(
            lab_f_inv(self.a / 500.0 + fy) * white.x,
            y,
            -lab_f_inv(self.b / 200.0 - fy) * white.z,
        )
    }

    /// Relative luminance Y recovered from L*
    #[inline]
    fn luminance(&self) -> f64 {
        if self.l > L_THRESHOLD {
            ((self.l + 16.0) / 116.0).powi(3)
        } else {
            self.l / KAPPA
        }
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        SLOPE * t + OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t > F_INV_THRESHOLD {
        t * t * t
    } else {
        (t - OFFSET) / SLOPE
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
