//! CMYK process color
//!
//! Device CMYK with every ink in 0.0-1.0. Conversions to and from RGB use
//! the naive subtractive model, with no ink profile involved.

use crate::color::Rgb;

/// CMYK color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Create a new CMYK color
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Subtractive conversion: each channel is `1 - (1 - K)·ink - K`
    pub fn to_rgb(&self) -> Rgb {
        let k = self.k;
        Rgb::new(
            1.0 - (1.0 - k) * self.c - k,
            1.0 - (1.0 - k) * self.m - k,
            1.0 - (1.0 - k) * self.y - k,
        )
    }

    /// Inverse of [`Cmyk::to_rgb`] with maximal black generation
    ///
    /// Anything whose black component rounds to exactly 1, pure black and
    /// subnormal near-black alike, maps to `(0, 0, 0, 1)` rather than
    /// dividing by zero.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let k = (1.0 - rgb.r).min(1.0 - rgb.g).min(1.0 - rgb.b);
        if 1.0 - k == 0.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        Self {
            c: (1.0 - rgb.r - k) / (1.0 - k),
            m: (1.0 - rgb.g - k) / (1.0 - k),
            y: (1.0 - rgb.b - k) / (1.0 - k),
            k,
        }
    }

    /// Check if approximately equal to another CMYK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl From<[f64; 4]> for Cmyk {
    fn from(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}
