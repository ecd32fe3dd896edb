//! RGB Color Primitives
//!
//! Swatch RGB values are stored as-is: nominally 0.0-1.0, linear, with no
//! transfer function applied or removed anywhere in this crate.

/// RGB color in floating-point (nominally 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a gray RGB color with all channels set to `v`
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Luma using ITU-R BT.601 weights
    #[inline]
    pub fn luma(&self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}
