//! Swatch color entries
//!
//! A [`Color`] is a named, kind-tagged value in exactly one of the four
//! swatch color spaces. It is never modified in place: every conversion
//! returns a new `Color` with the same name and kind.

use crate::color::convert::{
    cmyk_to_rgb, grayscale_to_rgb, lab_to_rgb, rgb_to_cmyk, rgb_to_grayscale, rgb_to_lab,
};
use crate::color::{Cmyk, ColorKind, ColorSpace, Lab, Rgb};
use crate::options::ConversionOptions;

/// Color components tagged by their color space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Cmyk(Cmyk),
    Rgb(Rgb),
    Lab(Lab),
    Gray(f64),
}

impl ColorValue {
    /// Color space of this value
    pub const fn space(&self) -> ColorSpace {
        match self {
            Self::Cmyk(_) => ColorSpace::Cmyk,
            Self::Rgb(_) => ColorSpace::Rgb,
            Self::Lab(_) => ColorSpace::Lab,
            Self::Gray(_) => ColorSpace::Gray,
        }
    }

    /// Components in storage order (C,M,Y,K / R,G,B / L,a,b / gray)
    pub fn components(&self) -> Vec<f64> {
        match self {
            Self::Cmyk(c) => c.to_array().to_vec(),
            Self::Rgb(c) => c.to_array().to_vec(),
            Self::Lab(c) => c.to_array().to_vec(),
            Self::Gray(v) => vec![*v],
        }
    }

    /// This value as RGB
    pub fn to_rgb(&self, options: &ConversionOptions) -> Rgb {
        match *self {
            Self::Cmyk(cmyk) => cmyk_to_rgb(cmyk),
            Self::Rgb(rgb) => rgb,
            Self::Lab(lab) => lab_to_rgb(lab, options.xyz_to_rgb),
            Self::Gray(v) => grayscale_to_rgb(v),
        }
    }

    /// This value as CMYK
    pub fn to_cmyk(&self, options: &ConversionOptions) -> Cmyk {
        match *self {
            Self::Cmyk(cmyk) => cmyk,
            other => rgb_to_cmyk(other.to_rgb(options)),
        }
    }

    /// This value as Lab
    pub fn to_lab(&self, options: &ConversionOptions) -> Lab {
        match *self {
            Self::Lab(lab) => lab,
            other => rgb_to_lab(other.to_rgb(options)),
        }
    }

    /// This value as a single gray level
    pub fn to_gray(&self, options: &ConversionOptions) -> f64 {
        match *self {
            Self::Gray(v) => v,
            other => rgb_to_grayscale(other.to_rgb(options)),
        }
    }

    /// Convert to the given space
    pub fn convert(&self, space: ColorSpace, options: &ConversionOptions) -> Self {
        match space {
            ColorSpace::Cmyk => Self::Cmyk(self.to_cmyk(options)),
            ColorSpace::Rgb => Self::Rgb(self.to_rgb(options)),
            ColorSpace::Lab => Self::Lab(self.to_lab(options)),
            ColorSpace::Gray => Self::Gray(self.to_gray(options)),
        }
    }

    /// Quantize to 8-bit integers
    ///
    /// Non-Lab components become `trunc(v * 255)`. Lab maps L* by `255/100`
    /// and offsets a*/b* by 128. Values are truncated toward zero and never
    /// clamped, so out-of-range input yields out-of-range output.
    pub fn to_8bit(&self) -> Vec<i32> {
        match self {
            Self::Lab(lab) => vec![
                quantize(lab.l * (255.0 / 100.0)),
                quantize(lab.a + 128.0),
                quantize(lab.b + 128.0),
            ],
            other => other
                .components()
                .into_iter()
                .map(|v| quantize(v * 255.0))
                .collect(),
        }
    }
}

#[inline]
fn quantize(v: f64) -> i32 {
    v.trunc() as i32
}

/// A named swatch color
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    name: String,
    value: ColorValue,
    kind: ColorKind,
}

impl Color {
    /// Create a new color entry
    pub fn new(name: impl Into<String>, value: ColorValue, kind: ColorKind) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ColorValue {
        &self.value
    }

    pub fn kind(&self) -> ColorKind {
        self.kind
    }

    pub fn space(&self) -> ColorSpace {
        self.value.space()
    }

    /// Components in storage order
    pub fn components(&self) -> Vec<f64> {
        self.value.components()
    }

    fn with_value(&self, value: ColorValue) -> Self {
        Self {
            name: self.name.clone(),
            value,
            kind: self.kind,
        }
    }

    /// Convert to RGB with default options
    pub fn to_rgb(&self) -> Self {
        self.to_rgb_with(&ConversionOptions::default())
    }

    pub fn to_rgb_with(&self, options: &ConversionOptions) -> Self {
        self.convert_with(ColorSpace::Rgb, options)
    }

    /// Convert to CMYK with default options
    pub fn to_cmyk(&self) -> Self {
        self.to_cmyk_with(&ConversionOptions::default())
    }

    pub fn to_cmyk_with(&self, options: &ConversionOptions) -> Self {
        self.convert_with(ColorSpace::Cmyk, options)
    }

    /// Convert to Lab with default options
    pub fn to_lab(&self) -> Self {
        self.to_lab_with(&ConversionOptions::default())
    }

    pub fn to_lab_with(&self, options: &ConversionOptions) -> Self {
        self.convert_with(ColorSpace::Lab, options)
    }

    /// Convert to grayscale with default options
    pub fn to_grayscale(&self) -> Self {
        self.to_grayscale_with(&ConversionOptions::default())
    }

    pub fn to_grayscale_with(&self, options: &ConversionOptions) -> Self {
        self.convert_with(ColorSpace::Gray, options)
    }

    /// Convert to any space with default options
    pub fn convert(&self, space: ColorSpace) -> Self {
        self.convert_with(space, &ConversionOptions::default())
    }

    /// Convert to any space
    ///
    /// Converting to the color's own space returns an unchanged copy.
    pub fn convert_with(&self, space: ColorSpace, options: &ConversionOptions) -> Self {
        self.with_value(self.value.convert(space, options))
    }

    /// 8-bit quantization of the components, see [`ColorValue::to_8bit`]
    pub fn to_8bit(&self) -> Vec<i32> {
        self.value.to_8bit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::XyzToRgb;

    fn rgb(name: &str, r: f64, g: f64, b: f64) -> Color {
        Color::new(name, ColorValue::Rgb(Rgb::new(r, g, b)), ColorKind::Spot)
    }

    #[test]
    fn test_conversion_preserves_name_and_kind() {
        let color = rgb("Brand Orange", 1.0, 0.5, 0.0);
        for space in [ColorSpace::Cmyk, ColorSpace::Rgb, ColorSpace::Lab, ColorSpace::Gray] {
            let converted = color.convert(space);
            assert_eq!(converted.name(), "Brand Orange");
            assert_eq!(converted.kind(), ColorKind::Spot);
            assert_eq!(converted.space(), space);
            assert_eq!(converted.components().len(), space.channels());
        }
    }

    #[test]
    fn test_same_space_is_identity() {
        let color = rgb("c", 0.1, 0.2, 0.3);
        assert_eq!(color.to_rgb(), color);

        let lab = Color::new("l", ColorValue::Lab(Lab::new(50.0, 1.0, 2.0)), ColorKind::Global);
        assert_eq!(lab.to_lab(), lab);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let samples = [
            rgb("a", 0.2, 0.7, 0.4),
            Color::new("b", ColorValue::Cmyk(Cmyk::new(0.1, 0.2, 0.3, 0.4)), ColorKind::Normal),
            Color::new("c", ColorValue::Lab(Lab::new(62.0, -10.0, 25.0)), ColorKind::Normal),
            Color::new("d", ColorValue::Gray(0.5), ColorKind::Normal),
        ];
        for color in samples {
            let once = color.to_grayscale();
            assert_eq!(once.to_grayscale(), once);
        }
    }

    #[test]
    fn test_cmyk_to_lab_chains_through_rgb() {
        let cmyk = Color::new("k", ColorValue::Cmyk(Cmyk::new(0.0, 1.0, 1.0, 0.0)), ColorKind::Normal);
        let via_rgb = cmyk.to_rgb().to_lab();
        assert_eq!(cmyk.to_lab(), via_rgb);
    }

    #[test]
    fn test_quantize_rgb_truncates() {
        assert_eq!(rgb("q", 1.0, 0.5, 0.0).to_8bit(), vec![255, 127, 0]);
    }

    #[test]
    fn test_quantize_lab_offsets() {
        let lab = Color::new("l", ColorValue::Lab(Lab::new(50.0, -20.5, 10.7)), ColorKind::Normal);
        // 127.5 -> 127, 107.5 -> 107, 138.7 -> 138
        assert_eq!(lab.to_8bit(), vec![127, 107, 138]);
    }

    #[test]
    fn test_quantize_does_not_clamp() {
        let hot = rgb("hot", 1.5, -0.5, 0.0);
        assert_eq!(hot.to_8bit(), vec![382, -127, 0]);
    }

    #[test]
    fn test_quantize_gray_and_cmyk() {
        let gray = Color::new("g", ColorValue::Gray(0.5), ColorKind::Normal);
        assert_eq!(gray.to_8bit(), vec![127]);

        let cmyk = Color::new("c", ColorValue::Cmyk(Cmyk::new(0.0, 0.25, 1.0, 0.1)), ColorKind::Normal);
        assert_eq!(cmyk.to_8bit(), vec![0, 63, 255, 25]);
    }

    #[test]
    fn test_reference_matrix_only_affects_lab_source() {
        let reference = ConversionOptions {
            xyz_to_rgb: XyzToRgb::Reference,
        };
        let color = rgb("r", 0.3, 0.6, 0.9);
        assert_eq!(color.to_cmyk_with(&reference), color.to_cmyk());

        let lab = Color::new("l", ColorValue::Lab(Lab::new(50.0, 20.0, -30.0)), ColorKind::Normal);
        assert_ne!(lab.to_rgb_with(&reference), lab.to_rgb());
    }
}
