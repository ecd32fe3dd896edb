//! Reference conversions through `palette`
//!
//! Swatch RGB components are linear, so they map onto `LinSrgb`, and Lab is
//! relative to D65 on both sides.

use oxase_core::{Lab, Rgb};
use palette::LinSrgb;
use palette::convert::IntoColorUnclamped;
use palette::white_point::D65;

type RefLab = palette::Lab<D65, f64>;

/// Linear RGB → Lab (D65) computed by `palette`
pub fn palette_rgb_to_lab(rgb: Rgb) -> Lab {
    let lab: RefLab = LinSrgb::new(rgb.r, rgb.g, rgb.b).into_color_unclamped();
    Lab::new(lab.l, lab.a, lab.b)
}

/// Lab (D65) → linear RGB computed by `palette`, without gamut clipping
pub fn palette_lab_to_rgb(lab: Lab) -> Rgb {
    let rgb: LinSrgb<f64> = RefLab::new(lab.l, lab.a, lab.b).into_color_unclamped();
    Rgb::new(rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_neutral() {
        let lab = palette_rgb_to_lab(Rgb::WHITE);
        assert!((lab.l - 100.0).abs() < 1e-3);
        assert!(lab.a.abs() < 1e-3 && lab.b.abs() < 1e-3);
    }

    #[test]
    fn test_palette_round_trip() {
        let rgb = Rgb::new(0.2, 0.6, 0.9);
        let back = palette_lab_to_rgb(palette_rgb_to_lab(rgb));
        assert!(rgb.approx_eq(&back, 1e-6), "{:?}", back);
    }
}
