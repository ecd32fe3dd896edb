//! Seeded color sample generation

use oxase_core::{Cmyk, Lab, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample sets for conversion tests
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// The 8 corners of the RGB cube
    RgbCube,
    /// Neutral ramp from black to white
    Neutrals,
    /// Hue ramp at full saturation
    HueRamp,
    /// Uniform random RGB in [0, 1]
    Random(u64),
}

/// Generate `count` RGB samples (`RgbCube` always yields 8)
pub fn rgb_samples(pattern: SamplePattern, count: usize) -> Vec<Rgb> {
    match pattern {
        SamplePattern::RgbCube => (0..8)
            .map(|i| {
                Rgb::new(
                    (i & 1) as f64,
                    ((i >> 1) & 1) as f64,
                    ((i >> 2) & 1) as f64,
                )
            })
            .collect(),
        SamplePattern::Neutrals => (0..count)
            .map(|i| Rgb::splat(i as f64 / (count.max(2) - 1) as f64))
            .collect(),
        SamplePattern::HueRamp => (0..count)
            .map(|i| hue_to_rgb(i as f64 / count as f64 * 360.0))
            .collect(),
        SamplePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
    }
}

/// Random CMYK with every channel in [0, 1]
pub fn random_cmyk(seed: u64, count: usize) -> Vec<Cmyk> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Cmyk::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// Random Lab colors that map inside the RGB cube
pub fn random_lab_in_gamut(seed: u64, count: usize) -> Vec<Lab> {
    rgb_samples(SamplePattern::Random(seed), count)
        .into_iter()
        .map(oxase_core::color::rgb_to_lab)
        .collect()
}

fn hue_to_rgb(h: f64) -> Rgb {
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();
    match (h / 60.0) as u32 {
        0 => Rgb::new(1.0, x, 0.0),
        1 => Rgb::new(x, 1.0, 0.0),
        2 => Rgb::new(0.0, 1.0, x),
        3 => Rgb::new(0.0, x, 1.0),
        4 => Rgb::new(x, 0.0, 1.0),
        _ => Rgb::new(1.0, 0.0, x),
    }
}
