//! Accuracy measurement using perceptual color difference
//!
//! CIEDE2000 is the metric for every Lab comparison; a difference below 1.0
//! is not visible to a trained observer.

use oxase_core::Lab;

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    pub mean: f64,
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of compared pairs
    pub count: usize,
}

impl DeltaEStats {
    /// All differences imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// All differences barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }
}

/// CIEDE2000 difference between two Lab colors
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    const POW25_7: f64 = 6_103_515_625.0;

    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_avg7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_avg7 / (c_avg7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let cp_avg = (c1p + c2p) / 2.0;

    let hue = |b: f64, a: f64| {
        if a == 0.0 && b == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        }
    };
    let h1p = hue(b1, a1p);
    let h2p = hue(b2, a2p);

    let chroma_zero = c1p * c2p == 0.0;

    let dhp = if chroma_zero {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dhp.to_radians() / 2.0).sin();

    let hp_avg = if chroma_zero {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_avg - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_avg).to_radians().cos()
        + 0.32 * (3.0 * hp_avg + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_avg - 63.0).to_radians().cos();

    let dl = l2 - l1;
    let dc = c2p - c1p;

    let l_mid_sq = ((l1 + l2) / 2.0 - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_mid_sq / (20.0 + l_mid_sq).sqrt();
    let s_c = 1.0 + 0.045 * cp_avg;
    let s_h = 1.0 + 0.015 * cp_avg * t;

    let d_theta = 30.0 * (-((hp_avg - 275.0) / 25.0).powi(2)).exp();
    let cp_avg7 = cp_avg.powi(7);
    let r_c = 2.0 * (cp_avg7 / (cp_avg7 + POW25_7)).sqrt();
    let r_t = -r_c * (2.0 * d_theta.to_radians()).sin();

    let tl = dl / s_l;
    let tc = dc / s_c;
    let th = dh_big / s_h;

    (tl * tl + tc * tc + th * th + r_t * tc * th).sqrt()
}

/// Compare pairs of Lab colors and compute deltaE statistics
pub fn compare_lab(pairs: &[(Lab, Lab)]) -> DeltaEStats {
    let mut delta_es: Vec<f64> = pairs.iter().map(|&(a, b)| delta_e_2000(a, b)).collect();
    delta_es.sort_by(|a, b| a.total_cmp(b));

    let count = delta_es.len();
    let mean = if count == 0 {
        0.0
    } else {
        delta_es.iter().sum::<f64>() / count as f64
    };
    let max = delta_es.last().copied().unwrap_or(0.0);
    let p95 = delta_es
        .get((count as f64 * 0.95) as usize)
        .copied()
        .unwrap_or(max);

    DeltaEStats {
        mean,
        max,
        p95,
        count,
    }
}
