//! Row-major 3x3 matrices for the RGB↔XYZ transforms

use std::ops::Mul;

#[inline]
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 3x3 matrix, `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Column `j` as an array
    #[inline]
    pub fn column(&self, j: usize) -> [f64; 3] {
        [self.m[0][j], self.m[1][j], self.m[2][j]]
    }

    /// Apply to a column vector: `M × v`
    #[inline]
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        self.m.map(|row| dot(row, v))
    }

    pub fn transpose(&self) -> Self {
        Self::new([self.column(0), self.column(1), self.column(2)])
    }

    /// Scalar triple product of the rows
    pub fn determinant(&self) -> f64 {
        let [r0, r1, r2] = self.m;
        dot(r0, cross(r1, r2))
    }

    /// Inverse, or `None` when the matrix is singular
    ///
    /// The adjugate's columns are the pairwise cross products of the rows.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-14 {
            return None;
        }
        let [r0, r1, r2] = self.m;
        let adjugate_t = Self::new([cross(r1, r2), cross(r2, r0), cross(r0, r1)]);
        let inv = adjugate_t.transpose();
        Some(Self::new(inv.m.map(|row| row.map(|v| v / det))))
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.apply(rhs)
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let cols = [rhs.column(0), rhs.column(1), rhs.column(2)];
        Self::new(self.m.map(|row| cols.map(|col| dot(row, col))))
    }
}
