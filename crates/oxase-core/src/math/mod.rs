//! Mathematical operations for the color engine
//!
//! - 3x3 matrix operations for RGB↔XYZ transforms

pub mod matrix;

pub use matrix::Matrix3x3;
