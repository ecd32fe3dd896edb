//! # ase-tests
//!
//! Conformance and accuracy testing for oxase.
//!
//! This crate provides:
//! - A builder for synthetic ASE byte streams, including malformed ones
//! - Seeded sample generators for each color model
//! - Accuracy measurement using deltaE2000
//! - Reference conversions through the `palette` crate
//!
//! ## Test Categories
//!
//! 1. **Decoder conformance**: block layout, grouping, error reporting
//! 2. **Conversion properties**: round trips, fixed points, quantization
//! 3. **Palette parity**: RGB→Lab against an independent implementation
//! 4. **JSON output**: serialized document shape

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_lab, delta_e_2000};
pub use fixtures::AseBuilder;
