//! # oxase - Adobe Swatch Exchange decoding
//!
//! Reads `.ase` swatch files into a tree of named groups and colors, and
//! converts swatch colors between the CMYK, RGB, CIELAB and grayscale
//! models they are stored in.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxase_core::{ColorSpace, ConversionOptions, Document};
//!
//! let doc = oxase_core::decode_file("palette.ase").unwrap();
//!
//! for color in doc.all_colors() {
//!     let rgb = color.to_rgb();
//!     println!("{} {:?} -> {:?}", color.name(), color.space(), rgb.to_8bit());
//! }
//!
//! // Whole-document conversion keeps the group structure
//! let lab: Document = doc.convert(ColorSpace::Lab, &ConversionOptions::default());
//! println!("{}", lab.to_json_pretty().unwrap());
//! ```
//!
//! ## Conversions
//!
//! RGB and CIELAB are linked through CIE XYZ with a D65 reference white.
//! CMYK and grayscale go through RGB. The XYZ→RGB step is selectable with
//! [`XyzToRgb`]: the default is the exact inverse of the RGB→XYZ matrix,
//! while [`XyzToRgb::Reference`] reproduces the output of older tools that
//! shipped a defective blue row.

pub mod ase;
pub mod color;
pub mod document;
pub mod error;
pub mod math;
pub mod options;

pub use ase::{
    FormatError, Header, decode, decode_bytes, decode_file, decode_file_with_options,
    decode_with_options,
};
pub use color::{Cmyk, Color, ColorKind, ColorSpace, ColorValue, Lab, Rgb, Xyz, XyzToRgb};
pub use document::{Document, Group, Quantized, Visitor};
pub use error::{Error, Result};
pub use options::{ConversionOptions, DEFAULT_MAX_DEPTH, DecodeOptions};

/// Version of oxase
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
