//! Adobe Swatch Exchange (ASE) decoding
//!
//! An ASE file is a big-endian stream:
//!
//! ```text
//! header     "ASEF" u16 major u16 minor
//! count      i32 number of blocks
//! block*     i16 type, i32 length, `length` bytes of content
//! ```
//!
//! Block types are group-start (`0xC001`), group-end (`0xC002`) and color
//! entry (`0x0001`). Group blocks carry a UTF-16 name; color blocks carry a
//! name, a 4-byte model tag, the model's `f32` components and an `i16`
//! color kind.

pub mod block;
mod decoder;
pub mod error;
pub mod header;
mod reader;
mod tree;

pub use block::{BlockType, COLOR_ENTRY, GROUP_END, GROUP_START};
pub use decoder::{decode, decode_bytes, decode_file, decode_file_with_options, decode_with_options};
pub use error::FormatError;
pub use header::{ASE_SIGNATURE, BLOCK_HEADER_SIZE, HEADER_SIZE, Header};
