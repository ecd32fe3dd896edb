//! Synthetic ASE streams
//!
//! [`AseBuilder`] writes well-formed blocks by default and exposes raw
//! escape hatches (arbitrary tags, lengths and bodies) for malformed input.

use oxase_core::ase::{BlockType, Header};
use oxase_core::{Color, ColorSpace};

/// Encode a name as written by Adobe tools: unit count including the
/// terminating NUL, then UTF-16BE units
pub fn name_bytes(name: &str) -> Vec<u8> {
    let units: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
    let mut out = Vec::with_capacity(2 + units.len() * 2);
    out.extend_from_slice(&(units.len() as u16).to_be_bytes());
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Content of a color block
pub fn color_body(name: &str, tag: &[u8; 4], vals: &[f32], kind: i16) -> Vec<u8> {
    let mut out = name_bytes(name);
    out.extend_from_slice(tag);
    for v in vals {
        out.extend_from_slice(&v.to_be_bytes());
    }
    if tag == b"Gray" {
        out.extend_from_slice(&[0, 0]);
    }
    out.extend_from_slice(&kind.to_be_bytes());
    out
}

/// Builder for ASE byte streams
#[derive(Debug, Clone)]
pub struct AseBuilder {
    header: Header,
    count: Option<i32>,
    blocks: Vec<u8>,
    written: i32,
}

impl Default for AseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AseBuilder {
    pub fn new() -> Self {
        Self {
            header: Header::default(),
            count: None,
            blocks: Vec::new(),
            written: 0,
        }
    }

    /// Override the signature
    pub fn signature(mut self, signature: [u8; 4]) -> Self {
        self.header.signature = signature;
        self
    }

    pub fn version(mut self, major: u16, minor: u16) -> Self {
        self.header.major = major;
        self.header.minor = minor;
        self
    }

    /// Declare a block count other than the number of blocks written
    pub fn declared_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Append a block with a correct length
    pub fn block(self, tag: i16, body: &[u8]) -> Self {
        let length = body.len() as i32;
        self.raw_block(tag, length, body)
    }

    /// Append a block with an arbitrary declared length
    pub fn raw_block(mut self, tag: i16, length: i32, body: &[u8]) -> Self {
        self.blocks.extend_from_slice(&tag.to_be_bytes());
        self.blocks.extend_from_slice(&length.to_be_bytes());
        self.blocks.extend_from_slice(body);
        self.written += 1;
        self
    }

    pub fn group_start(self, name: &str) -> Self {
        self.block(BlockType::GroupStart.tag(), &name_bytes(name))
    }

    pub fn group_end(self) -> Self {
        self.block(BlockType::GroupEnd.tag(), &[])
    }

    /// Group start, `fill`, group end
    pub fn group(self, name: &str, fill: impl FnOnce(Self) -> Self) -> Self {
        fill(self.group_start(name)).group_end()
    }

    pub fn rgb(self, name: &str, r: f32, g: f32, b: f32) -> Self {
        self.color_raw(name, &ColorSpace::Rgb.tag(), &[r, g, b], 2)
    }

    pub fn cmyk(self, name: &str, c: f32, m: f32, y: f32, k: f32) -> Self {
        self.color_raw(name, &ColorSpace::Cmyk.tag(), &[c, m, y, k], 2)
    }

    pub fn lab(self, name: &str, l: f32, a: f32, b: f32) -> Self {
        self.color_raw(name, &ColorSpace::Lab.tag(), &[l, a, b], 2)
    }

    pub fn gray(self, name: &str, value: f32) -> Self {
        self.color_raw(name, &ColorSpace::Gray.tag(), &[value], 2)
    }

    /// Append a color block with any model tag and kind
    pub fn color_raw(self, name: &str, tag: &[u8; 4], vals: &[f32], kind: i16) -> Self {
        self.block(BlockType::ColorEntry.tag(), &color_body(name, tag, vals, kind))
    }

    /// Append an existing color; components are narrowed to `f32`
    pub fn color(self, color: &Color) -> Self {
        let vals: Vec<f32> = color.components().iter().map(|&v| v as f32).collect();
        self.color_raw(color.name(), &color.space().tag(), &vals, color.kind().to_i16())
    }

    /// Append bytes after the last block
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.blocks.extend_from_slice(bytes);
        self
    }

    /// Number of blocks appended so far
    pub fn block_count(&self) -> i32 {
        self.written
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + self.blocks.len());
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&self.count.unwrap_or(self.written).to_be_bytes());
        out.extend_from_slice(&self.blocks);
        out
    }
}
