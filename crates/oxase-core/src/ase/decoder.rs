//! ASE block stream decoder
//!
//! The stream is a flat list of length-prefixed blocks. Group-start and
//! group-end blocks bracket the blocks that belong to a group; color
//! blocks are appended to whichever group is innermost when they appear.
//!
//! The declared block length is authoritative: after each block the reader
//! is moved to `content start + length`, skipping anything the handler did
//! not consume.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use log::{debug, trace, warn};

use super::block::BlockType;
use super::error::FormatError;
use super::header::{ASE_SIGNATURE, HEADER_SIZE, Header};
use super::reader::BlockReader;
use super::tree::TreeBuilder;
use crate::color::{Cmyk, Color, ColorKind, ColorSpace, ColorValue, Lab, Rgb};
use crate::document::Document;
use crate::options::DecodeOptions;
use crate::Result;

/// Decode a swatch stream with default options
pub fn decode<R: Read + Seek>(reader: R) -> Result<Document> {
    decode_with_options(reader, &DecodeOptions::default())
}

/// Decode an in-memory swatch file with default options
pub fn decode_bytes(data: &[u8]) -> Result<Document> {
    decode(Cursor::new(data))
}

/// Open and decode a swatch file with default options
pub fn decode_file(path: impl AsRef<Path>) -> Result<Document> {
    decode_file_with_options(path, &DecodeOptions::default())
}

/// Open and decode a swatch file
pub fn decode_file_with_options(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Document> {
    let file = File::open(path.as_ref())?;
    debug!("Decoding {}", path.as_ref().display());
    decode_with_options(BufReader::new(file), options)
}

/// Decode a swatch stream
pub fn decode_with_options<R: Read + Seek>(reader: R, options: &DecodeOptions) -> Result<Document> {
    let mut reader = BlockReader::new(reader)?;

    let header = Header::from_bytes(reader.read_array::<HEADER_SIZE>()?);
    if !header.has_ase_signature() {
        debug!(
            "Unexpected signature {:?} (expected {:?}), decoding anyway",
            String::from_utf8_lossy(&header.signature),
            String::from_utf8_lossy(&ASE_SIGNATURE)
        );
    }

    let count = reader.read_i32()?;
    if count < 0 {
        return Err(reader.format_error(FormatError::NegativeBlockCount(count)));
    }
    debug!(
        "ASE v{}.{} with {} blocks",
        header.major, header.minor, count
    );

    let mut tree = TreeBuilder::new();
    for index in 0..count as usize {
        reader.enter_block(index);
        decode_block(&mut reader, &mut tree, options)?;
    }

    let open = tree.depth();
    if open > 0 {
        if options.strict {
            return Err(reader.format_error(FormatError::UnclosedGroups(open)));
        }
        warn!("{} group(s) still open at end of stream", open);
    }

    let (groups, colors) = tree.finish();
    Ok(Document::new(header, groups, colors))
}

fn decode_block<R: Read + Seek>(
    reader: &mut BlockReader<R>,
    tree: &mut TreeBuilder,
    options: &DecodeOptions,
) -> Result<()> {
    let tag = reader.read_i16()?;
    let length = reader.read_i32()?;
    if length < 0 {
        return Err(reader.format_error(FormatError::NegativeBlockLength(length)));
    }
    let start = reader.position();
    let end = start + length as u64;
    trace!("Block tag {} length {} at {}", tag, length, start);

    match BlockType::from_i16(tag) {
        Some(BlockType::GroupStart) => {
            let name = reader.read_name()?;
            if tree.depth() >= options.max_depth {
                return Err(reader.format_error(FormatError::NestingTooDeep(options.max_depth)));
            }
            tree.open(name);
        }
        Some(BlockType::GroupEnd) => {
            if !tree.close() {
                return Err(reader.format_error(FormatError::GroupUnderflow));
            }
        }
        Some(BlockType::ColorEntry) => {
            let color = read_color(reader)?;
            tree.add_color(color);
        }
        None => return Err(reader.format_error(FormatError::UnknownBlockType(tag))),
    }

    let consumed = reader.position() - start;
    if consumed > length as u64 {
        let kind = FormatError::BlockOverrun {
            declared: length as u64,
            consumed,
        };
        if options.strict {
            return Err(reader.format_error(kind));
        }
        warn!("Block at offset {}: {}, rewinding", start, kind);
    } else if consumed < length as u64 {
        trace!("Skipping {} trailing bytes", length as u64 - consumed);
    }

    reader.seek_to(end)
}

fn read_color<R: Read + Seek>(reader: &mut BlockReader<R>) -> Result<Color> {
    let name = reader.read_name()?;
    let tag = reader.read_array::<4>()?;
    let space = ColorSpace::from_tag(tag)
        .ok_or_else(|| reader.format_error(FormatError::UnknownColorSpace(tag)))?;

    let value = match space {
        ColorSpace::Rgb => ColorValue::Rgb(Rgb::new(
            reader.read_f32()?,
            reader.read_f32()?,
            reader.read_f32()?,
        )),
        ColorSpace::Cmyk => ColorValue::Cmyk(Cmyk::new(
            reader.read_f32()?,
            reader.read_f32()?,
            reader.read_f32()?,
            reader.read_f32()?,
        )),
        ColorSpace::Lab => ColorValue::Lab(Lab::new(
            reader.read_f32()?,
            reader.read_f32()?,
            reader.read_f32()?,
        )),
        ColorSpace::Gray => {
            let gray = reader.read_f32()?;
            // Filler keeps the kind field aligned; its value is meaningless
            let _ = reader.read_u16()?;
            ColorValue::Gray(gray)
        }
    };

    let raw_kind = reader.read_i16()?;
    let kind = ColorKind::from_i16(raw_kind)
        .ok_or_else(|| reader.format_error(FormatError::InvalidColorKind(raw_kind)))?;
    trace!("Color {:?}: {} {}", name, space, kind);

    Ok(Color::new(name, value, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ase::block::{COLOR_ENTRY, GROUP_END, GROUP_START};
    use crate::ase::header::BLOCK_HEADER_SIZE;
    use crate::Error;

    /// Minimal writer for hand-built test streams
    #[derive(Default)]
    struct Stream {
        blocks: Vec<u8>,
        count: i32,
    }

    impl Stream {
        fn block(mut self, tag: i16, body: &[u8]) -> Self {
            self.blocks.extend_from_slice(&tag.to_be_bytes());
            self.blocks.extend_from_slice(&(body.len() as i32).to_be_bytes());
            self.blocks.extend_from_slice(body);
            self.count += 1;
            self
        }

        fn start(self, name: &str) -> Self {
            self.block(GROUP_START, &name_bytes(name))
        }

        fn end(self) -> Self {
            self.block(GROUP_END, &[])
        }

        fn color(self, name: &str, tag: &[u8; 4], vals: &[f32], kind: i16) -> Self {
            self.block(COLOR_ENTRY, &color_body(name, tag, vals, kind))
        }

        fn bytes(&self) -> Vec<u8> {
            let mut out = Header::default().to_bytes().to_vec();
            out.extend_from_slice(&self.count.to_be_bytes());
            out.extend_from_slice(&self.blocks);
            out
        }
    }

    fn name_bytes(name: &str) -> Vec<u8> {
        let units: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
        let mut out = (units.len() as u16).to_be_bytes().to_vec();
        for unit in units {
            out.extend_from_slice(&unit.to_be_bytes());
        }
        out
    }

    fn color_body(name: &str, tag: &[u8; 4], vals: &[f32], kind: i16) -> Vec<u8> {
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

    fn format_kind(result: Result<Document>) -> FormatError {
        match result {
            Err(Error::Format { kind, .. }) => kind,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_no_blocks() {
        let doc = decode_bytes(&Stream::default().bytes()).unwrap();
        assert!(doc.is_empty());
        assert!(doc.header().has_ase_signature());
    }

    #[test]
    fn test_all_color_spaces() {
        let data = Stream::default()
            .color("r", b"RGB ", &[1.0, 0.5, 0.25], 0)
            .color("c", b"CMYK", &[0.1, 0.2, 0.3, 0.4], 1)
            .color("l", b"LAB ", &[50.0, -20.0, 30.0], 2)
            .color("g", b"Gray", &[0.75], 2)
            .bytes();
        let doc = decode_bytes(&data).unwrap();
        let colors = doc.colors();

        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0].value(), &ColorValue::Rgb(Rgb::new(1.0, 0.5, 0.25)));
        assert_eq!(colors[0].kind(), ColorKind::Global);
        assert_eq!(colors[1].space(), ColorSpace::Cmyk);
        assert_eq!(colors[1].components(), vec![0.1f32 as f64, 0.2f32 as f64, 0.3f32 as f64, 0.4f32 as f64]);
        assert_eq!(colors[1].kind(), ColorKind::Spot);
        assert_eq!(colors[2].value(), &ColorValue::Lab(Lab::new(50.0, -20.0, 30.0)));
        assert_eq!(colors[3].value(), &ColorValue::Gray(0.75));
        assert_eq!(colors[3].name(), "g");
    }

    #[test]
    fn test_empty_group() {
        let data = Stream::default().start("Empty").end().bytes();
        let doc = decode_bytes(&data).unwrap();
        assert_eq!(doc.groups().len(), 1);
        assert_eq!(doc.groups()[0].name(), "Empty");
        assert!(doc.groups()[0].is_empty());
        assert!(doc.colors().is_empty());
    }

    #[test]
    fn test_nested_groups() {
        let data = Stream::default()
            .start("A")
            .start("B")
            .color("X", b"RGB ", &[0.0, 0.0, 1.0], 2)
            .end()
            .end()
            .bytes();
        let doc = decode_bytes(&data).unwrap();

        let x = Color::new("X", ColorValue::Rgb(Rgb::new(0.0, 0.0, 1.0)), ColorKind::Normal);
        let expected = vec![crate::Group::new(
            "A",
            vec![crate::Group::new("B", vec![], vec![x])],
            vec![],
        )];
        assert_eq!(doc.groups(), expected.as_slice());
        assert!(doc.colors().is_empty());
    }

    #[test]
    fn test_unknown_block_type() {
        let data = Stream::default().block(999, &[]).bytes();
        assert_eq!(format_kind(decode_bytes(&data)), FormatError::UnknownBlockType(999));
    }

    #[test]
    fn test_unknown_color_space() {
        let data = Stream::default().color("x", b"XYZ ", &[0.1, 0.2, 0.3], 2).bytes();
        assert_eq!(
            format_kind(decode_bytes(&data)),
            FormatError::UnknownColorSpace(*b"XYZ ")
        );
    }

    #[test]
    fn test_invalid_color_kind() {
        let data = Stream::default().color("x", b"RGB ", &[0.1, 0.2, 0.3], 3).bytes();
        assert_eq!(format_kind(decode_bytes(&data)), FormatError::InvalidColorKind(3));
    }

    #[test]
    fn test_group_underflow() {
        let data = Stream::default().start("A").end().end().bytes();
        match decode_bytes(&data) {
            Err(Error::Format { block, kind, .. }) => {
                assert_eq!(kind, FormatError::GroupUnderflow);
                assert_eq!(block, Some(2));
            }
            other => panic!("expected underflow, got {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_group_is_lenient_by_default() {
        let data = Stream::default()
            .start("Open")
            .color("x", b"Gray", &[0.5], 2)
            .bytes();
        let doc = decode_bytes(&data).unwrap();
        assert_eq!(doc.groups()[0].colors().len(), 1);

        let strict = decode_with_options(Cursor::new(&data), &DecodeOptions::strict());
        assert_eq!(format_kind(strict), FormatError::UnclosedGroups(1));
    }

    #[test]
    fn test_trailing_block_bytes_are_skipped() {
        let mut body = color_body("pad", b"RGB ", &[0.1, 0.2, 0.3], 2);
        body.extend_from_slice(&[0xAA; 7]);
        let data = Stream::default()
            .block(COLOR_ENTRY, &body)
            .color("next", b"Gray", &[1.0], 0)
            .bytes();
        let doc = decode_bytes(&data).unwrap();
        let names: Vec<&str> = doc.colors().iter().map(Color::name).collect();
        assert_eq!(names, ["pad", "next"]);
    }

    #[test]
    fn test_overrun_rewinds_to_declared_end() {
        // Group-start whose declared length stops short of the name; the
        // stream holds only this block so the rewind lands nowhere harmful
        let name = name_bytes("Long name");
        let mut data = Stream::default();
        data.blocks.extend_from_slice(&GROUP_START.to_be_bytes());
        data.blocks.extend_from_slice(&2i32.to_be_bytes());
        data.blocks.extend_from_slice(&name);
        data.count = 1;
        let bytes = data.bytes();

        let doc = decode_bytes(&bytes).unwrap();
        assert_eq!(doc.groups()[0].name(), "Long name");

        let strict = decode_with_options(Cursor::new(&bytes), &DecodeOptions::strict());
        assert_eq!(
            format_kind(strict),
            FormatError::BlockOverrun {
                declared: 2,
                consumed: name.len() as u64
            }
        );
    }

    #[test]
    fn test_truncated_stream() {
        let mut data = Stream::default().color("x", b"CMYK", &[0.1, 0.2, 0.3, 0.4], 2).bytes();
        data.truncate(data.len() - 5);
        match decode_bytes(&data) {
            Err(Error::Truncated { block, .. }) => assert_eq!(block, Some(0)),
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_block_count() {
        let mut data = b"ASEF\x00\x01\x00\x00".to_vec();
        data.extend_from_slice(&(-1i32).to_be_bytes());
        assert_eq!(format_kind(decode_bytes(&data)), FormatError::NegativeBlockCount(-1));
    }

    #[test]
    fn test_nesting_limit() {
        let mut stream = Stream::default();
        for i in 0..4 {
            stream = stream.start(&format!("g{i}"));
        }
        for _ in 0..4 {
            stream = stream.end();
        }
        let data = stream.bytes();

        let options = DecodeOptions {
            max_depth: 3,
            ..DecodeOptions::default()
        };
        assert_eq!(
            format_kind(decode_with_options(Cursor::new(&data), &options)),
            FormatError::NestingTooDeep(3)
        );
        assert!(decode_bytes(&data).is_ok());
    }

    #[test]
    fn test_error_offsets() {
        let data = Stream::default().block(7, &[]).bytes();
        match decode_bytes(&data) {
            Err(Error::Format { block, offset, .. }) => {
                assert_eq!(block, Some(0));
                assert_eq!(offset, (HEADER_SIZE + 4 + BLOCK_HEADER_SIZE) as u64);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_signature_still_decodes() {
        let mut data = Stream::default().color("x", b"Gray", &[0.1], 2).bytes();
        data[..4].copy_from_slice(b"NOPE");
        let doc = decode_bytes(&data).unwrap();
        assert!(!doc.header().has_ase_signature());
        assert_eq!(doc.colors().len(), 1);
    }
}
