//! Position-tracking big-endian reader
//!
//! Wraps any `Read + Seek` source and remembers the current offset and
//! block index so that every error carries enough context to locate the
//! problem in the file.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

use super::error::FormatError;
use crate::{Error, Result};

pub(crate) struct BlockReader<R> {
    inner: R,
    position: u64,
    block: Option<usize>,
}

impl<R: Read + Seek> BlockReader<R> {
    pub(crate) fn new(mut inner: R) -> Result<Self> {
        let position = inner.stream_position()?;
        Ok(Self {
            inner,
            position,
            block: None,
        })
    }

    /// Current absolute offset in the underlying stream
    pub(crate) fn position(&self) -> u64 {
        self.position
    }

    /// Set the block index reported in errors
    pub(crate) fn enter_block(&mut self, index: usize) {
        self.block = Some(index);
    }

    /// Build a format error at the current position
    pub(crate) fn format_error(&self, kind: FormatError) -> Error {
        Error::Format {
            block: self.block,
            offset: self.position,
            kind,
        }
    }

    fn truncated(&self, source: std::io::Error) -> Error {
        Error::Truncated {
            block: self.block,
            offset: self.position,
            source,
        }
    }

    fn advance<T>(&mut self, width: u64, result: std::io::Result<T>) -> Result<T> {
        let value = result.map_err(|e| self.truncated(e))?;
        self.position += width;
        Ok(value)
    }

    pub(crate) fn read_i16(&mut self) -> Result<i16> {
        let result = self.inner.read_i16::<BigEndian>();
        self.advance(2, result)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        let result = self.inner.read_u16::<BigEndian>();
        self.advance(2, result)
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        let result = self.inner.read_i32::<BigEndian>();
        self.advance(4, result)
    }

    /// Read a big-endian `f32`, widened to `f64`
    pub(crate) fn read_f32(&mut self) -> Result<f64> {
        let result = self.inner.read_f32::<BigEndian>();
        self.advance(4, result).map(f64::from)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        let result = self.inner.read_exact(&mut buf);
        self.advance(N as u64, result)?;
        Ok(buf)
    }

    /// Read a length-prefixed UTF-16BE name
    ///
    /// The prefix counts UTF-16 code units and includes the terminating
    /// NUL that writers append; trailing NULs are stripped.
    pub(crate) fn read_name(&mut self) -> Result<String> {
        let units = self.read_u16()? as usize;
        let mut raw = vec![0u8; units * 2];
        let result = self.inner.read_exact(&mut raw);
        self.advance(raw.len() as u64, result)?;

        let code_units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        let name = String::from_utf16(&code_units)
            .map_err(|_| self.format_error(FormatError::InvalidName))?;

        Ok(name.trim_end_matches('\0').to_string())
    }

    /// Move to an absolute offset
    pub(crate) fn seek_to(&mut self, offset: u64) -> Result<()> {
        if offset != self.position {
            self.inner.seek(SeekFrom::Start(offset))?;
            self.position = offset;
        }
        Ok(())
    }
}
