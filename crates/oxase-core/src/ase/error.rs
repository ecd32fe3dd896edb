//! ASE format error kinds

use std::fmt;

/// Ways a swatch stream can be malformed
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// Block type tag is not group-start, group-end or color
    UnknownBlockType(i16),
    /// Color model tag is not CMYK, RGB, LAB or Gray
    UnknownColorSpace([u8; 4]),
    /// Color kind outside 0..=2
    InvalidColorKind(i16),
    /// Group-end without a matching group-start
    GroupUnderflow,
    /// Block count in the file header is negative
    NegativeBlockCount(i32),
    /// Block length in a block header is negative
    NegativeBlockLength(i32),
    /// Name is not valid UTF-16
    InvalidName,
    /// Block handler read past the declared block length
    BlockOverrun { declared: u64, consumed: u64 },
    /// Groups still open at end of stream
    UnclosedGroups(usize),
    /// Group nesting exceeds the configured limit
    NestingTooDeep(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBlockType(tag) => {
                write!(f, "unrecognized block type {} (0x{:04X})", tag, *tag as u16)
            }
            Self::UnknownColorSpace(tag) => {
                write!(
                    f,
                    "unrecognized color space '{}'",
                    String::from_utf8_lossy(tag).escape_debug()
                )
            }
            Self::InvalidColorKind(kind) => {
                write!(f, "invalid color kind {} (expected 0, 1 or 2)", kind)
            }
            Self::GroupUnderflow => write!(f, "group end without matching group start"),
            Self::NegativeBlockCount(count) => write!(f, "negative block count {}", count),
            Self::NegativeBlockLength(len) => write!(f, "negative block length {}", len),
            Self::InvalidName => write!(f, "name is not valid UTF-16"),
            Self::BlockOverrun { declared, consumed } => {
                write!(
                    f,
                    "block declares {} bytes but {} were consumed",
                    declared, consumed
                )
            }
            Self::UnclosedGroups(count) => {
                write!(f, "{} group(s) still open at end of stream", count)
            }
            Self::NestingTooDeep(limit) => {
                write!(f, "group nesting deeper than {}", limit)
            }
        }
    }
}

impl std::error::Error for FormatError {}
