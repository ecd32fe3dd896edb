//! Block type tags

/// Group-start tag (`0xC001`)
pub const GROUP_START: i16 = -16383;
/// Group-end tag (`0xC002`)
pub const GROUP_END: i16 = -16382;
/// Color entry tag
pub const COLOR_ENTRY: i16 = 1;

/// Kind of a block in the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    GroupStart,
    GroupEnd,
    ColorEntry,
}

impl BlockType {
    /// Decode a block type tag, `None` if unrecognized
    pub const fn from_i16(tag: i16) -> Option<Self> {
        match tag {
            GROUP_START => Some(Self::GroupStart),
            GROUP_END => Some(Self::GroupEnd),
            COLOR_ENTRY => Some(Self::ColorEntry),
            _ => None,
        }
    }

    /// On-disk tag
    pub const fn tag(self) -> i16 {
        match self {
            Self::GroupStart => GROUP_START,
            Self::GroupEnd => GROUP_END,
            Self::ColorEntry => COLOR_ENTRY,
        }
    }
}
