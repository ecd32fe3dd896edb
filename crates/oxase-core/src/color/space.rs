//! Color space and color kind tags

use serde::{Serialize, Serializer};

/// Color model of a swatch entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorSpace {
    #[serde(rename = "CMYK")]
    Cmyk,
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "LAB")]
    Lab,
    #[serde(rename = "GRAY")]
    Gray,
}

impl ColorSpace {
    /// Parse a 4-byte model tag as stored in swatch files
    ///
    /// Trailing spaces are trimmed before matching, so `b"RGB "` and
    /// `b"LAB "` are accepted. Returns `None` for anything else.
    pub fn from_tag(tag: [u8; 4]) -> Option<Self> {
        let end = tag.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
        match &tag[..end] {
            b"CMYK" => Some(Self::Cmyk),
            b"RGB" => Some(Self::Rgb),
            b"LAB" => Some(Self::Lab),
            b"Gray" => Some(Self::Gray),
            _ => None,
        }
    }

    /// The 4-byte tag written for this space
    pub const fn tag(&self) -> [u8; 4] {
        match self {
            Self::Cmyk => *b"CMYK",
            Self::Rgb => *b"RGB ",
            Self::Lab => *b"LAB ",
            Self::Gray => *b"Gray",
        }
    }

    /// Number of meaningful components
    pub const fn channels(&self) -> usize {
        match self {
            Self::Cmyk => 4,
            Self::Rgb | Self::Lab => 3,
            Self::Gray => 1,
        }
    }

    /// Upper-case name, as used in serialized output
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cmyk => "CMYK",
            Self::Rgb => "RGB",
            Self::Lab => "LAB",
            Self::Gray => "GRAY",
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cmyk" => Ok(Self::Cmyk),
            "rgb" => Ok(Self::Rgb),
            "lab" => Ok(Self::Lab),
            "gray" | "grey" | "grayscale" => Ok(Self::Gray),
            other => Err(format!("unknown color space '{other}'")),
        }
    }
}

/// Usage hint attached to every color entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorKind {
    Global,
    Spot,
    #[default]
    Normal,
}

impl ColorKind {
    /// Decode the on-disk value (0 = global, 1 = spot, 2 = normal)
    pub const fn from_i16(value: i16) -> Option<Self> {
        match value {
            0 => Some(Self::Global),
            1 => Some(Self::Spot),
            2 => Some(Self::Normal),
            _ => None,
        }
    }

    /// On-disk value of this kind
    pub const fn to_i16(self) -> i16 {
        match self {
            Self::Global => 0,
            Self::Spot => 1,
            Self::Normal => 2,
        }
    }

    /// Upper-case name, as used in serialized output
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::Spot => "SPOT",
            Self::Normal => "NORMAL",
        }
    }
}

impl std::fmt::Display for ColorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ColorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_trim_trailing_spaces() {
        assert_eq!(ColorSpace::from_tag(*b"RGB "), Some(ColorSpace::Rgb));
        assert_eq!(ColorSpace::from_tag(*b"LAB "), Some(ColorSpace::Lab));
        assert_eq!(ColorSpace::from_tag(*b"CMYK"), Some(ColorSpace::Cmyk));
        assert_eq!(ColorSpace::from_tag(*b"Gray"), Some(ColorSpace::Gray));
        assert_eq!(ColorSpace::from_tag(*b"XYZ "), None);
        assert_eq!(ColorSpace::from_tag(*b"    "), None);
        // Tags are case sensitive
        assert_eq!(ColorSpace::from_tag(*b"GRAY"), None);
    }

    #[test]
    fn test_tag_roundtrip() {
        for space in [ColorSpace::Cmyk, ColorSpace::Rgb, ColorSpace::Lab, ColorSpace::Gray] {
            assert_eq!(ColorSpace::from_tag(space.tag()), Some(space));
        }
    }

    #[test]
    fn test_kind_range() {
        assert_eq!(ColorKind::from_i16(0), Some(ColorKind::Global));
        assert_eq!(ColorKind::from_i16(1), Some(ColorKind::Spot));
        assert_eq!(ColorKind::from_i16(2), Some(ColorKind::Normal));
        assert_eq!(ColorKind::from_i16(3), None);
        assert_eq!(ColorKind::from_i16(-1), None);
        assert_eq!(ColorKind::Spot.to_string(), "SPOT");
    }

    #[test]
    fn test_parse_space_name() {
        assert_eq!("Lab".parse::<ColorSpace>(), Ok(ColorSpace::Lab));
        assert_eq!("grey".parse::<ColorSpace>(), Ok(ColorSpace::Gray));
        assert!("xyz".parse::<ColorSpace>().is_err());
    }
}
