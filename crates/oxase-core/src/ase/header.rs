//! ASE file header
//!
//! The header is 8 bytes: the `ASEF` signature followed by a big-endian
//! major and minor version. It is recorded but not validated; files with
//! other signatures are decoded all the same.

/// Expected file signature
pub const ASE_SIGNATURE: [u8; 4] = *b"ASEF";

/// Size of the header in bytes
pub const HEADER_SIZE: usize = 8;

/// Size of a block header (type tag + length) in bytes
pub const BLOCK_HEADER_SIZE: usize = 6;

/// The 8-byte file header, as found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// File signature, normally `ASEF`
    pub signature: [u8; 4],
    /// Format major version (1 in every known writer)
    pub major: u16,
    /// Format minor version
    pub minor: u16,
}

impl Header {
    /// Parse header from its 8 raw bytes
    pub fn from_bytes(bytes: [u8; HEADER_SIZE]) -> Self {
        Self {
            signature: [bytes[0], bytes[1], bytes[2], bytes[3]],
            major: u16::from_be_bytes([bytes[4], bytes[5]]),
            minor: u16::from_be_bytes([bytes[6], bytes[7]]),
        }
    }

    /// Serialize back to raw bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let major = self.major.to_be_bytes();
        let minor = self.minor.to_be_bytes();
        let s = self.signature;
        [s[0], s[1], s[2], s[3], major[0], major[1], minor[0], minor[1]]
    }

    /// Whether the signature is `ASEF`
    pub fn has_ase_signature(&self) -> bool {
        self.signature == ASE_SIGNATURE
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            signature: ASE_SIGNATURE,
            major: 1,
            minor: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let header = Header::from_bytes(*b"ASEF\x00\x01\x00\x00");
        assert!(header.has_ase_signature());
        assert_eq!(header.major, 1);
        assert_eq!(header.minor, 0);
        assert_eq!(header, Header::default());
    }

    #[test]
    fn test_foreign_signature_is_kept() {
        let bytes = *b"XXXX\x00\x02\x00\x07";
        let header = Header::from_bytes(bytes);
        assert!(!header.has_ase_signature());
        assert_eq!(header.to_bytes(), bytes);
    }
}
