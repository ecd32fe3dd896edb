//! Error types for oxase

use thiserror::Error;

use crate::ase::FormatError;

/// Result type for oxase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding swatch files
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input is structurally invalid
    #[error("Format error{} at offset {offset}: {kind}", in_block(.block))]
    Format {
        /// Zero-based index of the block being decoded, if any
        block: Option<usize>,
        /// Byte offset where the problem was detected
        offset: u64,
        kind: FormatError,
    },

    /// Input ended early or could not be read
    #[error("Truncated input{} at offset {offset}: {source}", in_block(.block))]
    Truncated {
        block: Option<usize>,
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// I/O error outside of block decoding (open, seek)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The format error kind, if this is a format error
    pub fn format_kind(&self) -> Option<&FormatError> {
        match self {
            Self::Format { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Block index the error was detected in
    pub fn block(&self) -> Option<usize> {
        match self {
            Self::Format { block, .. } | Self::Truncated { block, .. } => *block,
            Self::Io(_) => None,
        }
    }
}

fn in_block(block: &Option<usize>) -> String {
    match block {
        Some(index) => format!(" in block {index}"),
        None => String::new(),
    }
}
