//! Error types for OTB decoding.

use thiserror::Error;

/// Errors that can occur when decoding an OTB file.
///
/// All of these are terminal: a malformed file yields an error, never a
/// partially populated tree.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] veles_common::Error),

    /// The file signature does not match an OTB item database.
    #[error(
        "not an OTB item database: root attribute type {version:#04x}, length {length} \
         (expected 0x01 and 140)"
    )]
    HeaderMismatch { version: u8, length: u16 },

    /// No root node start marker at the expected offset.
    #[error("no root node: expected start marker 0xFE at offset 4, got {actual:#04x}")]
    MissingRootNode { actual: u8 },

    /// A node start marker without a matching end marker.
    #[error("unterminated node: start marker without matching end marker")]
    UnterminatedNode,

    /// A node payload too short to hold the group byte and flags.
    #[error("truncated node header: payload holds {available} bytes, group + flags need 5")]
    TruncatedHeader { available: usize },

    /// An attribute record whose declared length runs past the payload.
    #[error("truncated attribute: record needs {needed} bytes but only {available} remain")]
    TruncatedAttribute { needed: usize, available: usize },
}

/// Result type for OTB operations.
pub type Result<T> = std::result::Result<T, Error>;
