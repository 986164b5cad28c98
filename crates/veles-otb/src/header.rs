//! OTB file signature validation.
//!
//! An OTB file opens with a 4-byte wrapper that is not part of the node
//! stream, followed by the root node's start marker. The first attribute
//! record inside the root node is the version-info attribute, and its
//! record header sits at a fixed offset in every well-formed file:
//!
//! ```text
//! offset  0..4   wrapper (discarded)
//! offset  4      root start marker (0xFE)
//! offset  5      root group byte
//! offset  6..10  root flags (u32 LE)
//! offset  10     attribute type, must be 0x01 (version info)
//! offset  11..13 attribute length (u16 LE), must be 140
//! ```
//!
//! Both signature fields must match; a file where only one agrees is
//! rejected.

use crate::marker::NODE_START;
use crate::{Error, Result};

/// Byte offset of the root node's start marker.
pub const ROOT_OFFSET: usize = 4;

/// Byte offset of the version-info attribute type.
const VERSION_ATTR_OFFSET: usize = 10;

/// Fixed byte length of the version-info attribute payload.
const VERSION_INFO_LEN: u16 = 140;

/// Validate the fixed signature of an OTB file.
///
/// On success the buffer is known to hold the version-info attribute header
/// at its fixed offset and a root start marker at [`ROOT_OFFSET`]; parsing
/// may continue from there. Buffers too short to contain the signature are
/// rejected the same way as wrong signatures.
pub fn validate(data: &[u8]) -> Result<()> {
    if data.len() < VERSION_ATTR_OFFSET + 3 {
        return Err(Error::HeaderMismatch {
            version: data.get(VERSION_ATTR_OFFSET).copied().unwrap_or(0),
            length: 0,
        });
    }

    let version = data[VERSION_ATTR_OFFSET];
    let length = u16::from_le_bytes([
        data[VERSION_ATTR_OFFSET + 1],
        data[VERSION_ATTR_OFFSET + 2],
    ]);

    if version != crate::attribute::ATTR_VERSION || length != VERSION_INFO_LEN {
        return Err(Error::HeaderMismatch { version, length });
    }

    if data[ROOT_OFFSET] != NODE_START {
        return Err(Error::MissingRootNode {
            actual: data[ROOT_OFFSET],
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_prefix() -> Vec<u8> {
        let mut data = vec![0u8; 4];
        data.push(NODE_START);
        data.push(0); // group
        data.extend_from_slice(&0u32.to_le_bytes()); // flags
        data.push(0x01); // version attribute type
        data.extend_from_slice(&140u16.to_le_bytes());
        data.extend_from_slice(&[0u8; 140]);
        data
    }

    #[test]
    fn test_valid_signature() {
        assert!(validate(&signed_prefix()).is_ok());
    }

    #[test]
    fn test_wrong_attribute_type() {
        let mut data = signed_prefix();
        data[10] = 0x02;
        assert!(matches!(
            validate(&data),
            Err(Error::HeaderMismatch {
                version: 0x02,
                length: 140
            })
        ));
    }

    #[test]
    fn test_wrong_attribute_length() {
        // The length disagreeing is enough to reject, even though the
        // type byte still matches.
        let mut data = signed_prefix();
        data[11] = 0x00;
        data[12] = 0x01;
        assert!(matches!(
            validate(&data),
            Err(Error::HeaderMismatch {
                version: 0x01,
                length: 256
            })
        ));
    }

    #[test]
    fn test_short_buffer() {
        assert!(matches!(
            validate(&[0u8; 8]),
            Err(Error::HeaderMismatch { .. })
        ));
        assert!(matches!(validate(&[]), Err(Error::HeaderMismatch { .. })));
    }

    #[test]
    fn test_missing_root_marker() {
        let mut data = signed_prefix();
        data[4] = 0x00;
        assert!(matches!(
            validate(&data),
            Err(Error::MissingRootNode { actual: 0x00 })
        ));
    }
}
