//! Attribute record decoding.
//!
//! A node payload carries zero or more attribute records after its 5-byte
//! head, each laid out as `[type:1][length:2 LE][value:length]`. Only the
//! three u16 scalar attributes below are decoded; every other type is
//! skipped by its declared length. The original items.otb defines many more
//! attribute types (names, sprite hashes, light info), all opaque here.

use veles_common::BinaryReader;

use crate::{Error, Result};

/// Version-info attribute carried by the root node (opaque 140-byte blob).
pub const ATTR_VERSION: u8 = 0x01;

/// Server-side item id (u16 LE).
pub const ATTR_SERVER_ID: u8 = 0x10;

/// Client-side sprite id (u16 LE).
pub const ATTR_CLIENT_ID: u8 = 0x11;

/// Ground speed / friction modifier (u16 LE).
pub const ATTR_SPEED: u8 = 0x14;

/// Scalar fields recovered from a node's attribute records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Attributes {
    pub server_id: Option<u16>,
    pub client_id: Option<u16>,
    pub speed: Option<u16>,
}

/// Walk the attribute records of a normalized payload.
///
/// `data` is the payload with the group byte and flags already consumed.
/// Decoding terminates exactly when the slice is exhausted; a record whose
/// header or declared value region would run past the end is reported as
/// [`Error::TruncatedAttribute`] rather than read out of bounds.
pub(crate) fn decode_attributes(data: &[u8]) -> Result<Attributes> {
    let mut attributes = Attributes::default();
    let mut reader = BinaryReader::new(data);

    while !reader.is_empty() {
        if reader.remaining() < 3 {
            return Err(Error::TruncatedAttribute {
                needed: 3,
                available: reader.remaining(),
            });
        }
        let attr_type = reader.read_u8()?;
        let length = reader.read_u16()? as usize;

        if reader.remaining() < length {
            return Err(Error::TruncatedAttribute {
                needed: length,
                available: reader.remaining(),
            });
        }

        let value = reader.read_bytes(length)?;

        match attr_type {
            ATTR_SERVER_ID | ATTR_CLIENT_ID | ATTR_SPEED => {
                // The known scalars are u16; a shorter value region cannot
                // hold the field the record claims.
                if length < 2 {
                    return Err(Error::TruncatedAttribute {
                        needed: 2,
                        available: length,
                    });
                }
                let scalar = u16::from_le_bytes([value[0], value[1]]);
                match attr_type {
                    ATTR_SERVER_ID => attributes.server_id = Some(scalar),
                    ATTR_CLIENT_ID => attributes.client_id = Some(scalar),
                    _ => attributes.speed = Some(scalar),
                }
            }
            _ => {}
        }
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attr_type: u8, value: &[u8]) -> Vec<u8> {
        let mut out = vec![attr_type];
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        out.extend_from_slice(value);
        out
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(decode_attributes(&[]).unwrap(), Attributes::default());
    }

    #[test]
    fn test_known_scalars() {
        let mut data = record(ATTR_SERVER_ID, &2160u16.to_le_bytes());
        data.extend(record(ATTR_CLIENT_ID, &3031u16.to_le_bytes()));
        data.extend(record(ATTR_SPEED, &150u16.to_le_bytes()));

        let attrs = decode_attributes(&data).unwrap();
        assert_eq!(attrs.server_id, Some(2160));
        assert_eq!(attrs.client_id, Some(3031));
        assert_eq!(attrs.speed, Some(150));
    }

    #[test]
    fn test_unknown_type_skipped() {
        // An unrecognized record contributes nothing, and decoding resumes
        // at the record that follows it.
        let mut data = record(0x2A, &[0xDE, 0xAD, 0xBE, 0xEF]);
        data.extend(record(ATTR_SERVER_ID, &100u16.to_le_bytes()));

        let attrs = decode_attributes(&data).unwrap();
        assert_eq!(attrs.server_id, Some(100));
        assert_eq!(attrs.client_id, None);
        assert_eq!(attrs.speed, None);
    }

    #[test]
    fn test_truncated_value() {
        // Declared length 8, only 2 value bytes present.
        let mut data = vec![0x2A];
        data.extend_from_slice(&8u16.to_le_bytes());
        data.extend_from_slice(&[0x01, 0x02]);

        assert!(matches!(
            decode_attributes(&data),
            Err(Error::TruncatedAttribute {
                needed: 8,
                available: 2
            })
        ));
    }

    #[test]
    fn test_truncated_record_header() {
        assert!(matches!(
            decode_attributes(&[ATTR_SERVER_ID, 0x02]),
            Err(Error::TruncatedAttribute {
                needed: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_scalar_too_short() {
        let data = record(ATTR_SPEED, &[0x01]);
        assert!(matches!(
            decode_attributes(&data),
            Err(Error::TruncatedAttribute {
                needed: 2,
                available: 1
            })
        ));
    }
}
