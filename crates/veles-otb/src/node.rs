//! The decoded node tree.

use veles_common::BinaryReader;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::attribute::decode_attributes;
use crate::escape::unescape;
use crate::{Error, Result};

/// Fixed head of every node payload, as laid out on disk.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
struct NodeHead {
    /// Record/category discriminator.
    group: u8,
    /// Boolean property bitmask (little-endian).
    flags: u32,
}

/// One decoded node of the OTB tree.
///
/// Interpretation of `group` and `flags` is the caller's business; the
/// three optional scalars are present only when the corresponding attribute
/// record occurred in this node's payload. Children keep the order they
/// have in the byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-export", derive(serde::Serialize))]
pub struct Node {
    /// Record/category discriminator (container, splash, rune, ...).
    pub group: u8,
    /// Boolean property bitmask.
    pub flags: u32,
    /// Server-side item id, when attribute `0x10` was present.
    #[cfg_attr(
        feature = "json-export",
        serde(rename = "sid", skip_serializing_if = "Option::is_none")
    )]
    pub server_id: Option<u16>,
    /// Client-side sprite id, when attribute `0x11` was present.
    #[cfg_attr(
        feature = "json-export",
        serde(rename = "cid", skip_serializing_if = "Option::is_none")
    )]
    pub client_id: Option<u16>,
    /// Ground speed modifier, when attribute `0x14` was present.
    #[cfg_attr(feature = "json-export", serde(skip_serializing_if = "Option::is_none"))]
    pub speed: Option<u16>,
    /// Nested child nodes, in stream order.
    #[cfg_attr(feature = "json-export", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Node>,
}

impl Node {
    /// Build a node from its raw (still-escaped) payload and its already
    /// decoded children.
    pub(crate) fn from_payload(raw: &[u8], children: Vec<Node>) -> Result<Self> {
        let payload = unescape(raw);

        if payload.len() < std::mem::size_of::<NodeHead>() {
            return Err(Error::TruncatedHeader {
                available: payload.len(),
            });
        }

        let mut reader = BinaryReader::new(&payload);
        let head: NodeHead = reader.read_struct()?;
        let attributes = decode_attributes(reader.remaining_bytes())?;

        Ok(Self {
            group: head.group,
            flags: u32::from_le(head.flags),
            server_id: attributes.server_id,
            client_id: attributes.client_id,
            speed: attributes.speed,
            children,
        })
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
