//! Server-id keyed item lookup.
//!
//! Importers key everything by server id: the map loader and the asset
//! build tool both resolve items through this table rather than walking
//! the tree each time.

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use crate::node::Node;
use crate::parser::Otb;

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Scalar summary of one item node, keyed by server id in [`ItemDatabase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json-export", derive(serde::Serialize))]
pub struct ItemRecord {
    /// Client-side sprite id.
    #[cfg_attr(
        feature = "json-export",
        serde(rename = "id", skip_serializing_if = "Option::is_none")
    )]
    pub client_id: Option<u16>,
    /// Boolean property bitmask.
    pub flags: u32,
    /// Record/category discriminator.
    pub group: u8,
    /// Ground speed modifier.
    #[cfg_attr(feature = "json-export", serde(skip_serializing_if = "Option::is_none"))]
    pub speed: Option<u16>,
}

/// Lookup table from server id to item record.
///
/// Built from the direct children of the root node; nodes without a server
/// id attribute (the root's version carrier, malformed exports) are left
/// out. A duplicate server id keeps the later node, matching the original
/// importer's overwrite behavior.
#[derive(Debug, Clone, Default)]
pub struct ItemDatabase {
    items: FxHashMap<u16, ItemRecord>,
}

impl ItemDatabase {
    /// Index a decoded OTB document.
    pub fn from_otb(otb: &Otb) -> Self {
        let mut items = FxHashMap::default();

        for node in &otb.root().children {
            if let Some(server_id) = node.server_id {
                items.insert(server_id, ItemRecord::from_node(node));
            }
        }

        Self { items }
    }

    /// Look up an item by server id.
    #[inline]
    pub fn get(&self, server_id: u16) -> Option<&ItemRecord> {
        self.items.get(&server_id)
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the database holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(server_id, record)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &ItemRecord)> {
        self.items.iter().map(|(&id, record)| (id, record))
    }
}

impl ItemRecord {
    fn from_node(node: &Node) -> Self {
        Self {
            client_id: node.client_id,
            flags: node.flags,
            group: node.group,
            speed: node.speed,
        }
    }
}
