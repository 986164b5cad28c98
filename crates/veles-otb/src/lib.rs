//! OTB binary item database decoder.
//!
//! Open Tibia servers ship their item definitions in `items.otb`, a compact
//! self-delimiting binary tree format. Nodes carry a group byte, a flags
//! bitmask and a sequence of typed attribute records, and nest arbitrarily
//! via child nodes. There is no length field: node boundaries are marked
//! in-band with reserved start/end bytes, and payload bytes that collide
//! with a marker value are escaped with a prefix byte.
//!
//! This crate decodes such a file into an owned [`Node`] tree and can index
//! the tree into an [`ItemDatabase`] keyed by server id.
//!
//! # Example
//!
//! ```no_run
//! use veles_otb::{ItemDatabase, Otb};
//!
//! let otb = Otb::open("items.otb")?;
//! println!("{} top-level items", otb.root().children.len());
//!
//! let db = ItemDatabase::from_otb(&otb);
//! if let Some(item) = db.get(2160) {
//!     println!("client id: {:?}", item.client_id);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod attribute;
mod database;
mod error;
mod escape;
mod header;
mod marker;
mod node;
mod parser;

pub use attribute::{ATTR_CLIENT_ID, ATTR_SERVER_ID, ATTR_SPEED, ATTR_VERSION};
pub use database::{ItemDatabase, ItemRecord};
pub use error::{Error, Result};
pub use escape::unescape;
pub use marker::{Marker, NODE_END, NODE_ESCAPE, NODE_START};
pub use node::Node;
pub use parser::Otb;
