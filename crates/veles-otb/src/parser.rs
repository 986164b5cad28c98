//! Recursive-descent parser over the framed node stream.

use std::fs;
use std::path::Path;

use veles_common::memchr::memchr3;

use crate::header;
use crate::marker::{Marker, NODE_END, NODE_ESCAPE, NODE_START};
use crate::node::Node;
use crate::{Error, Result};

/// A decoded OTB item database file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Otb {
    root: Node,
}

impl Otb {
    /// Decode an OTB file from its raw bytes.
    ///
    /// The signature is validated first ([`Error::HeaderMismatch`] /
    /// [`Error::MissingRootNode`] before any node parsing), then the root
    /// node is parsed recursively. Bytes after the root's end marker are
    /// ignored.
    pub fn parse(data: &[u8]) -> Result<Self> {
        header::validate(data)?;

        let (root, _consumed) = parse_node(&data[header::ROOT_OFFSET..])?;
        Ok(Self { root })
    }

    /// Read and decode an OTB file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    #[cfg(test)]
    pub(crate) fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// The root node of the tree. Its children are the item nodes.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consume the document, yielding the owned root node.
    pub fn into_root(self) -> Node {
        self.root
    }
}

/// Parse one node from a slice that begins exactly at its start marker.
///
/// Returns the node and the total number of bytes it occupied, start and
/// end markers included, so the caller can advance its cursor without
/// re-scanning the child region.
fn parse_node(data: &[u8]) -> Result<(Node, usize)> {
    // data[0] is this node's start marker, verified by the caller.
    let body = &data[1..];

    let mut pos = 0usize;
    let mut payload: Option<&[u8]> = None;
    let mut children = Vec::new();

    while pos < body.len() {
        // Jump to the next structural byte; everything in between is plain
        // payload data.
        let Some(offset) = memchr3(NODE_START, NODE_END, NODE_ESCAPE, &body[pos..]) else {
            break;
        };
        pos += offset;
        let byte = body[pos];

        // The node's own payload ends at the first unescaped start or end
        // marker, captured exactly once.
        if payload.is_none() && byte != NODE_ESCAPE {
            payload = Some(&body[..pos]);
        }

        match Marker::classify(byte) {
            Some(Marker::Escape) => {
                // Skip the prefix and the escaped byte as a pair so a
                // literal marker value is not mistaken for structure.
                pos += 2;
            }
            Some(Marker::Start) => {
                let (child, consumed) = parse_node(&body[pos..])?;
                children.push(child);
                pos += consumed;
            }
            Some(Marker::End) => {
                let raw = match payload {
                    Some(raw) => raw,
                    None => &body[..pos],
                };
                let node = Node::from_payload(raw, children)?;
                // Start marker + body up to the end marker + end marker.
                return Ok((node, 1 + pos + 1));
            }
            None => pos += 1,
        }
    }

    Err(Error::UnterminatedNode)
}
