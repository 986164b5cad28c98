//! Escape-prefix removal for node payloads.

use std::borrow::Cow;

use veles_common::memchr::memchr;

use crate::marker::NODE_ESCAPE;

/// Remove escape prefixes from one node's raw payload.
///
/// The input is the byte range between a node's own start and end markers,
/// exclusive of the markers. Every `0xFD` prefix is removed and the byte
/// following it is kept verbatim; that following byte is never re-examined
/// as a prefix candidate, so an escaped literal `0xFD` survives as a single
/// data byte.
///
/// The search starts one byte past the start of the payload: the first
/// payload byte is the group byte, which is never an escape prefix. A
/// payload without any escape bytes is returned borrowed, unchanged.
pub fn unescape(payload: &[u8]) -> Cow<'_, [u8]> {
    if payload.len() < 2 {
        return Cow::Borrowed(payload);
    }

    let Some(first) = memchr(NODE_ESCAPE, &payload[1..]) else {
        return Cow::Borrowed(payload);
    };

    let mut prefix = first + 1;
    let mut out = Vec::with_capacity(payload.len() - 1);
    out.extend_from_slice(&payload[..prefix]);

    loop {
        // Drop the prefix, keep the byte that follows verbatim. A prefix as
        // the very last byte has nothing to preserve.
        if prefix + 1 < payload.len() {
            out.push(payload[prefix + 1]);
        }

        let resume = prefix + 2;
        if resume >= payload.len() {
            break;
        }

        match memchr(NODE_ESCAPE, &payload[resume..]) {
            Some(offset) => {
                let next = resume + offset;
                out.extend_from_slice(&payload[resume..next]);
                prefix = next;
            }
            None => {
                out.extend_from_slice(&payload[resume..]);
                break;
            }
        }
    }

    Cow::Owned(out)
}
