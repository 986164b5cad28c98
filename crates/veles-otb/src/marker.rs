//! Structural marker bytes of the OTB node stream.
//!
//! The format delimits nodes in-band with three reserved byte values. A
//! payload byte equal to one of them is written with [`NODE_ESCAPE`] in
//! front of it; the decoder strips that prefix again.

/// Marks the start of a node.
pub const NODE_START: u8 = 0xFE;

/// Marks the end of a node.
pub const NODE_END: u8 = 0xFF;

/// Escape prefix for payload bytes that collide with a marker value.
pub const NODE_ESCAPE: u8 = 0xFD;

/// Structural role of a reserved byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Node start (`0xFE`).
    Start,
    /// Node end (`0xFF`).
    End,
    /// Escape prefix (`0xFD`).
    Escape,
}

impl Marker {
    /// Classify a byte, returning `None` for plain data bytes.
    #[inline]
    pub const fn classify(byte: u8) -> Option<Self> {
        match byte {
            NODE_START => Some(Self::Start),
            NODE_END => Some(Self::End),
            NODE_ESCAPE => Some(Self::Escape),
            _ => None,
        }
    }
}
