//! Common utilities for Veles.
//!
//! This crate provides the foundation shared by the Veles crates:
//!
//! - [`BinaryReader`] - Bounds-checked binary reading from byte slices
//! - [`Error`] - The common error type for binary reading failures

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Re-export memchr for SIMD-accelerated byte searching
pub use memchr;
