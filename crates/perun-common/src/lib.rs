//! Common utilities for Perun.
//!
//! This crate provides the foundational types shared by the Perun decoder
//! crates:
//!
//! - [`BinaryReader`] - binary reading from byte slices
//! - [`ProgressCounter`] - atomic progress counting across worker threads

mod error;
mod progress;
mod reader;

pub use error::{Error, Result};
pub use progress::ProgressCounter;
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
