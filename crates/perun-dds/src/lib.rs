//! DDS texture decoding for Perun.
//!
//! This crate decodes the base surface of a DDS (DirectDraw Surface) file
//! into a canonical RGBA8 [`PixelBuffer`]:
//!
//! - Block-compressed surfaces (DXT1/DXT3/DXT5) are sized, read, and routed
//!   through a pluggable [`BlockDecompressor`].
//! - Uncompressed surfaces are classified against the known legacy layouts
//!   and expanded channel by channel with bit replication.
//!
//! Decoding is synchronous and stateless; concurrent decodes on independent
//! streams need no locking.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//!
//! use perun_dds::{decode, UnsupportedDecompressor};
//!
//! let file = File::open("textures/diffuse.dds")?;
//! let pixels = decode(file, &UnsupportedDecompressor)?;
//! println!("{}x{}", pixels.width(), pixels.height());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decode;
mod decompress;
mod error;
mod format;
mod header;

pub use decode::{decode, decode_with_header, read_header, PixelBuffer};
pub use decompress::{BlockDecompressor, CompressionMode, UnsupportedDecompressor};
pub use error::{Error, Result};
pub use format::{DecodeFormat, PixelLayout};
pub use header::{DdsHeader, DdsPixelFormat, FourCC};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
