//! Error types for DDS decoding.

use thiserror::Error;

use crate::decompress::CompressionMode;

/// Errors that can occur when decoding DDS files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error, including short reads of pixel or block data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] perun_common::Error),

    /// The stream does not start with the DDS magic.
    #[error("file does not appear to be a DDS image: bad magic {0:?}")]
    InvalidMagic([u8; 4]),

    /// The FourCC names a codec this decoder does not recognize.
    #[error("file is not a supported DDS format: unknown FourCC {0:?}")]
    UnsupportedFourCc([u8; 4]),

    /// The uncompressed pixel format matches no known layout.
    #[error("file is not a supported DDS format: unrecognized pixel layout")]
    UnsupportedLayout,

    /// The recorded row pitch cannot hold a full row of packed pixels.
    #[error("row pitch of {pitch} bytes cannot hold {width} pixels of {bytes_per_pixel} bytes")]
    PitchTooSmall {
        pitch: usize,
        width: usize,
        bytes_per_pixel: usize,
    },

    /// A block decompressor broke its output-size contract.
    #[error("block decompressor returned {actual} bytes, expected {expected}")]
    DecompressorOutput { expected: usize, actual: usize },

    /// No block decompressor is available for a compressed surface.
    #[error("no block decompressor available for {0:?} data")]
    NoDecompressor(CompressionMode),
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
