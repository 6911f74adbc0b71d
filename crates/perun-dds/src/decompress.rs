//! Block-decompression seam.
//!
//! DXT texel math lives outside this crate. The decoder only computes how
//! many compressed bytes the base surface occupies, reads exactly that many,
//! and hands them to a [`BlockDecompressor`] implementation.

use crate::{Error, Result};

/// Block-compression variant named by the header FourCC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// DXT1 (BC1): 8-byte blocks, 1-bit alpha at most.
    Dxt1,
    /// DXT3 (BC2): 16-byte blocks, explicit alpha.
    Dxt3,
    /// DXT5 (BC3): 16-byte blocks, interpolated alpha.
    Dxt5,
}

impl CompressionMode {
    /// Bytes per 4x4 texel block.
    pub const fn block_size(self) -> usize {
        match self {
            Self::Dxt1 => 8,
            Self::Dxt3 | Self::Dxt5 => 16,
        }
    }

    /// Compressed byte length of a `width` x `height` surface.
    pub fn surface_size(self, width: u32, height: u32) -> usize {
        let blocks_x = (width as usize + 3) / 4;
        let blocks_y = (height as usize + 3) / 4;
        blocks_x * blocks_y * self.block_size()
    }
}

/// External capability that expands compressed blocks into RGBA8 pixels.
///
/// `blocks` holds exactly [`CompressionMode::surface_size`] bytes.
/// Implementations must return exactly `width * height * 4` bytes; the
/// decoder verifies this before handing the buffer to callers.
pub trait BlockDecompressor {
    /// Decompress one base surface.
    fn decompress(
        &self,
        width: u32,
        height: u32,
        blocks: &[u8],
        mode: CompressionMode,
    ) -> Result<Vec<u8>>;
}

/// Stand-in decompressor for callers that only handle uncompressed surfaces.
///
/// Fails every call with [`Error::NoDecompressor`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDecompressor;

impl BlockDecompressor for UnsupportedDecompressor {
    fn decompress(
        &self,
        _width: u32,
        _height: u32,
        _blocks: &[u8],
        mode: CompressionMode,
    ) -> Result<Vec<u8>> {
        Err(Error::NoDecompressor(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_sizes() {
        assert_eq!(CompressionMode::Dxt1.block_size(), 8);
        assert_eq!(CompressionMode::Dxt3.block_size(), 16);
        assert_eq!(CompressionMode::Dxt5.block_size(), 16);
    }

    #[test]
    fn test_surface_size_rounds_up_to_blocks() {
        // One block minimum, even for tiny surfaces.
        assert_eq!(CompressionMode::Dxt1.surface_size(1, 1), 8);
        assert_eq!(CompressionMode::Dxt5.surface_size(1, 1), 16);

        // 5x3 pixels is 2x1 blocks.
        assert_eq!(CompressionMode::Dxt1.surface_size(5, 3), 16);
        assert_eq!(CompressionMode::Dxt3.surface_size(5, 3), 32);

        // Exact multiples of the block edge.
        assert_eq!(CompressionMode::Dxt1.surface_size(8, 8), 32);
        assert_eq!(CompressionMode::Dxt5.surface_size(1024, 1024), 1024 * 1024);
    }

    #[test]
    fn test_unsupported_decompressor_refuses() {
        let result = UnsupportedDecompressor.decompress(4, 4, &[0u8; 8], CompressionMode::Dxt1);
        assert!(matches!(result, Err(Error::NoDecompressor(CompressionMode::Dxt1))));
    }
}
