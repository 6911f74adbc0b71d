//! DDS header structures.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// DDS file header, as laid out on disk after the 4-byte magic.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: u32,
    /// Header flags.
    pub flags: u32,
    /// Image height.
    pub height: u32,
    /// Image width.
    pub width: u32,
    /// Pitch or linear size; which one depends on [`flags`](Self::flags).
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels.
    pub mipmap_count: u32,
    /// Reserved.
    pub reserved1: [u32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2.
    pub caps2: u32,
    /// Surface capabilities 3.
    pub caps3: u32,
    /// Surface capabilities 4.
    pub caps4: u32,
    /// Reserved.
    pub reserved2: u32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// Flag: `pitch_or_linear_size` holds the byte stride of one row.
    pub const FLAG_PITCH: u32 = 0x0000_0008;
    /// Flag: `pitch_or_linear_size` holds the total byte size of the surface.
    pub const FLAG_LINEAR_SIZE: u32 = 0x0008_0000;

    /// Check whether an explicit row pitch was recorded.
    pub fn has_pitch(&self) -> bool {
        self.flags & Self::FLAG_PITCH != 0
    }

    /// Check whether a linear surface size was recorded.
    pub fn has_linear_size(&self) -> bool {
        self.flags & Self::FLAG_LINEAR_SIZE != 0
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: u32,
    /// Pixel format flags.
    pub flags: u32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: u32,
    /// Red bit mask.
    pub r_bit_mask: u32,
    /// Green bit mask.
    pub g_bit_mask: u32,
    /// Blue bit mask.
    pub b_bit_mask: u32,
    /// Alpha bit mask.
    pub a_bit_mask: u32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    /// Flag: `four_cc` names a compressed codec.
    pub const FLAG_FOURCC: u32 = 0x0000_0004;
    /// Flag: uncompressed RGB data, no alpha channel.
    pub const FLAG_RGB: u32 = 0x0000_0040;
    /// Flags: uncompressed RGB data with an alpha channel.
    pub const FLAG_RGBA: u32 = 0x0000_0041;

    /// Check whether the FourCC field is meaningful.
    pub fn has_four_cc(&self) -> bool {
        self.flags & Self::FLAG_FOURCC != 0
    }
}

/// Four-character code for compression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT3 compression.
    pub const DXT3: Self = Self(*b"DXT3");
    /// DXT5 compression.
    pub const DXT5: Self = Self(*b"DXT5");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout_matches_wire_format() {
        assert_eq!(std::mem::size_of::<DdsHeader>(), DdsHeader::SIZE as usize);
        assert_eq!(
            std::mem::size_of::<DdsPixelFormat>(),
            DdsPixelFormat::SIZE as usize
        );
    }

    #[test]
    fn test_pitch_flags() {
        let mut header = DdsHeader::read_from_bytes(&[0u8; 124]).unwrap();
        assert!(!header.has_pitch());
        assert!(!header.has_linear_size());

        header.flags = DdsHeader::FLAG_PITCH;
        assert!(header.has_pitch());

        header.flags = DdsHeader::FLAG_LINEAR_SIZE;
        assert!(header.has_linear_size());
    }

    #[test]
    fn test_rgba_flag_includes_alpha_bit() {
        assert_eq!(
            DdsPixelFormat::FLAG_RGBA,
            DdsPixelFormat::FLAG_RGB | 0x0000_0001
        );
    }
}
