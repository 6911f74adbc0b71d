//! Pixel-format classification.
//!
//! A parsed [`DdsPixelFormat`] selects exactly one decode path: a
//! block-compressed mode named by FourCC, or one of the known uncompressed
//! layouts matched against an ordered rule table.

use crate::decompress::CompressionMode;
use crate::header::{DdsPixelFormat, FourCC};
use crate::{Error, Result};

/// Known uncompressed pixel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    A8R8G8B8,
    X8R8G8B8,
    A8B8G8R8,
    X8B8G8R8,
    A1R5G5B5,
    A4R4G4B4,
    R8G8B8,
    R5G6B5,
}

/// One packed channel: bit position and width inside the assembled pixel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Channel {
    pub shift: u32,
    pub width: u32,
}

impl Channel {
    const fn new(shift: u32, width: u32) -> Self {
        Self { shift, width }
    }

    /// Extract this channel from a packed pixel value and widen it to
    /// 8 bits by bit replication.
    pub fn extract(self, pixel: u32) -> u8 {
        let v = (pixel >> self.shift) & ((1 << self.width) - 1);
        match self.width {
            8 => v as u8,
            6 => ((v << 2) | (v >> 4)) as u8,
            5 => ((v << 3) | (v >> 2)) as u8,
            4 => ((v << 4) | v) as u8,
            1 => {
                if v != 0 {
                    0xff
                } else {
                    0x00
                }
            }
            _ => v as u8,
        }
    }
}

/// Channel placement for one uncompressed layout.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChannelMap {
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    /// `None` decodes as constant full opacity.
    pub alpha: Option<Channel>,
}

impl PixelLayout {
    /// Channel descriptor driving the unpack loop.
    pub(crate) const fn channels(self) -> ChannelMap {
        match self {
            Self::A8R8G8B8 => ChannelMap {
                red: Channel::new(16, 8),
                green: Channel::new(8, 8),
                blue: Channel::new(0, 8),
                alpha: Some(Channel::new(24, 8)),
            },
            Self::X8R8G8B8 => ChannelMap {
                red: Channel::new(16, 8),
                green: Channel::new(8, 8),
                blue: Channel::new(0, 8),
                alpha: None,
            },
            Self::A8B8G8R8 => ChannelMap {
                red: Channel::new(0, 8),
                green: Channel::new(8, 8),
                blue: Channel::new(16, 8),
                alpha: Some(Channel::new(24, 8)),
            },
            Self::X8B8G8R8 => ChannelMap {
                red: Channel::new(0, 8),
                green: Channel::new(8, 8),
                blue: Channel::new(16, 8),
                alpha: None,
            },
            Self::A1R5G5B5 => ChannelMap {
                red: Channel::new(10, 5),
                green: Channel::new(5, 5),
                blue: Channel::new(0, 5),
                alpha: Some(Channel::new(15, 1)),
            },
            Self::A4R4G4B4 => ChannelMap {
                red: Channel::new(8, 4),
                green: Channel::new(4, 4),
                blue: Channel::new(0, 4),
                alpha: Some(Channel::new(12, 4)),
            },
            Self::R8G8B8 => ChannelMap {
                red: Channel::new(16, 8),
                green: Channel::new(8, 8),
                blue: Channel::new(0, 8),
                alpha: None,
            },
            Self::R5G6B5 => ChannelMap {
                red: Channel::new(11, 5),
                green: Channel::new(5, 6),
                blue: Channel::new(0, 5),
                alpha: None,
            },
        }
    }
}

/// One classification rule: a predicate over the pixel format fields.
struct LayoutRule {
    layout: PixelLayout,
    matches: fn(&DdsPixelFormat) -> bool,
}

fn masks_match(pf: &DdsPixelFormat, flags: u32, bits: u32, r: u32, g: u32, b: u32, a: u32) -> bool {
    pf.flags == flags
        && pf.rgb_bit_count == bits
        && pf.r_bit_mask == r
        && pf.g_bit_mask == g
        && pf.b_bit_mask == b
        && pf.a_bit_mask == a
}

/// Ordered layout table; the first matching rule wins.
const LAYOUT_RULES: [LayoutRule; 8] = [
    LayoutRule {
        layout: PixelLayout::A8R8G8B8,
        // This rule tests the alpha mask where the red mask was presumably
        // intended, and the two alpha comparisons cannot both hold, so it
        // never matches: canonical A8R8G8B8 files are rejected as
        // unsupported. Known long-standing behavior, kept bit-for-bit; see
        // test_a8r8g8b8_rule_never_matches.
        matches: |pf| {
            pf.flags == DdsPixelFormat::FLAG_RGBA
                && pf.rgb_bit_count == 32
                && pf.a_bit_mask == 0x00ff_0000
                && pf.g_bit_mask == 0x0000_ff00
                && pf.b_bit_mask == 0x0000_00ff
                && pf.a_bit_mask == 0xff00_0000
        },
    },
    LayoutRule {
        layout: PixelLayout::X8R8G8B8,
        matches: |pf| {
            masks_match(
                pf,
                DdsPixelFormat::FLAG_RGB,
                32,
                0x00ff_0000,
                0x0000_ff00,
                0x0000_00ff,
                0x0000_0000,
            )
        },
    },
    LayoutRule {
        layout: PixelLayout::A8B8G8R8,
        matches: |pf| {
            masks_match(
                pf,
                DdsPixelFormat::FLAG_RGBA,
                32,
                0x0000_00ff,
                0x0000_ff00,
                0x00ff_0000,
                0xff00_0000,
            )
        },
    },
    LayoutRule {
        layout: PixelLayout::X8B8G8R8,
        matches: |pf| {
            masks_match(
                pf,
                DdsPixelFormat::FLAG_RGB,
                32,
                0x0000_00ff,
                0x0000_ff00,
                0x00ff_0000,
                0x0000_0000,
            )
        },
    },
    LayoutRule {
        layout: PixelLayout::A1R5G5B5,
        matches: |pf| {
            masks_match(
                pf,
                DdsPixelFormat::FLAG_RGBA,
                16,
                0x0000_7c00,
                0x0000_03e0,
                0x0000_001f,
                0x0000_8000,
            )
        },
    },
    LayoutRule {
        layout: PixelLayout::A4R4G4B4,
        matches: |pf| {
            masks_match(
                pf,
                DdsPixelFormat::FLAG_RGBA,
                16,
                0x0000_0f00,
                0x0000_00f0,
                0x0000_000f,
                0x0000_f000,
            )
        },
    },
    LayoutRule {
        layout: PixelLayout::R8G8B8,
        matches: |pf| {
            masks_match(
                pf,
                DdsPixelFormat::FLAG_RGB,
                24,
                0x00ff_0000,
                0x0000_ff00,
                0x0000_00ff,
                0x0000_0000,
            )
        },
    },
    LayoutRule {
        layout: PixelLayout::R5G6B5,
        matches: |pf| {
            masks_match(
                pf,
                DdsPixelFormat::FLAG_RGB,
                16,
                0x0000_f800,
                0x0000_07e0,
                0x0000_001f,
                0x0000_0000,
            )
        },
    },
];

/// Decode path selected for a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFormat {
    /// Block-compressed data for an external decompressor.
    Compressed(CompressionMode),
    /// Raw packed pixels in a known layout.
    Uncompressed(PixelLayout),
}

impl DecodeFormat {
    /// Classify a parsed pixel format into its decode path.
    pub fn classify(pf: &DdsPixelFormat) -> Result<Self> {
        if pf.has_four_cc() {
            let mode = match pf.four_cc {
                FourCC::DXT1 => CompressionMode::Dxt1,
                FourCC::DXT3 => CompressionMode::Dxt3,
                FourCC::DXT5 => CompressionMode::Dxt5,
                other => return Err(Error::UnsupportedFourCc(other.0)),
            };
            return Ok(Self::Compressed(mode));
        }

        LAYOUT_RULES
            .iter()
            .find(|rule| (rule.matches)(pf))
            .map(|rule| Self::Uncompressed(rule.layout))
            .ok_or(Error::UnsupportedLayout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncompressed(flags: u32, bits: u32, r: u32, g: u32, b: u32, a: u32) -> DdsPixelFormat {
        DdsPixelFormat {
            size: DdsPixelFormat::SIZE,
            flags,
            four_cc: FourCC([0; 4]),
            rgb_bit_count: bits,
            r_bit_mask: r,
            g_bit_mask: g,
            b_bit_mask: b,
            a_bit_mask: a,
        }
    }

    fn compressed(four_cc: [u8; 4]) -> DdsPixelFormat {
        DdsPixelFormat {
            size: DdsPixelFormat::SIZE,
            flags: DdsPixelFormat::FLAG_FOURCC,
            four_cc: FourCC(four_cc),
            rgb_bit_count: 0,
            r_bit_mask: 0,
            g_bit_mask: 0,
            b_bit_mask: 0,
            a_bit_mask: 0,
        }
    }

    #[test]
    fn test_fourcc_dispatch() {
        assert_eq!(
            DecodeFormat::classify(&compressed(*b"DXT1")).unwrap(),
            DecodeFormat::Compressed(CompressionMode::Dxt1)
        );
        assert_eq!(
            DecodeFormat::classify(&compressed(*b"DXT3")).unwrap(),
            DecodeFormat::Compressed(CompressionMode::Dxt3)
        );
        assert_eq!(
            DecodeFormat::classify(&compressed(*b"DXT5")).unwrap(),
            DecodeFormat::Compressed(CompressionMode::Dxt5)
        );
    }

    #[test]
    fn test_unknown_fourcc_is_unsupported() {
        let result = DecodeFormat::classify(&compressed(*b"DXT2"));
        assert!(matches!(result, Err(Error::UnsupportedFourCc(tag)) if &tag == b"DXT2"));
    }

    #[test]
    fn test_known_layouts_classify() {
        let rgba = DdsPixelFormat::FLAG_RGBA;
        let rgb = DdsPixelFormat::FLAG_RGB;

        let cases = [
            (
                uncompressed(rgb, 32, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0),
                PixelLayout::X8R8G8B8,
            ),
            (
                uncompressed(rgba, 32, 0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000),
                PixelLayout::A8B8G8R8,
            ),
            (
                uncompressed(rgb, 32, 0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0),
                PixelLayout::X8B8G8R8,
            ),
            (
                uncompressed(rgba, 16, 0x0000_7c00, 0x0000_03e0, 0x0000_001f, 0x0000_8000),
                PixelLayout::A1R5G5B5,
            ),
            (
                uncompressed(rgba, 16, 0x0000_0f00, 0x0000_00f0, 0x0000_000f, 0x0000_f000),
                PixelLayout::A4R4G4B4,
            ),
            (
                uncompressed(rgb, 24, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0),
                PixelLayout::R8G8B8,
            ),
            (
                uncompressed(rgb, 16, 0x0000_f800, 0x0000_07e0, 0x0000_001f, 0),
                PixelLayout::R5G6B5,
            ),
        ];

        for (pf, expected) in cases {
            assert_eq!(
                DecodeFormat::classify(&pf).unwrap(),
                DecodeFormat::Uncompressed(expected)
            );
        }
    }

    /// Known defect: the A8R8G8B8 rule compares the alpha mask against two
    /// different literals, so a canonical A8R8G8B8 pixel format falls
    /// through every rule.
    #[test]
    fn test_a8r8g8b8_rule_never_matches() {
        let pf = uncompressed(
            DdsPixelFormat::FLAG_RGBA,
            32,
            0x00ff_0000,
            0x0000_ff00,
            0x0000_00ff,
            0xff00_0000,
        );
        assert!(matches!(
            DecodeFormat::classify(&pf),
            Err(Error::UnsupportedLayout)
        ));
    }

    #[test]
    fn test_unmatched_masks_are_unsupported() {
        // A plausible-looking 16-bit format with swapped channel masks.
        let pf = uncompressed(
            DdsPixelFormat::FLAG_RGB,
            16,
            0x0000_001f,
            0x0000_07e0,
            0x0000_f800,
            0,
        );
        assert!(matches!(
            DecodeFormat::classify(&pf),
            Err(Error::UnsupportedLayout)
        ));
    }

    #[test]
    fn test_bit_replication() {
        let red5 = Channel::new(11, 5);
        assert_eq!(red5.extract(0xf800), 0xff);
        assert_eq!(red5.extract(0xf800 >> 1), (0x0f << 3) | (0x0f >> 2));

        let green6 = Channel::new(5, 6);
        assert_eq!(green6.extract(0x07e0), 0xff);
        assert_eq!(green6.extract(0x0420), (0x21 << 2) | (0x21 >> 4));

        let nibble = Channel::new(4, 4);
        assert_eq!(nibble.extract(0x00a0), 0xaa);

        let alpha1 = Channel::new(15, 1);
        assert_eq!(alpha1.extract(0x8000), 0xff);
        assert_eq!(alpha1.extract(0x7fff), 0x00);
    }
}
