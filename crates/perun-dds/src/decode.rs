//! DDS surface decoding.
//!
//! Reads a DDS stream front to back: magic, fixed header, then either a
//! compressed block region handed to a [`BlockDecompressor`] or raw packed
//! rows expanded pixel by pixel. Each call is self-contained; nothing is
//! cached between decodes.

use std::io::Read;

use byteorder::{ByteOrder, LittleEndian};
use perun_common::BinaryReader;

use crate::decompress::BlockDecompressor;
use crate::format::{DecodeFormat, PixelLayout};
use crate::header::DdsHeader;
use crate::{Error, Result, DDS_MAGIC};

/// Decoded RGBA8 pixels for one base surface.
///
/// The pixel data is always exactly `width * height * 4` bytes, row-major,
/// one R,G,B,A byte quadruple per pixel, no row padding.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA bytes, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the RGBA bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Read and validate the DDS magic and fixed header.
///
/// On a magic mismatch the stream position is undefined; no recovery is
/// attempted.
pub fn read_header<R: Read>(input: &mut R) -> Result<DdsHeader> {
    let mut magic = [0u8; 4];
    input.read_exact(&mut magic)?;
    if &magic != DDS_MAGIC {
        return Err(Error::InvalidMagic(magic));
    }

    let mut raw = [0u8; std::mem::size_of::<DdsHeader>()];
    input.read_exact(&mut raw)?;
    Ok(BinaryReader::new(&raw).read_struct()?)
}

/// Decode the base surface of a DDS stream into RGBA8 pixels.
///
/// Compressed surfaces (DXT1/3/5) are routed through `decompressor`; pass
/// [`UnsupportedDecompressor`](crate::UnsupportedDecompressor) if only raw
/// textures are expected. Mipmaps past the base surface are not read.
pub fn decode<R: Read>(mut input: R, decompressor: &dyn BlockDecompressor) -> Result<PixelBuffer> {
    let header = read_header(&mut input)?;
    decode_with_header(&header, input, decompressor)
}

/// Decode pixel data that follows an already-parsed header.
pub fn decode_with_header<R: Read>(
    header: &DdsHeader,
    mut input: R,
    decompressor: &dyn BlockDecompressor,
) -> Result<PixelBuffer> {
    let width = header.width;
    let height = header.height;
    let pixel_format = header.pixel_format;

    let data = match DecodeFormat::classify(&pixel_format)? {
        DecodeFormat::Compressed(mode) => {
            let mut blocks = vec![0u8; mode.surface_size(width, height)];
            input.read_exact(&mut blocks)?;

            let data = decompressor.decompress(width, height, &blocks, mode)?;
            let expected = width as usize * height as usize * 4;
            if data.len() != expected {
                return Err(Error::DecompressorOutput {
                    expected,
                    actual: data.len(),
                });
            }
            data
        }
        DecodeFormat::Uncompressed(layout) => unpack_pixels(header, layout, &mut input)?,
    };

    Ok(PixelBuffer {
        width,
        height,
        data,
    })
}

/// Row pitch in bytes, resolved the way real-world producers require.
fn resolve_pitch(header: &DdsHeader, bytes_per_pixel: usize) -> usize {
    if header.has_pitch() {
        header.pitch_or_linear_size as usize
    } else if header.has_linear_size() && header.height > 0 {
        // Some writers record a linear size even for uncompressed surfaces,
        // where only compressed ones should carry it. A zero height cannot
        // divide the linear size; such headers fall through to the
        // computed pitch.
        (header.pitch_or_linear_size / header.height) as usize
    } else {
        // And some leave both flags and the field zeroed entirely.
        header.width as usize * bytes_per_pixel
    }
}

/// Expand raw packed rows into the RGBA8 output buffer.
fn unpack_pixels<R: Read>(
    header: &DdsHeader,
    layout: PixelLayout,
    input: &mut R,
) -> Result<Vec<u8>> {
    let width = header.width as usize;
    let height = header.height as usize;
    let bytes_per_pixel = (header.pixel_format.rgb_bit_count / 8) as usize;
    let pitch = resolve_pitch(header, bytes_per_pixel);

    // A recorded pitch smaller than one packed row cannot be honored.
    if pitch < width * bytes_per_pixel {
        return Err(Error::PitchTooSmall {
            pitch,
            width,
            bytes_per_pixel,
        });
    }

    let mut rows = vec![0u8; pitch * height];
    input.read_exact(&mut rows)?;

    let channels = layout.channels();
    let mut data = vec![0u8; width * height * 4];

    for y in 0..height {
        for x in 0..width {
            let src = y * pitch + x * bytes_per_pixel;
            let pixel =
                LittleEndian::read_uint(&rows[src..src + bytes_per_pixel], bytes_per_pixel) as u32;

            let dst = (y * width + x) * 4;
            data[dst] = channels.red.extract(pixel);
            data[dst + 1] = channels.green.extract(pixel);
            data[dst + 2] = channels.blue.extract(pixel);
            data[dst + 3] = match channels.alpha {
                Some(alpha) => alpha.extract(pixel),
                None => 0xff,
            };
        }
    }

    Ok(data)
}
