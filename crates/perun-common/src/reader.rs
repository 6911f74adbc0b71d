//! Binary reader for parsing byte slices.
//!
//! [`BinaryReader`] is a small cursor over a byte slice used to pick apart
//! fixed-layout binary structures that have already been staged in memory.

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A cursor that reads little-endian binary data from a byte slice.
///
/// # Example
///
/// ```
/// use perun_common::BinaryReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x04030201);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use zerocopy::{FromBytes, Immutable, KnownLayout};

    #[derive(Debug, FromBytes, Immutable, KnownLayout)]
    #[repr(C, packed)]
    struct Pair {
        first: u32,
        second: u32,
    }

    #[test]
    fn test_read_primitives() {
        let data = [0x01u8, 0x02, 0x03, 0x04, 0xAA, 0xBB, 0x7F];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u32().unwrap(), 0x04030201);
        assert_eq!(reader.read_u16().unwrap(), 0xBBAA);
        assert_eq!(reader.read_u8().unwrap(), 0x7F);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let reader = BinaryReader::new(&data);

        assert_eq!(reader.peek_bytes(2).unwrap(), &[0x01, 0x02]);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_struct() {
        let data = [0x01u8, 0, 0, 0, 0x02, 0, 0, 0];
        let mut reader = BinaryReader::new(&data);

        let pair: Pair = reader.read_struct().unwrap();
        assert_eq!({ pair.first }, 1);
        assert_eq!({ pair.second }, 2);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_eof_reports_shortfall() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);

        match reader.read_u32() {
            Err(Error::UnexpectedEof { needed, available }) => {
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
    }
}
