//! Little-endian byte buffer reader.

use crate::{Error, ErrorKind, Result};
use core::convert::TryInto;

/// Cursor-based reader over a borrowed byte slice.
///
/// All multi-byte integers and floats are read little-endian. Reading past
/// the end of the slice fails with [`ErrorKind::Truncated`] and leaves the
/// cursor position unspecified; callers MUST discard a reader after an error.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

macro_rules! read_int {
    ($name:ident, $ty:ty) => {
        /// Read a little-endian
        #[doc = stringify!($ty)]
        /// and advance the cursor.
        pub fn $name(&mut self) -> Result<$ty> {
            let width = core::mem::size_of::<$ty>();
            let bytes: [u8; core::mem::size_of::<$ty>()] =
                self.bytes(width)?.try_into().expect("width checked above");
            Ok(<$ty>::from_le_bytes(bytes))
        }
    };
}

impl<'a> Reader<'a> {
    /// Create a new reader over the given byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    read_int!(read_u8, u8);
    read_int!(read_u16, u16);
    read_int!(read_u32, u32);
    read_int!(read_u64, u64);
    read_int!(read_i8, i8);
    read_int!(read_i16, i16);
    read_int!(read_i32, i32);
    read_int!(read_i64, i64);
    read_int!(read_f32, f32);
    read_int!(read_f64, f64);

    /// Read `len` raw bytes, returning a borrowed slice.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.bytes(len)
    }

    /// Read `len` bytes and decode them as UTF-8.
    pub fn read_utf8(&mut self, len: usize) -> Result<&'a str> {
        let bytes = self.bytes(len)?;
        core::str::from_utf8(bytes).map_err(|_| self.error(ErrorKind::BadEncoding))
    }

    /// Number of bytes left to read.
    pub fn remaining_len(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Whether the cursor has reached the end of the slice.
    pub fn is_empty(&self) -> bool {
        self.remaining_len() == 0
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the next byte without advancing the cursor.
    pub fn peek_u8(&self) -> Result<u8> {
        self.bytes.get(self.pos).copied().ok_or_else(|| self.error(ErrorKind::Truncated))
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| self.error(ErrorKind::Truncated))?;

        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::Reader;

    #[test]
    fn reads_le_integers() {
        let mut r = Reader::new(&[0x2a, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(r.read_u8().unwrap(), 0x2a);
        assert_eq!(r.read_u32().unwrap(), 0x0403_0201);
        assert!(r.is_empty());
    }

    #[test]
    fn truncated_read_fails() {
        let mut r = Reader::new(&[0x01]);
        assert!(r.read_u32().is_err());
    }

    #[test]
    fn reads_utf8() {
        let mut r = Reader::new(b"hi");
        assert_eq!(r.read_utf8(2).unwrap(), "hi");
    }

    #[test]
    fn bad_utf8_fails() {
        let mut r = Reader::new(&[0xff, 0xfe]);
        assert!(r.read_utf8(2).is_err());
    }
}
