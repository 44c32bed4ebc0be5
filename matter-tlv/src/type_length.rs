//! The type-length nibble (bits 4..0 of the control byte).

use matter_io::{Reader, Writer};

use crate::{Error, ErrorKind, Result};

/// Width class for a length-prefixed or fixed-width primitive.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LengthClass {
    /// 1 byte.
    One,
    /// 2 bytes.
    Two,
    /// 4 bytes.
    Four,
    /// 8 bytes.
    Eight,
}

impl LengthClass {
    /// Width in bytes.
    pub fn width(self) -> usize {
        match self {
            LengthClass::One => 1,
            LengthClass::Two => 2,
            LengthClass::Four => 4,
            LengthClass::Eight => 8,
        }
    }

    /// The smallest [`LengthClass`] whose width can hold `len` bytes.
    pub fn smallest_fitting(len: usize) -> Result<LengthClass> {
        if u8::try_from(len).is_ok() {
            Ok(LengthClass::One)
        } else if u16::try_from(len).is_ok() {
            Ok(LengthClass::Two)
        } else if u32::try_from(len).is_ok() {
            Ok(LengthClass::Four)
        } else {
            u64::try_from(len).map(|_| LengthClass::Eight).map_err(|_| Error::new(ErrorKind::Overflow, 0))
        }
    }

    fn from_low_bits(bits: u8) -> LengthClass {
        match bits & 0b11 {
            0 => LengthClass::One,
            1 => LengthClass::Two,
            2 => LengthClass::Four,
            _ => LengthClass::Eight,
        }
    }

    fn low_bits(self) -> u8 {
        match self {
            LengthClass::One => 0,
            LengthClass::Two => 1,
            LengthClass::Four => 2,
            LengthClass::Eight => 3,
        }
    }

    fn read_count(self, reader: &mut Reader<'_>) -> Result<u64> {
        Ok(match self {
            LengthClass::One => u64::from(reader.read_u8()?),
            LengthClass::Two => u64::from(reader.read_u16()?),
            LengthClass::Four => u64::from(reader.read_u32()?),
            LengthClass::Eight => reader.read_u64()?,
        })
    }

    fn write_count(self, writer: &mut Writer, count: u64) {
        match self {
            LengthClass::One => writer.write_u8(count as u8),
            LengthClass::Two => writer.write_u16(count as u16),
            LengthClass::Four => writer.write_u32(count as u32),
            LengthClass::Eight => writer.write_u64(count),
        }
    }
}

/// Element type and, where applicable, its length class, as packed into
/// the low 5 bits of the control byte.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TypeLength {
    /// Signed integer of the given width.
    SignedInt(LengthClass),
    /// Unsigned integer of the given width.
    UnsignedInt(LengthClass),
    /// Boolean `false`.
    BoolFalse,
    /// Boolean `true`.
    BoolTrue,
    /// IEEE 754 single precision.
    Float4,
    /// IEEE 754 double precision.
    Float8,
    /// UTF-8 string, length-prefixed in bytes by `LengthClass`.
    Utf8String(LengthClass),
    /// Raw octet string, length-prefixed in bytes by `LengthClass`.
    ByteString(LengthClass),
    /// The null value.
    Null,
    /// Opens a structure container.
    Structure,
    /// Opens an array container.
    Array,
    /// Opens a list container.
    List,
    /// Closes the innermost open container.
    EndOfContainer,
}

impl TypeLength {
    pub(crate) fn to_nibble(self) -> u8 {
        match self {
            TypeLength::SignedInt(class) => 0x00 | class.low_bits(),
            TypeLength::UnsignedInt(class) => 0x04 | class.low_bits(),
            TypeLength::BoolFalse => 0x08,
            TypeLength::BoolTrue => 0x09,
            TypeLength::Float4 => 0x0A,
            TypeLength::Float8 => 0x0B,
            TypeLength::Utf8String(class) => 0x0C | class.low_bits(),
            TypeLength::ByteString(class) => 0x10 | class.low_bits(),
            TypeLength::Null => 0x14,
            TypeLength::Structure => 0x15,
            TypeLength::Array => 0x16,
            TypeLength::List => 0x17,
            TypeLength::EndOfContainer => 0x18,
        }
    }

    pub(crate) fn from_nibble(nibble: u8, position: usize) -> Result<TypeLength> {
        Ok(match nibble {
            0x00..=0x03 => TypeLength::SignedInt(LengthClass::from_low_bits(nibble)),
            0x04..=0x07 => TypeLength::UnsignedInt(LengthClass::from_low_bits(nibble)),
            0x08 => TypeLength::BoolFalse,
            0x09 => TypeLength::BoolTrue,
            0x0A => TypeLength::Float4,
            0x0B => TypeLength::Float8,
            0x0C..=0x0F => TypeLength::Utf8String(LengthClass::from_low_bits(nibble)),
            0x10..=0x13 => TypeLength::ByteString(LengthClass::from_low_bits(nibble)),
            0x14 => TypeLength::Null,
            0x15 => TypeLength::Structure,
            0x16 => TypeLength::Array,
            0x17 => TypeLength::List,
            0x18 => TypeLength::EndOfContainer,
            _ => return Err(Error::new(ErrorKind::BadTag, position)),
        })
    }

    /// Whether this type-length opens a container (structure/array/list).
    pub fn opens_container(self) -> bool {
        matches!(
            self,
            TypeLength::Structure | TypeLength::Array | TypeLength::List
        )
    }

    /// Read the length prefix for a string type-length, if any.
    pub(crate) fn read_string_len(self, reader: &mut Reader<'_>) -> Result<Option<usize>> {
        let class = match self {
            TypeLength::Utf8String(class) | TypeLength::ByteString(class) => class,
            _ => return Ok(None),
        };
        let count = class.read_count(reader)?;
        usize::try_from(count)
            .map(Some)
            .map_err(|_| Error::new(ErrorKind::Overflow, reader.position()))
    }

    /// Write the length prefix for a string type-length.
    pub(crate) fn write_string_len(self, writer: &mut Writer, len: usize) {
        if let TypeLength::Utf8String(class) | TypeLength::ByteString(class) = self {
            class.write_count(writer, len as u64);
        }
    }
}
