//! Reading and writing individual TLV elements.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

use matter_io::{Reader, Writer};

use crate::tag::{Tag, TagRequest};
use crate::type_length::{LengthClass, TypeLength};
use crate::value::{ContainerKind, TlvValue};
use crate::{Error, ErrorKind, Result};

/// Control-byte bits for the tag-control field.
const TAG_CONTROL_MASK: u8 = 0b1110_0000;
const TYPE_LENGTH_MASK: u8 = 0b0001_1111;

/// Decode one TLV element's tag and type-length from the control byte and
/// any tag bytes that follow. Does not consume the element's payload.
pub fn read_element(reader: &mut Reader<'_>) -> Result<(Tag, TypeLength)> {
    let control = reader.read_u8()?;
    let tag_control = (control & TAG_CONTROL_MASK) >> 5;
    let type_length = TypeLength::from_nibble(control & TYPE_LENGTH_MASK, reader.position())?;
    let tag = Tag::decode(tag_control, reader)?;
    Ok((tag, type_length))
}

/// Decode the payload that follows a [`TypeLength`] produced by
/// [`read_element`]. Container-opening and -closing type-lengths carry no
/// payload and decode straight to their marker value.
pub fn read_primitive(reader: &mut Reader<'_>, type_length: TypeLength) -> Result<TlvValue> {
    match type_length {
        TypeLength::SignedInt(class) => Ok(TlvValue::Int(read_signed(reader, class)?)),
        TypeLength::UnsignedInt(class) => Ok(TlvValue::UInt(read_unsigned(reader, class)?)),
        TypeLength::BoolFalse => Ok(TlvValue::Bool(false)),
        TypeLength::BoolTrue => Ok(TlvValue::Bool(true)),
        TypeLength::Float4 => Ok(TlvValue::Float(f64::from(reader.read_f32()?))),
        TypeLength::Float8 => Ok(TlvValue::Float(reader.read_f64()?)),
        #[cfg(feature = "alloc")]
        TypeLength::Utf8String(_) => {
            let len = type_length
                .read_string_len(reader)?
                .expect("Utf8String always has a length class");
            let bytes = reader.read_bytes(len)?;
            let s =
                core::str::from_utf8(bytes).map_err(|_| Error::new(ErrorKind::UnexpectedType, reader.position()))?;
            Ok(TlvValue::Utf8(String::from(s)))
        }
        #[cfg(feature = "alloc")]
        TypeLength::ByteString(_) => {
            let len = type_length
                .read_string_len(reader)?
                .expect("ByteString always has a length class");
            let bytes = reader.read_bytes(len)?;
            Ok(TlvValue::Bytes(Vec::from(bytes)))
        }
        TypeLength::Null => Ok(TlvValue::Null),
        TypeLength::Structure => Ok(TlvValue::ContainerOpen(ContainerKind::Structure)),
        TypeLength::Array => Ok(TlvValue::ContainerOpen(ContainerKind::Array)),
        TypeLength::List => Ok(TlvValue::ContainerOpen(ContainerKind::List)),
        TypeLength::EndOfContainer => Ok(TlvValue::ContainerEnd),
    }
}

fn read_signed(reader: &mut Reader<'_>, class: LengthClass) -> Result<i64> {
    Ok(match class {
        LengthClass::One => i64::from(reader.read_i8()?),
        LengthClass::Two => i64::from(reader.read_i16()?),
        LengthClass::Four => i64::from(reader.read_i32()?),
        LengthClass::Eight => reader.read_i64()?,
    })
}

fn read_unsigned(reader: &mut Reader<'_>, class: LengthClass) -> Result<u64> {
    Ok(match class {
        LengthClass::One => u64::from(reader.read_u8()?),
        LengthClass::Two => u64::from(reader.read_u16()?),
        LengthClass::Four => u64::from(reader.read_u32()?),
        LengthClass::Eight => reader.read_u64()?,
    })
}

/// Write an element's control byte and tag bytes.
pub fn write_element(writer: &mut Writer, type_length: TypeLength, tag_request: TagRequest) -> Result<()> {
    let tag = tag_request.resolve()?;
    writer.write_u8(tag.control_bits() | type_length.to_nibble());
    tag.write(writer);
    Ok(())
}

/// Write the payload for a previously-written [`TypeLength`]. The caller is
/// responsible for passing a `value` whose shape matches `type_length`
/// (e.g. [`TlvValue::Int`] for [`TypeLength::SignedInt`]); a mismatch is a
/// programmer error and panics, the same way a consuming iterator panics on
/// a yielded-twice item.
pub fn write_primitive(writer: &mut Writer, type_length: TypeLength, value: &TlvValue) -> Result<()> {
    match (type_length, value) {
        (TypeLength::SignedInt(class), TlvValue::Int(v)) => return write_signed(writer, class, *v),
        (TypeLength::UnsignedInt(class), TlvValue::UInt(v)) => return write_unsigned(writer, class, *v),
        (TypeLength::BoolFalse, TlvValue::Bool(false)) | (TypeLength::BoolTrue, TlvValue::Bool(true)) => {}
        (TypeLength::Float4, TlvValue::Float(v)) => writer.write_f32(*v as f32),
        (TypeLength::Float8, TlvValue::Float(v)) => writer.write_f64(*v),
        #[cfg(feature = "alloc")]
        (TypeLength::Utf8String(_), TlvValue::Utf8(s)) => {
            type_length.write_string_len(writer, s.len());
            writer.write_utf8(s);
        }
        #[cfg(feature = "alloc")]
        (TypeLength::ByteString(_), TlvValue::Bytes(b)) => {
            type_length.write_string_len(writer, b.len());
            writer.write_bytes(b);
        }
        (TypeLength::Null, TlvValue::Null)
        | (TypeLength::Structure, TlvValue::ContainerOpen(ContainerKind::Structure))
        | (TypeLength::Array, TlvValue::ContainerOpen(ContainerKind::Array))
        | (TypeLength::List, TlvValue::ContainerOpen(ContainerKind::List))
        | (TypeLength::EndOfContainer, TlvValue::ContainerEnd) => {}
        _ => return Err(Error::new(ErrorKind::UnexpectedType, writer.len())),
    }
    Ok(())
}

fn write_signed(writer: &mut Writer, class: LengthClass, value: i64) -> Result<()> {
    match class {
        LengthClass::One => writer.write_i8(i8::try_from(value).map_err(|_| overflow(writer))?),
        LengthClass::Two => writer.write_i16(i16::try_from(value).map_err(|_| overflow(writer))?),
        LengthClass::Four => writer.write_i32(i32::try_from(value).map_err(|_| overflow(writer))?),
        LengthClass::Eight => writer.write_i64(value),
    }
    Ok(())
}

fn write_unsigned(writer: &mut Writer, class: LengthClass, value: u64) -> Result<()> {
    match class {
        LengthClass::One => writer.write_u8(u8::try_from(value).map_err(|_| overflow(writer))?),
        LengthClass::Two => writer.write_u16(u16::try_from(value).map_err(|_| overflow(writer))?),
        LengthClass::Four => writer.write_u32(u32::try_from(value).map_err(|_| overflow(writer))?),
        LengthClass::Eight => writer.write_u64(value),
    }
    Ok(())
}

fn overflow(writer: &Writer) -> Error {
    Error::new(ErrorKind::Overflow, writer.len())
}

/// Choose the narrowest [`TypeLength::SignedInt`] that can hold `value`.
pub fn signed_type_length(value: i64) -> TypeLength {
    let class = if i8::try_from(value).is_ok() {
        LengthClass::One
    } else if i16::try_from(value).is_ok() {
        LengthClass::Two
    } else if i32::try_from(value).is_ok() {
        LengthClass::Four
    } else {
        LengthClass::Eight
    };
    TypeLength::SignedInt(class)
}

/// Choose the narrowest [`TypeLength::UnsignedInt`] that can hold `value`.
pub fn unsigned_type_length(value: u64) -> TypeLength {
    let class = if u8::try_from(value).is_ok() {
        LengthClass::One
    } else if u16::try_from(value).is_ok() {
        LengthClass::Two
    } else if u32::try_from(value).is_ok() {
        LengthClass::Four
    } else {
        LengthClass::Eight
    };
    TypeLength::UnsignedInt(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagRequest;
    use hex_literal::hex;

    // Scenario S1: `04 2A` — anonymous unsigned 1-byte integer, value 42.
    #[test]
    fn scenario_s1_anonymous_uint() {
        let mut reader = Reader::new(&hex!("04 2A"));
        let (tag, type_length) = read_element(&mut reader).unwrap();
        assert_eq!(tag, Tag::Anonymous);
        assert_eq!(type_length, TypeLength::UnsignedInt(LengthClass::One));
        assert_eq!(
            read_primitive(&mut reader, type_length).unwrap(),
            TlvValue::UInt(42)
        );
        assert!(reader.is_empty());
    }

    // Scenario S2: `2C 03 02 68 69` — context tag 3, UTF-8 string "hi".
    #[test]
    fn scenario_s2_context_tagged_string() {
        let mut reader = Reader::new(&hex!("2C 03 02 68 69"));
        let (tag, type_length) = read_element(&mut reader).unwrap();
        assert_eq!(tag, Tag::Context(3));
        assert_eq!(type_length, TypeLength::Utf8String(LengthClass::One));
        assert_eq!(
            read_primitive(&mut reader, type_length).unwrap(),
            TlvValue::Utf8(String::from("hi"))
        );
    }

    // Scenario S3: `15 29 00 18` — anonymous structure containing one
    // context-tagged (id 0) boolean true member, then end-of-container.
    #[test]
    fn scenario_s3_structure_with_member() {
        let mut reader = Reader::new(&hex!("15 29 00 18"));

        let (tag, type_length) = read_element(&mut reader).unwrap();
        assert_eq!(tag, Tag::Anonymous);
        assert_eq!(type_length, TypeLength::Structure);
        assert_eq!(
            read_primitive(&mut reader, type_length).unwrap(),
            TlvValue::ContainerOpen(ContainerKind::Structure)
        );

        let (tag, type_length) = read_element(&mut reader).unwrap();
        assert_eq!(tag, Tag::Context(0));
        assert_eq!(type_length, TypeLength::BoolTrue);
        assert_eq!(
            read_primitive(&mut reader, type_length).unwrap(),
            TlvValue::Bool(true)
        );

        let (tag, type_length) = read_element(&mut reader).unwrap();
        assert_eq!(tag, Tag::Anonymous);
        assert_eq!(type_length, TypeLength::EndOfContainer);
        assert_eq!(
            read_primitive(&mut reader, type_length).unwrap(),
            TlvValue::ContainerEnd
        );
        assert!(reader.is_empty());
    }

    #[test]
    fn round_trips_anonymous_uint() {
        let mut writer = Writer::new();
        let type_length = unsigned_type_length(42);
        write_element(&mut writer, type_length, TagRequest::anonymous()).unwrap();
        write_primitive(&mut writer, type_length, &TlvValue::UInt(42)).unwrap();
        assert_eq!(writer.into_bytes(), hex!("04 2A").to_vec());
    }

    #[test]
    fn round_trips_context_tagged_string() {
        let mut writer = Writer::new();
        let type_length = TypeLength::Utf8String(LengthClass::One);
        write_element(&mut writer, type_length, TagRequest::context(3)).unwrap();
        write_primitive(&mut writer, type_length, &TlvValue::Utf8(String::from("hi"))).unwrap();
        assert_eq!(writer.into_bytes(), hex!("2C 03 02 68 69").to_vec());
    }

    #[test]
    fn rejects_implicit_profile_tag() {
        // tag control 4 == implicit profile 16.
        let mut reader = Reader::new(&hex!("84 00 00"));
        assert_eq!(
            read_element(&mut reader).unwrap_err().kind(),
            ErrorKind::UnsupportedProfile
        );
    }

    #[test]
    fn write_primitive_rejects_value_too_wide_for_declared_class() {
        let mut writer = Writer::new();
        assert_eq!(
            write_primitive(&mut writer, TypeLength::UnsignedInt(LengthClass::One), &TlvValue::UInt(300))
                .unwrap_err()
                .kind(),
            ErrorKind::Overflow
        );
        assert_eq!(
            write_primitive(&mut writer, TypeLength::SignedInt(LengthClass::One), &TlvValue::Int(-200))
                .unwrap_err()
                .kind(),
            ErrorKind::Overflow
        );
    }

    #[test]
    fn signed_type_length_picks_narrowest_class() {
        assert_eq!(signed_type_length(0), TypeLength::SignedInt(LengthClass::One));
        assert_eq!(signed_type_length(200), TypeLength::SignedInt(LengthClass::Two));
        assert_eq!(
            signed_type_length(i64::from(i32::MAX) + 1),
            TypeLength::SignedInt(LengthClass::Eight)
        );
    }
}
