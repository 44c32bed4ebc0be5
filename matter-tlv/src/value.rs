//! Decoded TLV primitive values and container markers.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Which kind of container a [`TlvValue::ContainerOpen`] begins.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ContainerKind {
    /// An ordered, possibly heterogeneous structure of tagged members.
    Structure,
    /// An ordered sequence of anonymously-tagged elements.
    Array,
    /// An ordered sequence whose elements may each carry their own tag.
    List,
}

/// A decoded TLV element's value.
///
/// Container-opening and closing elements carry no payload of their own;
/// [`TlvValue::ContainerOpen`] and [`TlvValue::ContainerEnd`] only mark
/// where nested elements begin and end.
#[derive(Clone, Debug, PartialEq)]
pub enum TlvValue {
    /// A signed integer, widened to 64 bits.
    Int(i64),
    /// An unsigned integer, widened to 64 bits.
    UInt(u64),
    /// An IEEE 754 floating-point value, widened to `f64`.
    Float(f64),
    /// A UTF-8 string.
    #[cfg(feature = "alloc")]
    Utf8(String),
    /// A raw octet string.
    #[cfg(feature = "alloc")]
    Bytes(Vec<u8>),
    /// A boolean.
    Bool(bool),
    /// The null value.
    Null,
    /// Opens a container; nested elements follow until a matching
    /// [`TlvValue::ContainerEnd`].
    ContainerOpen(ContainerKind),
    /// Closes the innermost open container.
    ContainerEnd,
}
