//! Matter Tag-Length-Value (TLV) element codec.
//!
//! TLV is the self-describing wire format used to encode data structures
//! independent of transport. Every element is a control byte (tag control
//! in the top 3 bits, element type-length in the low 5), followed by zero
//! or more tag bytes, followed by zero or more length or payload bytes.
//! Structures, arrays and lists nest by bracketing their members between a
//! container-opening element and an [`TypeLength::EndOfContainer`]
//! element; nesting depth is bounded only by the input.
//!
//! This crate decodes and encodes one element at a time against a
//! [`matter_io::Reader`] / [`matter_io::Writer`]; see [`TlvElement`] for a
//! convenience that decodes a whole tree at once.
//!
//! # Minimum Supported Rust Version
//!
//! This crate requires **Rust 1.65** at a minimum.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod codec;
mod error;
mod tag;
mod type_length;
mod value;

#[cfg(feature = "alloc")]
mod element;

pub use crate::{
    codec::{read_element, read_primitive, signed_type_length, unsigned_type_length, write_element, write_primitive},
    error::{Error, ErrorKind, Result},
    tag::{Tag, TagRequest},
    type_length::{LengthClass, TypeLength},
    value::TlvValue,
};

pub use crate::value::ContainerKind;

#[cfg(feature = "alloc")]
pub use crate::element::TlvElement;
