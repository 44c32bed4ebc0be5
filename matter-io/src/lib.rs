//! Little-endian byte buffer primitives shared by the Matter TLV codec.
//!
//! This crate provides [`Reader`] and [`Writer`]: a cursor-based reader over
//! a borrowed byte slice and a growable writer, both operating exclusively in
//! little-endian byte order. Neither type performs any I/O; they are pure
//! in-memory cursors.
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

mod error;
mod reader;

#[cfg(feature = "alloc")]
mod writer;

pub use crate::{
    error::{Error, ErrorKind, Result},
    reader::Reader,
};

#[cfg(feature = "alloc")]
pub use crate::writer::Writer;
