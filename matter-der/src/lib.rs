//! A minimal DER decoder producing an untyped tree of tagged nodes.
//!
//! This is deliberately not a general ASN.1 toolkit: it recognizes only the
//! handful of universal tags (`INTEGER`, `OCTET STRING`, `BIT STRING`,
//! `NULL`, `OBJECT IDENTIFIER`, `SEQUENCE`) and explicit context-specific
//! tagging (`[n]`) that the SEC1, PKCS#8, and SPKI key formats use. Callers
//! that need a typed, schema-driven ASN.1 decoder should reach for a crate
//! like `der` instead; this one exists to keep the key importers free of a
//! heavyweight ASN.1 dependency.
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
mod tag;

#[cfg(feature = "alloc")]
mod decoder;
#[cfg(feature = "alloc")]
mod node;

pub use crate::{
    error::{Error, ErrorKind, Result},
    tag::Tag,
};

#[cfg(feature = "alloc")]
pub use crate::{decoder::decode, node::DerNode};
