//! URL-safe, unpadded Base64 (RFC 4648 §5) for JWK string fields.
//!
//! Encoding never emits `=` padding; decoding tolerates it, stripping any
//! trailing padding before validating the remaining characters. This
//! mirrors `base64ct`'s URL-safe alphabet, trimmed down to the single
//! variant the Matter key model needs.
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

mod alphabet;
mod error;

#[cfg(feature = "alloc")]
mod codec;

pub use crate::error::{Error, Result};

#[cfg(feature = "alloc")]
pub use crate::codec::{decode_vec, encode_string, encoded_len};
