//! The Matter device-credential key model: a JWK-shaped record with human,
//! binary, and asserted alias projections, and importers for SEC1,
//! PKCS#8, SPKI, and raw SEC1 public points.
//!
//! This crate contains no elliptic-curve arithmetic. Deriving a public
//! point from a private scalar is delegated to a caller-supplied
//! [`EcProvider`], so no specific curve implementation is linked in here.
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

#[cfg(feature = "alloc")]
mod curve;
#[cfg(feature = "alloc")]
mod error;
#[cfg(feature = "alloc")]
mod importers;
#[cfg(feature = "alloc")]
mod key;
#[cfg(feature = "alloc")]
mod provider;

#[cfg(feature = "alloc")]
pub use crate::{
    curve::EcCurve,
    error::{Error, ErrorKind, Result},
    key::{private_key, public_key, symmetric_key, Key, KeyBuilder, KTY_EC, KTY_OCT},
    provider::{EcProvider, ProviderError},
};
