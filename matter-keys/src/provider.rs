//! The injected elliptic-curve math capability.
//!
//! This crate contains no elliptic-curve arithmetic of its own. Deriving a
//! public point from a private scalar is delegated to an [`EcProvider`]
//! supplied by the caller, so this crate never links (or chooses) a
//! specific curve implementation.

use alloc::vec::Vec;

use crate::curve::EcCurve;

/// An elliptic-curve point-multiplication capability, supplied by the
/// caller rather than looked up through a global.
pub trait EcProvider {
    /// Compute `Q = d * G` on `curve` for the private scalar `d`, returning
    /// the affine coordinates as fixed-width big-endian byte arrays sized
    /// to the curve's field.
    ///
    /// Implementations MUST validate `0 < d < n` and signal
    /// [`ProviderError::BadScalar`] otherwise.
    fn derive_public_point(&self, curve: EcCurve, scalar: &[u8]) -> Result<(Vec<u8>, Vec<u8>), ProviderError>;
}

/// An error signaled by an [`EcProvider`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum ProviderError {
    /// The scalar was zero, too large for the curve's order, or otherwise
    /// not a valid private key.
    BadScalar,
}
