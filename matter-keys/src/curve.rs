//! Supported elliptic curves and their canonical identifiers.

use const_oid::ObjectIdentifier;

use crate::error::{Error, ErrorKind};
use crate::Result;

/// A NIST curve recognized by the EC importers.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EcCurve {
    /// NIST P-256 / secp256r1.
    P256,
    /// NIST P-384 / secp384r1.
    P384,
    /// NIST P-521 / secp521r1.
    P521,
}

/// Canonical OID for NIST P-256 (`1.2.840.10045.3.1.7`).
pub const P256_OID: ObjectIdentifier = ObjectIdentifier::new("1.2.840.10045.3.1.7");
/// Canonical OID for NIST P-384 (`1.3.132.0.34`).
pub const P384_OID: ObjectIdentifier = ObjectIdentifier::new("1.3.132.0.34");
/// Canonical OID for NIST P-521 (`1.3.132.0.35`).
pub const P521_OID: ObjectIdentifier = ObjectIdentifier::new("1.3.132.0.35");

impl EcCurve {
    /// The curve's field size in bytes; also the byte width of `x`/`y`/`d`.
    pub fn coordinate_len(self) -> usize {
        match self {
            EcCurve::P256 => 32,
            EcCurve::P384 => 48,
            EcCurve::P521 => 66,
        }
    }

    /// This curve's canonical OID.
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            EcCurve::P256 => P256_OID,
            EcCurve::P384 => P384_OID,
            EcCurve::P521 => P521_OID,
        }
    }

    /// Look up a curve by its canonical OID content bytes (as carried in a
    /// DER `OBJECT IDENTIFIER`'s content, sans tag/length header).
    ///
    /// Only the canonical OIDs above are recognized; a source using a
    /// non-canonical byte sequence for the same curve is rejected as
    /// [`ErrorKind::UnknownCurve`] rather than special-cased.
    pub fn from_oid_bytes(bytes: &[u8]) -> Result<EcCurve> {
        let oid = ObjectIdentifier::from_bytes(bytes).map_err(|_| Error::new(ErrorKind::UnknownCurve))?;
        EcCurve::from_oid(oid)
    }

    /// Look up a curve by OID value.
    pub fn from_oid(oid: ObjectIdentifier) -> Result<EcCurve> {
        if oid == P256_OID {
            Ok(EcCurve::P256)
        } else if oid == P384_OID {
            Ok(EcCurve::P384)
        } else if oid == P521_OID {
            Ok(EcCurve::P521)
        } else {
            Err(Error::new(ErrorKind::UnknownCurve))
        }
    }

    /// Infer a curve from a coordinate's byte length (32→P-256, 48→P-384,
    /// 66→P-521).
    pub fn from_coordinate_len(len: usize) -> Result<EcCurve> {
        match len {
            32 => Ok(EcCurve::P256),
            48 => Ok(EcCurve::P384),
            66 => Ok(EcCurve::P521),
            _ => Err(Error::new(ErrorKind::UnknownCurve)),
        }
    }

    /// The JWK `crv` value for this curve (`P-256`, `P-384`, `P-521`).
    pub fn jwk_name(self) -> &'static str {
        match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::P521 => "P-521",
        }
    }

    /// Look up a curve by its JWK `crv` value.
    pub fn from_jwk_name(name: &str) -> Result<EcCurve> {
        match name {
            "P-256" => Ok(EcCurve::P256),
            "P-384" => Ok(EcCurve::P384),
            "P-521" => Ok(EcCurve::P521),
            _ => Err(Error::new(ErrorKind::UnknownCurve)),
        }
    }
}
