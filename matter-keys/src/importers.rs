//! DER and raw-byte key importers: SEC1, PKCS#8, SPKI, and uncompressed
//! public points.

use alloc::vec::Vec;

use const_oid::ObjectIdentifier;
use matter_der::{DerNode, Tag};
use zeroize::Zeroize;

use crate::curve::EcCurve;
use crate::error::{Error, ErrorKind};
use crate::Result;

/// `1.2.840.10045.2.1` — `id-ecPublicKey`.
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new("1.2.840.10045.2.1");

/// A private scalar plus the curve it was imported under.
pub(crate) struct PrivateKeyFields {
    pub(crate) curve: EcCurve,
    pub(crate) private_scalar: Vec<u8>,
}

impl Drop for PrivateKeyFields {
    fn drop(&mut self) {
        self.private_scalar.zeroize();
    }
}

/// A public point plus the curve it was imported under.
pub(crate) struct PublicKeyFields {
    pub(crate) curve: EcCurve,
    pub(crate) x: Vec<u8>,
    pub(crate) y: Vec<u8>,
}

fn sequence_children<'a, 'b>(node: &'b DerNode<'a>) -> Result<&'b [DerNode<'a>]> {
    if node.tag == Some(Tag::Sequence) {
        Ok(node.children())
    } else {
        Err(Error::new(ErrorKind::BadFormat))
    }
}

fn expect_tag<'a>(node: Option<&DerNode<'a>>, tag: Tag) -> Result<&DerNode<'a>> {
    match node {
        Some(node) if node.tag == Some(tag) => Ok(node),
        _ => Err(Error::new(ErrorKind::BadFormat)),
    }
}

fn find_context<'a, 'b>(children: &'b [DerNode<'a>], id: u8) -> Option<&'b DerNode<'a>> {
    children.iter().find(|node| node.tag == Some(Tag::ContextSpecific(id)))
}

fn curve_from_oid_node(node: &DerNode<'_>) -> Result<EcCurve> {
    EcCurve::from_oid_bytes(node.bytes)
}

/// Parse a SEC1 `ECPrivateKey`:
/// `SEQUENCE { INTEGER version=1, OCTET STRING privateScalar, [0] OID curve, [1] BIT STRING publicPoint (ignored) }`.
pub(crate) fn import_sec1(bytes: &[u8]) -> Result<PrivateKeyFields> {
    let root = matter_der::decode(bytes).map_err(|_| Error::new(ErrorKind::BadFormat))?;
    let children = sequence_children(&root)?;

    let version = expect_tag(children.first(), Tag::Integer)?;
    if version.bytes != [0x01] {
        return Err(Error::new(ErrorKind::BadVersion));
    }

    let private_scalar = expect_tag(children.get(1), Tag::OctetString)?.bytes.to_vec();

    let curve_wrapper = find_context(children, 0).ok_or_else(|| Error::new(ErrorKind::BadFormat))?;
    let curve_oid = expect_tag(curve_wrapper.children().first(), Tag::ObjectIdentifier)?;
    let curve = curve_from_oid_node(curve_oid)?;

    Ok(PrivateKeyFields { curve, private_scalar })
}

/// Parse a PKCS#8 `OneAsymmetricKey` wrapping an EC private key:
/// `SEQUENCE { INTEGER version=0, AlgorithmIdentifier{ecPublicKey, curve}, OCTET STRING wrapping a SEC1-like SEQUENCE }`.
pub(crate) fn import_pkcs8(bytes: &[u8]) -> Result<PrivateKeyFields> {
    let root = matter_der::decode(bytes).map_err(|_| Error::new(ErrorKind::BadFormat))?;
    let children = sequence_children(&root)?;

    let version = expect_tag(children.first(), Tag::Integer)?;
    if version.bytes != [0x00] {
        return Err(Error::new(ErrorKind::BadVersion));
    }

    let algorithm_id = expect_tag(children.get(1), Tag::Sequence)?;
    let algorithm_children = algorithm_id.children();

    let algorithm_oid = expect_tag(algorithm_children.first(), Tag::ObjectIdentifier)?;
    match ObjectIdentifier::from_bytes(algorithm_oid.bytes) {
        Ok(oid) if oid == EC_PUBLIC_KEY_OID => {}
        _ => return Err(Error::new(ErrorKind::UnsupportedAlgorithm)),
    }

    let curve_oid = expect_tag(algorithm_children.get(1), Tag::ObjectIdentifier)?;
    let curve = curve_from_oid_node(curve_oid)?;

    let wrapped = expect_tag(children.get(2), Tag::OctetString)?;
    let inner_root = matter_der::decode(wrapped.bytes).map_err(|_| Error::new(ErrorKind::BadFormat))?;
    let inner_children = sequence_children(&inner_root)?;
    let private_scalar = expect_tag(inner_children.get(1), Tag::OctetString)?.bytes.to_vec();

    Ok(PrivateKeyFields { curve, private_scalar })
}

/// Parse an SPKI `SubjectPublicKeyInfo`:
/// `SEQUENCE { AlgorithmIdentifier{ecPublicKey, curve}, BIT STRING publicPoint }`.
pub(crate) fn import_spki(bytes: &[u8]) -> Result<PublicKeyFields> {
    let root = matter_der::decode(bytes).map_err(|_| Error::new(ErrorKind::BadFormat))?;
    let children = sequence_children(&root)?;

    let algorithm_id = expect_tag(children.first(), Tag::Sequence)?;
    let algorithm_children = algorithm_id.children();

    let algorithm_oid = expect_tag(algorithm_children.first(), Tag::ObjectIdentifier)?;
    match ObjectIdentifier::from_bytes(algorithm_oid.bytes) {
        Ok(oid) if oid == EC_PUBLIC_KEY_OID => {}
        _ => return Err(Error::new(ErrorKind::UnsupportedAlgorithm)),
    }

    let curve_oid = expect_tag(algorithm_children.get(1), Tag::ObjectIdentifier)?;
    let curve = curve_from_oid_node(curve_oid)?;

    let point = expect_tag(children.get(1), Tag::BitString)?;
    let (_curve_from_point, x, y) = split_uncompressed_point(curve, point.bytes)?;

    Ok(PublicKeyFields { curve, x, y })
}

/// Split a BIT STRING's content (leading unused-bits octet, then an
/// uncompressed SEC1 point) into the curve's coordinate pair.
fn split_uncompressed_point(curve: EcCurve, bit_string: &[u8]) -> Result<(EcCurve, Vec<u8>, Vec<u8>)> {
    let point = bit_string.split_first().map(|(_, rest)| rest).ok_or_else(|| Error::new(ErrorKind::BadFormat))?;
    parse_raw_point(point).and_then(|(inferred, x, y)| {
        if inferred == curve {
            Ok((curve, x, y))
        } else {
            Err(Error::new(ErrorKind::UnknownCurve))
        }
    })
}

/// Parse a raw, uncompressed SEC1 public point: `0x04 || X || Y`, with `X`
/// and `Y` equal-length big-endian coordinates. The curve is inferred from
/// the coordinate length.
pub(crate) fn parse_raw_point(bytes: &[u8]) -> Result<(EcCurve, Vec<u8>, Vec<u8>)> {
    let (prefix, rest) = bytes.split_first().ok_or_else(|| Error::new(ErrorKind::BadFormat))?;
    match *prefix {
        0x04 => {}
        0x02 | 0x03 => return Err(Error::new(ErrorKind::UnsupportedCompression)),
        _ => return Err(Error::new(ErrorKind::BadFormat)),
    }

    if bytes.len() % 2 == 0 {
        return Err(Error::new(ErrorKind::BadFormat));
    }

    let half = rest.len() / 2;
    let curve = EcCurve::from_coordinate_len(half)?;
    Ok((curve, rest[..half].to_vec(), rest[half..].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // SEQUENCE { INTEGER 1, OCTET STRING AABBCCDD, [0] OID P-256 }
    const SEC1_P256: &[u8] = &hex!(
        "30 15"
        "02 01 01"
        "04 04 AABBCCDD"
        "A0 0A 06 08 2A8648CE3D030107"
    );

    // Same shape, but `[0]` wraps rsaEncryption (1.2.840.113549.1.1.1)
    // instead of a curve OID.
    const SEC1_UNKNOWN_CURVE: &[u8] = &hex!(
        "30 16"
        "02 01 01"
        "04 04 AABBCCDD"
        "A0 0B 06 09 2A864886F70D010101"
    );

    #[test]
    fn imports_sec1_p256_key() {
        let fields = import_sec1(SEC1_P256).unwrap();
        assert_eq!(fields.curve, EcCurve::P256);
        assert_eq!(fields.private_scalar, alloc::vec![0xAA, 0xBB, 0xCC, 0xDD]);
    }

    // Scenario S5.
    #[test]
    fn sec1_unknown_curve_oid_is_rejected() {
        assert_eq!(
            import_sec1(SEC1_UNKNOWN_CURVE).unwrap_err().kind(),
            ErrorKind::UnknownCurve
        );
    }

    #[test]
    fn sec1_bad_version_is_rejected() {
        let bad_version = hex!(
            "30 15"
            "02 01 02"
            "04 04 AABBCCDD"
            "A0 0A 06 08 2A8648CE3D030107"
        );
        assert_eq!(import_sec1(&bad_version).unwrap_err().kind(), ErrorKind::BadVersion);
    }

    #[test]
    fn rejects_non_uncompressed_prefix() {
        let mut point = alloc::vec![0x02u8];
        point.extend(alloc::vec![0u8; 64]);
        assert_eq!(
            parse_raw_point(&point).unwrap_err().kind(),
            ErrorKind::UnsupportedCompression
        );
    }

    #[test]
    fn rejects_even_length_point() {
        let mut point = alloc::vec![0x04u8];
        point.extend(alloc::vec![0u8; 63]);
        assert_eq!(parse_raw_point(&point).unwrap_err().kind(), ErrorKind::BadFormat);
    }

    #[test]
    fn parses_p256_uncompressed_point() {
        let mut point = alloc::vec![0x04u8];
        point.extend(alloc::vec![0xAAu8; 32]);
        point.extend(alloc::vec![0xBBu8; 32]);
        let (curve, x, y) = parse_raw_point(&point).unwrap();
        assert_eq!(curve, EcCurve::P256);
        assert_eq!(x, alloc::vec![0xAAu8; 32]);
        assert_eq!(y, alloc::vec![0xBBu8; 32]);
    }
}
