//! The central JWK-shaped key record, its alias projections, and the
//! construction pipeline that ties base fields, aliases, and importers
//! together.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::curve::EcCurve;
use crate::error::{Error, ErrorKind};
use crate::importers::{self, PrivateKeyFields, PublicKeyFields};
use crate::provider::EcProvider;
use crate::Result;

/// `kty` value for elliptic-curve keys.
pub const KTY_EC: &str = "EC";
/// `kty` value for symmetric (octet-sequence) keys.
pub const KTY_OCT: &str = "oct";

/// The base JWK field set this crate recognizes. RSA field names are
/// carried verbatim for completeness; this crate performs no RSA-specific
/// validation or derivation on them.
#[derive(Clone, Debug, Default, PartialEq)]
struct BaseFields {
    kty: Option<String>,
    crv: Option<String>,
    d: Option<String>,
    x: Option<String>,
    y: Option<String>,
    k: Option<String>,
    alg: Option<String>,
    key_ops: Option<Vec<String>>,
    ext: Option<bool>,
    n: Option<String>,
    e: Option<String>,
    p: Option<String>,
    q: Option<String>,
    dp: Option<String>,
    dq: Option<String>,
    qi: Option<String>,
    oth: Option<String>,
}

/// Clears private scalar and symmetric key material on drop. Public fields
/// (`x`, `y`, `n`, `e`, `crv`, `kty`, ...) are left untouched.
impl Drop for BaseFields {
    fn drop(&mut self) {
        self.d.zeroize();
        self.k.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qi.zeroize();
    }
}

/// A JWK-shaped key record.
///
/// Immutable once built: a [`KeyBuilder`] applies base fields, aliases, and
/// importers in the fixed order the key model requires, then hands back a
/// finished, read-only [`Key`].
#[derive(Clone, Debug, PartialEq)]
pub struct Key {
    fields: BaseFields,
}

impl Key {
    // --- base JWK fields -------------------------------------------------

    /// The `kty` field.
    pub fn kty(&self) -> Option<&str> {
        self.fields.kty.as_deref()
    }

    /// The `crv` field.
    pub fn crv(&self) -> Option<&str> {
        self.fields.crv.as_deref()
    }

    /// The `d` field (base64url, unpadded).
    pub fn d(&self) -> Option<&str> {
        self.fields.d.as_deref()
    }

    /// The `x` field (base64url, unpadded).
    pub fn x(&self) -> Option<&str> {
        self.fields.x.as_deref()
    }

    /// The `y` field (base64url, unpadded).
    pub fn y(&self) -> Option<&str> {
        self.fields.y.as_deref()
    }

    /// The `k` field (base64url, unpadded).
    pub fn k(&self) -> Option<&str> {
        self.fields.k.as_deref()
    }

    /// The `alg` field.
    pub fn alg(&self) -> Option<&str> {
        self.fields.alg.as_deref()
    }

    /// The `key_ops` field.
    pub fn key_ops(&self) -> Option<&[String]> {
        self.fields.key_ops.as_deref()
    }

    /// The `ext` field.
    pub fn ext(&self) -> Option<bool> {
        self.fields.ext
    }

    /// The RSA `n` field, carried verbatim.
    pub fn n(&self) -> Option<&str> {
        self.fields.n.as_deref()
    }

    /// The RSA `e` field, carried verbatim.
    pub fn e(&self) -> Option<&str> {
        self.fields.e.as_deref()
    }

    // --- human aliases (transparent, same representation as the base field) --

    /// Alias for [`Key::alg`].
    pub fn algorithm(&self) -> Option<&str> {
        self.alg()
    }

    /// Alias for [`Key::crv`].
    pub fn curve(&self) -> Option<&str> {
        self.crv()
    }

    /// Alias for [`Key::kty`].
    pub fn key_type(&self) -> Option<&str> {
        self.kty()
    }

    /// Alias for [`Key::key_ops`].
    pub fn operations(&self) -> Option<&[String]> {
        self.key_ops()
    }

    /// Alias for [`Key::d`].
    pub fn private(&self) -> Option<&str> {
        self.d()
    }

    /// Alias for [`Key::ext`].
    pub fn extractable(&self) -> Option<bool> {
        self.ext()
    }

    // --- binary aliases (base64url-decoded view of a string field) -------

    /// Binary view of [`Key::d`].
    pub fn private_bits(&self) -> Option<Result<Vec<u8>>> {
        self.fields.d.as_deref().map(decode_b64)
    }

    /// Binary view of [`Key::x`].
    pub fn x_bits(&self) -> Option<Result<Vec<u8>>> {
        self.fields.x.as_deref().map(decode_b64)
    }

    /// Binary view of [`Key::y`].
    pub fn y_bits(&self) -> Option<Result<Vec<u8>>> {
        self.fields.y.as_deref().map(decode_b64)
    }

    // --- asserted aliases (fail rather than return an absent value) ------

    /// The raw uncompressed SEC1 public point (`0x04 || X || Y`).
    ///
    /// Fails with [`ErrorKind::MissingField`] if `x` or `y` is not set.
    pub fn public_key(&self) -> Result<Vec<u8>> {
        let x = self.x_bits().ok_or_else(|| missing("x"))??;
        let y = self.y_bits().ok_or_else(|| missing("y"))??;
        let mut point = Vec::with_capacity(1 + x.len() + y.len());
        point.push(0x04);
        point.extend(x);
        point.extend(y);
        Ok(point)
    }

    /// The raw private scalar.
    ///
    /// Fails with [`ErrorKind::MissingField`] if `d` is not set.
    pub fn private_key(&self) -> Result<Vec<u8>> {
        self.private_bits().ok_or_else(|| missing("d"))?
    }

    /// Both halves of an EC key pair: `(private_key, public_key)`.
    pub fn key_pair(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        Ok((self.private_key()?, self.public_key()?))
    }
}

fn missing(field: &str) -> Error {
    Error::on_field(ErrorKind::MissingField, field)
}

fn decode_b64(s: &str) -> Result<Vec<u8>> {
    matter_b64::decode_vec(s).map_err(Error::from)
}

fn encode_b64(bytes: &[u8]) -> String {
    matter_b64::encode_string(bytes)
}

/// A key material variant recognized by the importer pipeline, processed
/// in the fixed order {SEC1, PKCS#8, SPKI, raw point, paired binary}
/// regardless of the order the builder methods were called in.
enum Import {
    Sec1(Vec<u8>),
    Pkcs8(Vec<u8>),
    Spki(Vec<u8>),
    RawPoint(Vec<u8>),
    Pair { private_key: Vec<u8>, public_key: Vec<u8> },
}

/// Builds a [`Key`] from a partial specification: base fields, human and
/// binary aliases, and tagged import variants, applied in the fixed order
/// described in the key model's construction rules.
#[derive(Default)]
pub struct KeyBuilder<'p> {
    fields: BaseFields,
    private_bits: Option<Vec<u8>>,
    x_bits: Option<Vec<u8>>,
    y_bits: Option<Vec<u8>>,
    imports: Vec<Import>,
    provider: Option<&'p dyn EcProvider>,
}

impl<'p> KeyBuilder<'p> {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base `kty` field.
    pub fn kty(mut self, value: impl Into<String>) -> Self {
        self.fields.kty = Some(value.into());
        self
    }

    /// Set the base `crv` field.
    pub fn crv(mut self, value: impl Into<String>) -> Self {
        self.fields.crv = Some(value.into());
        self
    }

    /// Set the base `d` field (already base64url-encoded).
    pub fn d(mut self, value: impl Into<String>) -> Self {
        self.fields.d = Some(value.into());
        self
    }

    /// Set the base `x` field (already base64url-encoded).
    pub fn x(mut self, value: impl Into<String>) -> Self {
        self.fields.x = Some(value.into());
        self
    }

    /// Set the base `y` field (already base64url-encoded).
    pub fn y(mut self, value: impl Into<String>) -> Self {
        self.fields.y = Some(value.into());
        self
    }

    /// Set the base `k` field (already base64url-encoded).
    pub fn k(mut self, value: impl Into<String>) -> Self {
        self.fields.k = Some(value.into());
        self
    }

    /// Set the base `alg` field.
    pub fn alg(mut self, value: impl Into<String>) -> Self {
        self.fields.alg = Some(value.into());
        self
    }

    /// Set the base `key_ops` field.
    pub fn key_ops(mut self, value: Vec<String>) -> Self {
        self.fields.key_ops = Some(value);
        self
    }

    /// Set the base `ext` field.
    pub fn ext(mut self, value: bool) -> Self {
        self.fields.ext = Some(value);
        self
    }

    /// Human alias for [`KeyBuilder::alg`].
    pub fn algorithm(self, value: impl Into<String>) -> Self {
        self.alg(value)
    }

    /// Human alias for [`KeyBuilder::crv`].
    pub fn curve(self, value: impl Into<String>) -> Self {
        self.crv(value)
    }

    /// Human alias for [`KeyBuilder::kty`].
    pub fn key_type(self, value: impl Into<String>) -> Self {
        self.kty(value)
    }

    /// Human alias for [`KeyBuilder::key_ops`].
    pub fn operations(self, value: Vec<String>) -> Self {
        self.key_ops(value)
    }

    /// Human alias for [`KeyBuilder::d`].
    pub fn private(self, value: impl Into<String>) -> Self {
        self.d(value)
    }

    /// Human alias for [`KeyBuilder::ext`].
    pub fn extractable(self, value: bool) -> Self {
        self.ext(value)
    }

    /// Binary alias: base64url-encodes `bytes` into the `d` field.
    pub fn private_bits(mut self, bytes: Vec<u8>) -> Self {
        self.private_bits = Some(bytes);
        self
    }

    /// Binary alias: base64url-encodes `bytes` into the `x` field.
    pub fn x_bits(mut self, bytes: Vec<u8>) -> Self {
        self.x_bits = Some(bytes);
        self
    }

    /// Binary alias: base64url-encodes `bytes` into the `y` field.
    pub fn y_bits(mut self, bytes: Vec<u8>) -> Self {
        self.y_bits = Some(bytes);
        self
    }

    /// Import a SEC1 `ECPrivateKey` DER document.
    pub fn sec1(mut self, der: Vec<u8>) -> Self {
        self.imports.push(Import::Sec1(der));
        self
    }

    /// Import a PKCS#8 private key DER document wrapping an EC key.
    pub fn pkcs8(mut self, der: Vec<u8>) -> Self {
        self.imports.push(Import::Pkcs8(der));
        self
    }

    /// Import an SPKI `SubjectPublicKeyInfo` DER document.
    pub fn spki(mut self, der: Vec<u8>) -> Self {
        self.imports.push(Import::Spki(der));
        self
    }

    /// Import a raw uncompressed SEC1 public point (`0x04 || X || Y`).
    pub fn raw_point(mut self, point: Vec<u8>) -> Self {
        self.imports.push(Import::RawPoint(point));
        self
    }

    /// Import a paired `{ publicKey, privateKey }` byte-array pair.
    pub fn pair(mut self, private_key: Vec<u8>, public_key: Vec<u8>) -> Self {
        self.imports.push(Import::Pair { private_key, public_key });
        self
    }

    /// Supply the elliptic-curve math capability used to derive a public
    /// point from a private scalar (construction step 7).
    pub fn provider(mut self, provider: &'p dyn EcProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Run the construction pipeline and produce a [`Key`].
    pub fn build(self) -> Result<Key> {
        // Steps 1-2: base fields were already copied verbatim and human
        // aliases already write through to the same field (both happen at
        // the setter call site above, since they target identical storage).
        let mut fields = self.fields;

        // Step 3: binary aliases.
        if let Some(bytes) = self.private_bits {
            fields.d = Some(encode_b64(&bytes));
        }
        if let Some(bytes) = self.x_bits {
            fields.x = Some(encode_b64(&bytes));
        }
        if let Some(bytes) = self.y_bits {
            fields.y = Some(encode_b64(&bytes));
        }

        // Step 4: importers, in the fixed {SEC1, PKCS8, SPKI, raw point,
        // paired binary} order, regardless of the order they were attached.
        let mut ordered: [Option<&Import>; 5] = [None; 5];
        for import in &self.imports {
            let slot = match import {
                Import::Sec1(_) => 0,
                Import::Pkcs8(_) => 1,
                Import::Spki(_) => 2,
                Import::RawPoint(_) => 3,
                Import::Pair { .. } => 4,
            };
            ordered[slot] = Some(import);
        }
        for import in ordered.into_iter().flatten() {
            apply_import(&mut fields, import)?;
        }

        // Step 6: curve inference.
        if fields.kty.as_deref() == Some(KTY_EC) && fields.crv.is_none() {
            if let Some(d) = fields.d.as_deref() {
                let scalar = decode_b64(d)?;
                fields.crv = Some(EcCurve::from_coordinate_len(scalar.len())?.jwk_name().into());
            } else if let Some(x) = fields.x.as_deref() {
                let coordinate = decode_b64(x)?;
                fields.crv = Some(EcCurve::from_coordinate_len(coordinate.len())?.jwk_name().into());
            }
        }

        // Step 7: derive the public point from the private scalar if only
        // the private half is present.
        if fields.kty.as_deref() == Some(KTY_EC) && fields.d.is_some() && (fields.x.is_none() || fields.y.is_none()) {
            let curve = EcCurve::from_jwk_name(fields.crv.as_deref().ok_or_else(|| Error::new(ErrorKind::UnknownCurve))?)?;
            let scalar = decode_b64(fields.d.as_deref().expect("checked above"))?;
            let provider = self.provider.ok_or_else(|| missing("ecProvider"))?;
            let (x, y) = provider
                .derive_public_point(curve, &scalar)
                .map_err(|_| Error::new(ErrorKind::BadScalar))?;
            fields.x = Some(encode_b64(&x));
            fields.y = Some(encode_b64(&y));
        }

        Ok(Key { fields })
    }
}

fn apply_import(fields: &mut BaseFields, import: &Import) -> Result<()> {
    match import {
        Import::Sec1(der) => {
            let PrivateKeyFields { curve, private_scalar } = importers::import_sec1(der)?;
            fields.kty = Some(KTY_EC.into());
            fields.crv = Some(curve.jwk_name().into());
            fields.d = Some(encode_b64(&private_scalar));
        }
        Import::Pkcs8(der) => {
            let PrivateKeyFields { curve, private_scalar } = importers::import_pkcs8(der)?;
            fields.kty = Some(KTY_EC.into());
            fields.crv = Some(curve.jwk_name().into());
            fields.d = Some(encode_b64(&private_scalar));
        }
        Import::Spki(der) => {
            let PublicKeyFields { curve, x, y } = importers::import_spki(der)?;
            fields.kty = Some(KTY_EC.into());
            fields.crv = Some(curve.jwk_name().into());
            fields.x = Some(encode_b64(&x));
            fields.y = Some(encode_b64(&y));
        }
        Import::RawPoint(point) => {
            let (curve, x, y) = importers::parse_raw_point(point)?;
            fields.kty = Some(KTY_EC.into());
            fields.crv = Some(curve.jwk_name().into());
            fields.x = Some(encode_b64(&x));
            fields.y = Some(encode_b64(&y));
        }
        Import::Pair { private_key, public_key } => {
            fields.kty = Some(KTY_EC.into());
            fields.d = Some(encode_b64(private_key));
            let (curve, x, y) = importers::parse_raw_point(public_key)?;
            fields.crv = Some(curve.jwk_name().into());
            fields.x = Some(encode_b64(&x));
            fields.y = Some(encode_b64(&y));
        }
    }
    Ok(())
}

/// Convenience factory: an EC private key from a scalar alone, or a scalar
/// paired with its public point.
pub fn private_key(scalar: Vec<u8>, public_point: Option<Vec<u8>>, provider: Option<&dyn EcProvider>) -> Result<Key> {
    let mut builder = KeyBuilder::new().kty(KTY_EC).private_bits(scalar);
    if let Some(point) = public_point {
        let (curve, x, y) = importers::parse_raw_point(&point)?;
        builder = builder.crv(curve.jwk_name()).x_bits(x).y_bits(y);
    }
    if let Some(provider) = provider {
        builder = builder.provider(provider);
    }
    builder.build()
}

/// Convenience factory: an EC public key from a raw uncompressed point.
pub fn public_key(raw_point: Vec<u8>) -> Result<Key> {
    KeyBuilder::new().kty(KTY_EC).raw_point(raw_point).build()
}

/// Convenience factory: a symmetric (`oct`) key from raw bytes.
pub fn symmetric_key(raw: Vec<u8>) -> Key {
    KeyBuilder::new()
        .kty(KTY_OCT)
        .k(encode_b64(&raw))
        .build()
        .expect("symmetric keys need no importer or EC provider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;

    struct StubProvider;

    impl EcProvider for StubProvider {
        fn derive_public_point(&self, curve: EcCurve, scalar: &[u8]) -> core::result::Result<(Vec<u8>, Vec<u8>), ProviderError> {
            if scalar.iter().all(|&b| b == 0) {
                return Err(ProviderError::BadScalar);
            }
            let len = curve.coordinate_len();
            Ok((alloc::vec![0xAA; len], alloc::vec![0xBB; len]))
        }
    }

    #[test]
    fn human_and_binary_aliases_write_through_to_base_fields() {
        let key = KeyBuilder::new()
            .key_type(KTY_EC)
            .curve("P-256")
            .x_bits(alloc::vec![1u8; 32])
            .y_bits(alloc::vec![2u8; 32])
            .build()
            .unwrap();

        assert_eq!(key.kty(), Some(KTY_EC));
        assert_eq!(key.crv(), Some("P-256"));
        assert_eq!(key.x_bits().unwrap().unwrap(), alloc::vec![1u8; 32]);
        assert_eq!(key.y_bits().unwrap().unwrap(), alloc::vec![2u8; 32]);
    }

    // Scenario S6.
    #[test]
    fn asserted_read_on_empty_key_is_missing_field() {
        let key = KeyBuilder::new().build().unwrap();
        assert_eq!(key.public_key().unwrap_err().kind(), ErrorKind::MissingField);
    }

    // Scenario S4.
    #[test]
    fn raw_point_import_infers_p256_and_splits_coordinates() {
        let mut point = alloc::vec![0x04u8];
        point.extend(alloc::vec![0x11u8; 32]);
        point.extend(alloc::vec![0x22u8; 32]);

        let key = public_key(point).unwrap();
        assert_eq!(key.crv(), Some("P-256"));
        assert_eq!(key.x_bits().unwrap().unwrap(), alloc::vec![0x11u8; 32]);
        assert_eq!(key.y_bits().unwrap().unwrap(), alloc::vec![0x22u8; 32]);
    }

    // Property 6: curve inference from privateKey length alone.
    #[test]
    fn curve_inference_from_private_key_length() {
        for (len, name) in [(32, "P-256"), (48, "P-384"), (66, "P-521")] {
            let key = private_key(alloc::vec![7u8; len], None, Some(&StubProvider)).unwrap();
            assert_eq!(key.crv(), Some(name));
        }

        assert_eq!(
            private_key(alloc::vec![7u8; 40], None, Some(&StubProvider))
                .unwrap_err()
                .kind(),
            ErrorKind::UnknownCurve
        );
    }

    // Property 5 (stubbed EC math): deriving x/y from d alone.
    #[test]
    fn private_key_alone_derives_public_point_via_provider() {
        let key = private_key(alloc::vec![7u8; 32], None, Some(&StubProvider)).unwrap();
        assert_eq!(key.x_bits().unwrap().unwrap(), alloc::vec![0xAAu8; 32]);
        assert_eq!(key.y_bits().unwrap().unwrap(), alloc::vec![0xBBu8; 32]);
    }

    #[test]
    fn symmetric_key_sets_k_and_oct_type() {
        let key = symmetric_key(alloc::vec![9u8; 16]);
        assert_eq!(key.kty(), Some(KTY_OCT));
        assert_eq!(key.private_bits(), None);
        assert_eq!(matter_b64::decode_vec(key.k().unwrap()).unwrap(), alloc::vec![9u8; 16]);
    }
}
