//! DER identifier octets, trimmed to the universal tags the key importers
//! need plus explicit (constructed) context-specific tagging.

use crate::{Error, ErrorKind, Result};
use core::convert::TryFrom;

/// Indicator bit for constructed-form encoding (vs. primitive form).
const CONSTRUCTED_FLAG: u8 = 0b0010_0000;

/// A DER tag, restricted to what SEC1/PKCS#8/SPKI key documents use.
///
/// Structured per X.690 §8.1.2:
///
/// ```text
/// | Class | P/C | Tag Number |
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum Tag {
    /// `INTEGER` (0x02)
    Integer,
    /// `BIT STRING` (0x03)
    BitString,
    /// `OCTET STRING` (0x04)
    OctetString,
    /// `NULL` (0x05)
    Null,
    /// `OBJECT IDENTIFIER` (0x06)
    ObjectIdentifier,
    /// `SEQUENCE` (0x30, constructed)
    Sequence,
    /// Explicit context-specific tag `[n]` (constructed, 0xA0..=0xBF)
    ContextSpecific(u8),
}

impl Tag {
    /// Is this tag's encoding constructed (carries nested TLVs) rather than
    /// primitive (carries raw content octets)?
    pub fn is_constructed(self) -> bool {
        matches!(self, Tag::Sequence | Tag::ContextSpecific(_))
    }
}

impl TryFrom<u8> for Tag {
    type Error = ();

    /// Attempt to map a raw identifier octet onto a recognized [`Tag`].
    ///
    /// Returns `Err(())` for any identifier this layer does not model
    /// (SET, application/private tags, other universal types); the caller
    /// decides whether that is fatal.
    fn try_from(byte: u8) -> core::result::Result<Tag, ()> {
        match byte {
            0x02 => Ok(Tag::Integer),
            0x03 => Ok(Tag::BitString),
            0x04 => Ok(Tag::OctetString),
            0x05 => Ok(Tag::Null),
            0x06 => Ok(Tag::ObjectIdentifier),
            0x30 => Ok(Tag::Sequence),
            0xA0..=0xBF => Ok(Tag::ContextSpecific(byte & 0b0001_1111)),
            _ => Err(()),
        }
    }
}

/// Classify a raw identifier octet as constructed/primitive and, when
/// recognized, as a [`Tag`]. Unknown constructed tags are rejected outright
/// per §4.B ("unknown constructed tags ... fail with `BadDer`"); unknown
/// primitive tags are retained as opaque octets so callers that don't care
/// about the specific type (e.g. skipping an attribute) can still advance
/// past them.
pub(crate) fn classify(byte: u8, position: usize) -> Result<(Option<Tag>, bool)> {
    let constructed = byte & CONSTRUCTED_FLAG != 0;
    match Tag::try_from(byte) {
        Ok(tag) => Ok((Some(tag), constructed)),
        Err(()) if constructed => Err(Error::new(ErrorKind::BadDer, position)),
        Err(()) => Ok((None, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;
    use core::convert::TryFrom;

    #[test]
    fn recognizes_universal_tags() {
        assert_eq!(Tag::try_from(0x02), Ok(Tag::Integer));
        assert_eq!(Tag::try_from(0x04), Ok(Tag::OctetString));
        assert_eq!(Tag::try_from(0x30), Ok(Tag::Sequence));
    }

    #[test]
    fn recognizes_context_specific() {
        assert_eq!(Tag::try_from(0xA0), Ok(Tag::ContextSpecific(0)));
        assert_eq!(Tag::try_from(0xA1), Ok(Tag::ContextSpecific(1)));
    }

    #[test]
    fn rejects_unknown_tag() {
        assert!(Tag::try_from(0x99).is_err());
    }
}
