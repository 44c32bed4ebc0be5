//! DER decoder: turns a byte slice into a [`DerNode`] tree.

use alloc::vec::Vec;

use crate::{node::DerNode, tag, Error, ErrorKind, Result};

/// Decode a complete DER value from `input`, returning the root node.
///
/// Trailing bytes after the first complete TLV are treated as an error
/// (`BadDer`) rather than silently ignored, since every format this layer
/// consumes (SEC1, PKCS#8, SPKI) is a single top-level SEQUENCE.
pub fn decode(input: &[u8]) -> Result<DerNode<'_>> {
    let mut cursor = Cursor { input, pos: 0 };
    let node = cursor.decode_node()?;
    if cursor.pos != input.len() {
        return Err(Error::new(ErrorKind::BadDer, cursor.pos));
    }
    Ok(node)
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn decode_node(&mut self) -> Result<DerNode<'a>> {
        let tag_pos = self.pos;
        let raw_tag = self.byte()?;
        let (tag, constructed) = tag::classify(raw_tag, tag_pos)?;
        let len = self.decode_length()?;
        let content = self.take(len)?;

        let elements = if constructed {
            Some(decode_all(content, tag_pos)?)
        } else {
            None
        };

        Ok(DerNode {
            tag,
            raw_tag,
            bytes: content,
            elements,
        })
    }

    /// Decode a DER length per X.690 §8.1.3: short form (`< 0x80`) or long
    /// form (high bit set, low 7 bits give the count of following
    /// big-endian length octets). The indefinite-length form (`0x80`) and
    /// non-minimal long-form encodings are both non-canonical and rejected.
    fn decode_length(&mut self) -> Result<usize> {
        let pos = self.pos;
        let first = self.byte()?;

        if first < 0x80 {
            return Ok(first as usize);
        }

        let count = (first & 0x7F) as usize;
        if count == 0 {
            // 0x80: indefinite length, not allowed in DER.
            return Err(Error::new(ErrorKind::BadDer, pos));
        }
        if count > core::mem::size_of::<usize>() {
            return Err(Error::new(ErrorKind::BadDer, pos));
        }

        let mut len: usize = 0;
        for _ in 0..count {
            len = len
                .checked_shl(8)
                .ok_or_else(|| Error::new(ErrorKind::BadDer, pos))?
                | self.byte()? as usize;
        }

        // X.690 §10.1: the minimum number of length octets MUST be used.
        if len < 0x80 || (count == 1 && len < 0x80) {
            return Err(Error::new(ErrorKind::BadDer, pos));
        }
        let min_count = min_length_octets(len);
        if count != min_count {
            return Err(Error::new(ErrorKind::BadDer, pos));
        }

        Ok(len)
    }

    fn byte(&mut self) -> Result<u8> {
        let byte = *self
            .input
            .get(self.pos)
            .ok_or_else(|| Error::new(ErrorKind::Truncated, self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.input.len())
            .ok_or_else(|| Error::new(ErrorKind::Truncated, self.pos))?;
        let slice = &self.input[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}

fn min_length_octets(len: usize) -> usize {
    let bits = usize::BITS - len.leading_zeros();
    ((bits as usize) + 7) / 8
}

/// Decode zero or more back-to-back TLVs filling `content` exactly, used for
/// the body of a constructed node.
fn decode_all(content: &[u8], base_pos: usize) -> Result<Vec<DerNode<'_>>> {
    let mut cursor = Cursor {
        input: content,
        pos: 0,
    };
    let mut elements = Vec::new();
    while cursor.pos < content.len() {
        elements.push(cursor.decode_node().map_err(|e| {
            Error::new(e.kind(), base_pos + e.position())
        })?);
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::decode;
    use crate::tag::Tag;
    use hex_literal::hex;

    #[test]
    fn decodes_short_form_integer() {
        let node = decode(&hex!("02 01 2A")).unwrap();
        assert_eq!(node.tag, Some(Tag::Integer));
        assert_eq!(node.bytes, &[0x2A]);
        assert!(!node.is_constructed());
    }

    #[test]
    fn decodes_sequence_with_children() {
        // SEQUENCE { INTEGER 1, OCTET STRING "ab" }
        let node = decode(&hex!("30 07 02 01 01 04 02 61 62")).unwrap();
        assert_eq!(node.tag, Some(Tag::Sequence));
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].bytes, &[0x01]);
        assert_eq!(node.children()[1].bytes, b"ab");
    }

    #[test]
    fn decodes_long_form_length() {
        let mut bytes = alloc::vec![0x04u8, 0x81, 0x80];
        bytes.extend(core::iter::repeat(0xAAu8).take(0x80));
        let node = decode(&bytes).unwrap();
        assert_eq!(node.bytes.len(), 0x80);
    }

    #[test]
    fn rejects_indefinite_length() {
        assert!(decode(&hex!("30 80")).is_err());
    }

    #[test]
    fn rejects_non_minimal_long_form() {
        // Length 5 could fit in short form; encoding it via 0x81 0x05 is
        // non-canonical.
        assert!(decode(&hex!("04 81 05 01 02 03 04 05")).is_err());
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(decode(&hex!("04 05 01 02")).is_err());
    }

    #[test]
    fn rejects_unknown_constructed_tag() {
        // 0x60 | CONSTRUCTED is an APPLICATION tag this layer doesn't model.
        assert!(decode(&hex!("60 00")).is_err());
    }

    #[test]
    fn rejects_trailing_data() {
        assert!(decode(&hex!("02 01 01 00")).is_err());
    }

    #[test]
    fn decodes_explicit_context_tag() {
        // [0] { INTEGER 7 }
        let node = decode(&hex!("A0 03 02 01 07")).unwrap();
        assert_eq!(node.tag, Some(Tag::ContextSpecific(0)));
        assert_eq!(node.children()[0].bytes, &[0x07]);
    }
}
