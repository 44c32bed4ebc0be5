//! A read-only tree view over a decoded TLV element stream.
//!
//! This is a convenience built on top of [`crate::read_element`] and
//! [`crate::read_primitive`]; it adds no wire semantics of its own.

use alloc::vec::Vec;

use matter_io::Reader;

use crate::codec::{read_element, read_primitive};
use crate::tag::Tag;
use crate::type_length::TypeLength;
use crate::value::TlvValue;
use crate::Result;

/// One element of a decoded TLV tree, with its children (if it opened a
/// container) already decoded alongside it.
#[derive(Clone, Debug, PartialEq)]
pub struct TlvElement {
    tag: Tag,
    value: TlvValue,
    children: Vec<TlvElement>,
}

impl TlvElement {
    /// This element's tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// This element's decoded value.
    pub fn value(&self) -> &TlvValue {
        &self.value
    }

    /// Child elements, populated when [`TlvElement::value`] is a
    /// [`TlvValue::ContainerOpen`]; empty otherwise.
    pub fn children(&self) -> &[TlvElement] {
        &self.children
    }

    /// Decode a single top-level element (and, recursively, everything it
    /// contains) from `reader`.
    pub fn decode(reader: &mut Reader<'_>) -> Result<TlvElement> {
        let (tag, type_length) = read_element(reader)?;
        let value = read_primitive(reader, type_length)?;

        let children = if type_length.opens_container() {
            decode_children(reader)?
        } else {
            Vec::new()
        };

        Ok(TlvElement { tag, value, children })
    }
}

fn decode_children(reader: &mut Reader<'_>) -> Result<Vec<TlvElement>> {
    let mut children = Vec::new();
    loop {
        let (tag, type_length) = read_element(reader)?;
        let value = read_primitive(reader, type_length)?;

        if matches!(type_length, TypeLength::EndOfContainer) {
            break;
        }

        let grandchildren = if type_length.opens_container() {
            decode_children(reader)?
        } else {
            Vec::new()
        };

        children.push(TlvElement {
            tag,
            value,
            children: grandchildren,
        });
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::TlvElement;
    use crate::tag::Tag;
    use crate::value::{ContainerKind, TlvValue};
    use hex_literal::hex;
    use matter_io::Reader;

    // Scenario S3: `15 29 00 18` — structure containing one context(0) bool.
    #[test]
    fn decodes_structure_tree() {
        let mut reader = Reader::new(&hex!("15 29 00 18"));
        let element = TlvElement::decode(&mut reader).unwrap();

        assert_eq!(element.tag(), Tag::Anonymous);
        assert_eq!(
            element.value(),
            &TlvValue::ContainerOpen(ContainerKind::Structure)
        );
        assert_eq!(element.children().len(), 1);
        assert_eq!(element.children()[0].tag(), Tag::Context(0));
        assert_eq!(element.children()[0].value(), &TlvValue::Bool(true));
        assert!(element.children()[0].children().is_empty());
    }
}
