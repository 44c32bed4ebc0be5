//! The decoded DER node tree.

use alloc::vec::Vec;

use crate::tag::Tag;

/// A single decoded DER value.
///
/// Primitive nodes (`elements` is `None`) carry their raw content octets in
/// `bytes`. Constructed nodes (SEQUENCE, or an explicit context-specific
/// tag) carry their child nodes in `elements` and keep `bytes` as the
/// still-encoded content region they were parsed from, which lets a caller
/// re-walk a sub-message (e.g. a nested SEQUENCE inside an OCTET STRING)
/// without re-decoding from the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerNode<'a> {
    /// Recognized tag, or `None` for an unrecognized primitive tag.
    pub tag: Option<Tag>,

    /// Raw identifier octet as it appeared on the wire.
    pub raw_tag: u8,

    /// Content octets (the "V" of this node's TLV).
    pub bytes: &'a [u8],

    /// Child nodes, present only for constructed tags.
    pub elements: Option<Vec<DerNode<'a>>>,
}

impl<'a> DerNode<'a> {
    /// Is this node a constructed value (has `elements`)?
    pub fn is_constructed(&self) -> bool {
        self.elements.is_some()
    }

    /// Children of a constructed node, or an empty slice for a primitive.
    pub fn children(&self) -> &[DerNode<'a>] {
        self.elements.as_deref().unwrap_or(&[])
    }
}
