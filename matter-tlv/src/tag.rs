//! TLV tag variants and the tag-control bits of the control byte.

use matter_io::{Reader, Writer};

use crate::{Error, ErrorKind, Result};

/// Top three bits of the control byte, selecting the tag encoding.
const TAG_CONTROL_SHIFT: u8 = 5;

/// A decoded or to-be-encoded TLV tag.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tag {
    /// No identifier.
    Anonymous,
    /// 8-bit id, only legal inside a container.
    Context(u8),
    /// 16-bit id under the common profile (profile number 0).
    CommonProfile16(u16),
    /// 32-bit id under the common profile (profile number 0).
    CommonProfile32(u32),
    /// Explicit 32-bit profile plus a 16-bit id.
    FullyQualified48 {
        /// Vendor/profile number.
        profile: u32,
        /// Tag id within the profile.
        id: u16,
    },
    /// Explicit 32-bit profile plus a 32-bit id.
    FullyQualified64 {
        /// Vendor/profile number.
        profile: u32,
        /// Tag id within the profile.
        id: u32,
    },
}

/// A tag request: the caller-facing "profile + id" pair [`Tag::resolve`]
/// turns into a concrete wire [`Tag`] per the selection rules in §4.D.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct TagRequest {
    profile: Option<u32>,
    id: Option<u32>,
}

impl TagRequest {
    /// No profile, no id.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// No profile, an 8-bit-or-narrower id.
    pub fn context(id: u8) -> Self {
        Self {
            profile: None,
            id: Some(u32::from(id)),
        }
    }

    /// Common-profile (profile number 0) id.
    pub fn common(id: u32) -> Self {
        Self {
            profile: Some(0),
            id: Some(id),
        }
    }

    /// Fully-qualified tag under an explicit vendor/profile number.
    pub fn fully_qualified(profile: u32, id: u32) -> Self {
        Self {
            profile: Some(profile),
            id: Some(id),
        }
    }

    /// Resolve this request into a concrete wire [`Tag`] per the selection
    /// rules in §4.D:
    ///
    /// - No profile, no id → Anonymous.
    /// - No profile, id present → Context-specific (id MUST fit in 8 bits).
    /// - profile == 0 → CommonProfile16 if id fits in 16 bits else 32.
    /// - profile != 0 → FullyQualified48 if id fits in 16 bits else 64.
    pub fn resolve(self) -> Result<Tag> {
        match (self.profile, self.id) {
            (None, None) => Ok(Tag::Anonymous),
            (None, Some(id)) => u8::try_from(id)
                .map(Tag::Context)
                .map_err(|_| Error::new(ErrorKind::BadTag, 0)),
            (Some(0), Some(id)) => Ok(match u16::try_from(id) {
                Ok(id) => Tag::CommonProfile16(id),
                Err(_) => Tag::CommonProfile32(id),
            }),
            (Some(profile), Some(id)) => Ok(match u16::try_from(id) {
                Ok(id) => Tag::FullyQualified48 { profile, id },
                Err(_) => Tag::FullyQualified64 { profile, id },
            }),
            (Some(_), None) => Err(Error::new(ErrorKind::BadTag, 0)),
        }
    }
}

impl Tag {
    /// The tag-control value (0..=7) this tag encodes as.
    fn control(self) -> u8 {
        match self {
            Tag::Anonymous => 0,
            Tag::Context(_) => 1,
            Tag::CommonProfile16(_) => 2,
            Tag::CommonProfile32(_) => 3,
            // 4 and 5 are the implicit-profile forms; this layer never emits
            // them (see `decode`, which rejects them on the wire).
            Tag::FullyQualified48 { .. } => 6,
            Tag::FullyQualified64 { .. } => 7,
        }
    }

    /// Control-byte bits (tag control in the top 3 bits, zeros below) for
    /// this tag, to be OR-ed with the type-length nibble.
    pub(crate) fn control_bits(self) -> u8 {
        self.control() << TAG_CONTROL_SHIFT
    }

    pub(crate) fn write(self, writer: &mut Writer) {
        match self {
            Tag::Anonymous => {}
            Tag::Context(id) => writer.write_u8(id),
            Tag::CommonProfile16(id) => writer.write_u16(id),
            Tag::CommonProfile32(id) => writer.write_u32(id),
            Tag::FullyQualified48 { profile, id } => {
                writer.write_u32(profile);
                writer.write_u16(id);
            }
            Tag::FullyQualified64 { profile, id } => {
                writer.write_u32(profile);
                writer.write_u32(id);
            }
        }
    }

    /// Decode the tag bytes following a control byte whose tag-control
    /// field was `control` (0..=7).
    pub(crate) fn decode(control: u8, reader: &mut Reader<'_>) -> Result<Tag> {
        match control {
            0 => Ok(Tag::Anonymous),
            1 => Ok(Tag::Context(reader.read_u8()?)),
            2 => Ok(Tag::CommonProfile16(reader.read_u16()?)),
            3 => Ok(Tag::CommonProfile32(reader.read_u32()?)),
            4 | 5 => Err(Error::new(ErrorKind::UnsupportedProfile, reader.position())),
            6 => {
                let profile = reader.read_u32()?;
                let id = reader.read_u16()?;
                Ok(Tag::FullyQualified48 { profile, id })
            }
            7 => {
                let profile = reader.read_u32()?;
                let id = reader.read_u32()?;
                Ok(Tag::FullyQualified64 { profile, id })
            }
            _ => unreachable!("tag control is masked to 3 bits"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TagRequest};

    #[test]
    fn resolves_anonymous() {
        assert_eq!(TagRequest::anonymous().resolve().unwrap(), Tag::Anonymous);
    }

    #[test]
    fn resolves_context() {
        assert_eq!(TagRequest::context(3).resolve().unwrap(), Tag::Context(3));
    }

    #[test]
    fn resolves_common_profile_width() {
        assert_eq!(
            TagRequest::common(10).resolve().unwrap(),
            Tag::CommonProfile16(10)
        );
        assert_eq!(
            TagRequest::common(0x1_0000).resolve().unwrap(),
            Tag::CommonProfile32(0x1_0000)
        );
    }

    #[test]
    fn resolves_fully_qualified_width_by_id_not_by_duplicated_arm() {
        // Regression for the source's duplicated `FullyQualified48` arm
        // (see design notes): the two cases must be told apart by the id
        // width, not by accidentally sharing one code path.
        assert_eq!(
            TagRequest::fully_qualified(1, 5).resolve().unwrap(),
            Tag::FullyQualified48 { profile: 1, id: 5 }
        );
        assert_eq!(
            TagRequest::fully_qualified(1, 0x1_0000).resolve().unwrap(),
            Tag::FullyQualified64 {
                profile: 1,
                id: 0x1_0000
            }
        );
    }
}
