//! Error types.

use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    position: usize,
}

impl Error {
    /// Create a new [`Error`] at the given byte offset.
    pub fn new(kind: ErrorKind, position: usize) -> Error {
        Error { kind, position }
    }

    /// Get the [`ErrorKind`] which occurred.
    pub fn kind(self) -> ErrorKind {
        self.kind
    }

    /// Get the byte offset where the error occurred.
    pub fn position(self) -> usize {
        self.position
    }
}

impl From<matter_io::Error> for Error {
    fn from(err: matter_io::Error) -> Error {
        let kind = match err.kind() {
            matter_io::ErrorKind::Truncated => ErrorKind::Truncated,
            matter_io::ErrorKind::BadEncoding => ErrorKind::UnexpectedType,
        };
        Error::new(kind, err.position())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at TLV byte {}", self.kind, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Kind of error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Reader ran out of bytes before a declared field could be read.
    Truncated,

    /// A tag did not fit the requested width, or an unrecognized control
    /// byte was encountered.
    BadTag,

    /// An implicit-profile tag was decoded; no implicit-profile dictionary
    /// is defined at this layer.
    UnsupportedProfile,

    /// A primitive's payload did not match its declared type (e.g.
    /// malformed UTF-8 in a string element).
    UnexpectedType,

    /// An integer value did not fit the declared length class during
    /// encode.
    Overflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Truncated => write!(f, "TLV input truncated"),
            ErrorKind::BadTag => write!(f, "invalid TLV tag"),
            ErrorKind::UnsupportedProfile => write!(f, "unsupported implicit-profile tag"),
            ErrorKind::UnexpectedType => write!(f, "unexpected TLV element type"),
            ErrorKind::Overflow => write!(f, "integer value overflows declared length class"),
        }
    }
}
