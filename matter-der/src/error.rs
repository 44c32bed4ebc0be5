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

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at DER byte {}", self.kind, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Kind of error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed DER: non-canonical length, unknown constructed tag, or
    /// otherwise structurally invalid encoding.
    BadDer,

    /// Input ended before a declared length could be satisfied.
    Truncated,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::BadDer => write!(f, "malformed DER"),
            ErrorKind::Truncated => write!(f, "DER input truncated"),
        }
    }
}
