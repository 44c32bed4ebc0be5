//! Error types.

use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Error {
    /// Kind of error.
    kind: ErrorKind,

    /// Cursor position where the error occurred.
    position: usize,
}

impl Error {
    /// Create a new [`Error`] at the given cursor position.
    pub fn new(kind: ErrorKind, position: usize) -> Error {
        Error { kind, position }
    }

    /// Get the [`ErrorKind`] which occurred.
    pub fn kind(self) -> ErrorKind {
        self.kind
    }

    /// Get the cursor position where the error occurred.
    pub fn position(self) -> usize {
        self.position
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.position)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Kind of error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Attempted to read or write past the end of the buffer.
    Truncated,

    /// Bytes did not form valid UTF-8.
    BadEncoding,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Truncated => write!(f, "buffer truncated"),
            ErrorKind::BadEncoding => write!(f, "invalid UTF-8 encoding"),
        }
    }
}
