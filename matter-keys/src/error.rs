//! Error types.

use alloc::string::String;
use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    field: Option<String>,
}

impl Error {
    /// Create a new [`Error`] with no field context.
    pub fn new(kind: ErrorKind) -> Error {
        Error { kind, field: None }
    }

    /// Create a new [`Error`] naming the field it occurred on.
    pub fn on_field(kind: ErrorKind, field: &str) -> Error {
        Error {
            kind,
            field: Some(String::from(field)),
        }
    }

    /// Get the [`ErrorKind`] which occurred.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the field name this error occurred on, if any.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl From<matter_der::Error> for Error {
    fn from(err: matter_der::Error) -> Error {
        let _ = err;
        Error::new(ErrorKind::BadFormat)
    }
}

impl From<matter_b64::Error> for Error {
    fn from(err: matter_b64::Error) -> Error {
        let _ = err;
        Error::new(ErrorKind::BadFormat)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} (field {field})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Kind of error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A SEC1 key's version INTEGER was not 1.
    BadVersion,
    /// A PKCS#8 `AlgorithmIdentifier` named an algorithm other than `ecPublicKey`.
    UnsupportedAlgorithm,
    /// A curve OID, or an inferred coordinate length, did not match any
    /// supported curve.
    UnknownCurve,
    /// A raw public point used point compression, which this layer does
    /// not support.
    UnsupportedCompression,
    /// Input bytes were structurally invalid for the format being parsed.
    BadFormat,
    /// An asserted accessor was read before its underlying field was set.
    MissingField,
    /// An externally-supplied private scalar was rejected by the EC provider.
    BadScalar,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::BadVersion => write!(f, "unsupported key version"),
            ErrorKind::UnsupportedAlgorithm => write!(f, "unsupported algorithm identifier"),
            ErrorKind::UnknownCurve => write!(f, "unrecognized elliptic curve"),
            ErrorKind::UnsupportedCompression => write!(f, "compressed public points are not supported"),
            ErrorKind::BadFormat => write!(f, "malformed key encoding"),
            ErrorKind::MissingField => write!(f, "required key field is not set"),
            ErrorKind::BadScalar => write!(f, "private scalar rejected by EC provider"),
        }
    }
}
