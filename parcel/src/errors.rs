use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for catalog operations.
///
/// Record-level kinds (`MalformedRecord`, `OutOfRange`) are recoverable: the
/// loader skips the offending line and keeps going. I/O kinds are fatal to a
/// load but never to the catalog, which stays usable with whatever it holds.
///
/// # Examples
///
/// ```rust
/// use parcel::errors::{ErrorKind, ParcelError, ParcelResult};
///
/// fn example() -> ParcelResult<()> {
///     Err(ParcelError::new("weight 99 out of range", ErrorKind::OutOfRange))
/// }
/// assert!(example().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    // Record Errors
    /// A line does not carry three parsable fields
    MalformedRecord,
    /// A parsed field lies outside its accepted range
    OutOfRange,

    // Configuration Errors
    /// A configuration value was rejected
    InvalidConfiguration,

    // Lifecycle Errors
    /// The catalog has already been torn down
    CatalogClosed,

    // IO Errors
    /// Generic IO error
    IOError,
    /// The source file was not found
    FileNotFound,
    /// Permission denied opening the source file
    PermissionDenied,

    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::MalformedRecord => write!(f, "Malformed record"),
            ErrorKind::OutOfRange => write!(f, "Out of range"),
            ErrorKind::InvalidConfiguration => write!(f, "Invalid configuration"),
            ErrorKind::CatalogClosed => write!(f, "Catalog closed"),
            ErrorKind::IOError => write!(f, "IO error"),
            ErrorKind::FileNotFound => write!(f, "File not found"),
            ErrorKind::PermissionDenied => write!(f, "Permission denied"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Catalog error type.
///
/// Carries a message, an [`ErrorKind`], an optional cause and the backtrace
/// captured where the error was raised.
///
/// ```rust
/// use parcel::errors::{ErrorKind, ParcelError};
///
/// let cause = ParcelError::new("disk unplugged", ErrorKind::IOError);
/// let err = ParcelError::new_with_cause("load failed", ErrorKind::IOError, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct ParcelError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<ParcelError>>,
    backtrace: Atomic<Backtrace>,
}

impl ParcelError {
    /// Creates a new `ParcelError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        ParcelError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `ParcelError` chained onto `cause`.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: ParcelError) -> Self {
        ParcelError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.error_kind
    }

    pub fn cause(&self) -> Option<&ParcelError> {
        self.cause.as_deref()
    }
}

impl Display for ParcelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for ParcelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // message with stack trace, or message followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for ParcelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for catalog operations.
pub type ParcelResult<T> = Result<T, ParcelError>;

impl From<std::io::Error> for ParcelError {
    fn from(err: std::io::Error) -> Self {
        let error_kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IOError,
        };
        ParcelError::new(&format!("IO error: {}", err), error_kind)
    }
}

impl From<std::num::ParseIntError> for ParcelError {
    fn from(err: std::num::ParseIntError) -> Self {
        ParcelError::new(
            &format!("Integer parsing error: {}", err),
            ErrorKind::MalformedRecord,
        )
    }
}

impl From<std::num::ParseFloatError> for ParcelError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ParcelError::new(
            &format!("Float parsing error: {}", err),
            ErrorKind::MalformedRecord,
        )
    }
}

impl From<String> for ParcelError {
    fn from(msg: String) -> Self {
        ParcelError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for ParcelError {
    fn from(msg: &str) -> Self {
        ParcelError::new(msg, ErrorKind::InternalError)
    }
}
