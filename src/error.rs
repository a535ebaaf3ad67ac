//! Unified error type.

use std::fmt;

use crate::handler::HandlerId;
use crate::method::Method;

/// The error type returned by layouts' fallible operations.
///
/// A request that matches no route is not an error: the server answers it
/// with `404 Not Found`. This type covers configuration mistakes, which are
/// fatal at startup, and I/O failures while binding or accepting.
#[derive(Debug)]
pub enum Error {
    /// Binding or accepting on the listening socket failed.
    Io(std::io::Error),
    /// The same method + path pair was registered twice.
    DuplicateRoute { method: Method, path: String },
    /// The path is not a usable route pattern.
    InvalidRoute { path: String, reason: String },
    /// A route points at a handler that no controller provides.
    MissingAction(HandlerId),
    /// A handler identifier is not of the form `controller#action`.
    InvalidHandlerId(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::DuplicateRoute { method, path } => {
                write!(f, "duplicate route `{method} {path}`")
            }
            Self::InvalidRoute { path, reason } => write!(f, "invalid route `{path}`: {reason}"),
            Self::MissingAction(id) => write!(f, "no action registered for `{id}`"),
            Self::InvalidHandlerId(s) => {
                write!(f, "invalid handler `{s}`, expected `controller#action`")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
