//! Error handling for reconciliation and message encoding

use core::fmt;
use api::error::{Error as CoreError, Result as CoreResult};
use algorithms::error::Error as PrimitiveError;

/// Error type for reconciliation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Hint polynomial with a coefficient outside `{0, 1, 2, 3}`
    InvalidHint {
        /// Why the hint was rejected
        reason: &'static str,
    },
}

/// Result type for reconciliation operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidHint { reason } => write!(f, "Invalid reconciliation hint: {}", reason),
        }
    }
}

// Standard error trait
#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

// From PrimitiveError to Error
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidHint { reason } => CoreError::InvalidParameter {
                context: "reconciliation hint",
                message: reason.into(),
            },
        }
    }
}

/// Convert a reconciliation result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include validation submodule
pub mod validate;

// Re-export core error handling traits
pub use api::error::ResultExt;
