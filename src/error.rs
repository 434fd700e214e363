//! Error types for the Nebula3D shader composer
//!
//! This module defines the error types used throughout the crate,
//! covering backend compilation failures and composer usage errors.

use std::fmt;

/// Result type for shader composition operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shader composition errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (shader compilation/link failure, poisoned
    /// compiler lock, etc.), carrying the backend's diagnostic text
    BackendError(String),

    /// Insertion or removal index outside the bounds of a fragment sequence
    IndexOutOfRange(String),

    /// Operation requires a composed shader program but none exists yet
    ShaderNotComposed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::IndexOutOfRange(msg) => write!(f, "Index out of range: {}", msg),
            Error::ShaderNotComposed(msg) => write!(f, "Shader not composed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR CONSTRUCTION MACROS =====

/// Build an [`Error`] of the given variant, logging it through the
/// engine logger before returning it as a value.
///
/// # Example
///
/// ```ignore
/// let err = engine_err!(IndexOutOfRange, "nebula3d::Effect",
///     "removal index {} out of range", index);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::nebula3d::Error::$variant(message)
    }};
}

/// Early-return an `Err` built with [`engine_err!`].
///
/// # Example
///
/// ```ignore
/// if index > sequence.len() {
///     engine_bail!(IndexOutOfRange, "nebula3d::Effect",
///         "insertion index {} out of range", index);
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($variant, $source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
