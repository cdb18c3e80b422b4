//! Error types for pagetree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagetree.
///
/// The taxonomy is deliberately narrow. A search miss or a cache miss is
/// not an error: both are reported as `None`. The only failure is a bad
/// configuration, and it is reported when the component is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction parameter is out of range (e.g. a zero capacity).
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`].
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
