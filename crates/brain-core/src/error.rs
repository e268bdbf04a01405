//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid range [{min}, {max}]: min must not exceed max")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid duration {0}: must be finite and non-negative")]
    InvalidDuration(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `brain-core`.
pub type CoreResult<T> = Result<T, CoreError>;
