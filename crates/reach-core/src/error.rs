//! Configuration error type.
//!
//! Sub-crates define their own error enums and convert `ConfigError` into
//! them via `#[from]` impls, keeping error sites clean.

use thiserror::Error;

/// A rejected run configuration.  Always fatal, always raised before any
/// work is dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{what} must be positive (got 0)")]
    ZeroDimension { what: &'static str },

    #[error("worker count must be positive (got 0)")]
    ZeroWorkers,
}

/// Shorthand result type for `reach-core`.
pub type CoreResult<T> = Result<T, ConfigError>;
