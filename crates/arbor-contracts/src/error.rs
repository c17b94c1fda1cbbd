//! Error types for the arbor crates.
//!
//! Graph mutation and resolution are infallible. Errors only arise at the
//! surfaces that accept names from outside: the TOML loader and the flat
//! section façade.

use thiserror::Error;

/// The unified error type for the arbor crates.
#[derive(Debug, Error)]
pub enum ArborError {
    /// A policy document could not be read or parsed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A name referred to an entity that was never declared.
    #[error("unknown entity '{id}'")]
    UnknownEntity { id: String },

    /// A name referred to a resource that was never declared.
    #[error("unknown resource '{id}'")]
    UnknownResource { id: String },

    /// Two nodes of the same kind were declared under one id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// A permission string did not name any known action.
    #[error("unknown permission '{value}'")]
    UnknownPermission { value: String },
}

/// Convenience alias used throughout the arbor crates.
pub type ArborResult<T> = Result<T, ArborError>;
