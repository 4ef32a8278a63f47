//! Error types for engine construction.
//!
//! Runtime scheduling never surfaces errors to callers; these cover
//! configuration and catalog validation only.

use thiserror::Error;

/// Errors produced while building the reaction engine or its catalog.
#[derive(Debug, Error)]
pub enum ReactionError {
    /// Engine configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// An emotion state definition is malformed.
    #[error("invalid emotion `{id}`: {reason}")]
    InvalidEmotion {
        /// Offending emotion id.
        id: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Two emotion states share the same id.
    #[error("duplicate emotion id: {0}")]
    DuplicateEmotion(String),
    /// Input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
