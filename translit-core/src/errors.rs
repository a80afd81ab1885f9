//! errors.rs - Custom error types for the translit-core library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// Errors produced while loading a rule table from an untrusted payload.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// The payload evaluated, but the value bound under the expected name
    /// was missing or not an ordered sequence.
    #[error("rule payload did not bind an array under '{0}'")]
    InvalidShape(String),

    /// Evaluation of the payload threw inside the sandbox. The cause is the
    /// stringified exception, reported for diagnostics only.
    #[error("rule payload evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The sandboxed runtime or context could not be constructed.
    #[error("failed to set up evaluation sandbox: {0}")]
    Sandbox(String),
}
