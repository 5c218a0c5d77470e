//! Error types for the configuration boundary.
//!
//! Sampling itself never fails: degenerate parameters are clamped and
//! exhausted budgets truncate the output. Errors only arise when a curve
//! configuration is read from untyped input.

use thiserror::Error;

/// Errors that can occur while reading a curve configuration.
#[derive(Debug, Error)]
pub enum GuillocheError {
    /// The method name does not match any curve family.
    #[error("unknown method {0:?}")]
    UnknownMethod(String),

    /// The parameters do not fit the selected family.
    #[error("invalid parameters for {method}: {source}")]
    InvalidParams {
        /// Method the parameters were checked against.
        method: String,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
