//! Protocol decoding errors.

use thiserror::Error;

/// Errors raised while decoding wire messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A legacy success value was negative but not the critical sentinel.
    #[error("Unexpected negative memory value {0}: only -1 signals critical memory")]
    UnexpectedNegative(i64),

    /// A legacy error carried a code this bridge never emits.
    #[error("Unknown error code {code}: {message}")]
    UnknownErrorCode { code: String, message: String },

    /// The message was not valid JSON for the expected shape.
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}
