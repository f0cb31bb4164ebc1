//! The normalized outcome of a memory query.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized result returned by the dispatcher for every call.
///
/// Exactly one variant is populated. `Critical` carries no byte count, so a
/// low-memory signal can never be mistaken for a small measurement.
///
/// The typed wire form is internally tagged by `status`:
///
/// ```json
/// {"status": "available", "bytes": 524288000}
/// {"status": "critical"}
/// {"status": "unsupported", "reason": "..."}
/// {"status": "unknownRequest", "method": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MemoryQueryResult {
    /// Bytes currently available. Scope (device or process) depends on the
    /// probe that produced it.
    Available { bytes: u64 },
    /// The OS reports a low-memory condition.
    Critical,
    /// The platform or OS version cannot answer the query.
    Unsupported { reason: String },
    /// The dispatcher did not recognize the requested method.
    UnknownRequest { method: String },
}

/// Variant discriminant of a [`MemoryQueryResult`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Available,
    Critical,
    Unsupported,
    UnknownRequest,
}

impl MemoryQueryResult {
    /// Build an `Unsupported` result.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }

    /// Byte count, only for `Available`.
    pub const fn available_bytes(&self) -> Option<u64> {
        match self {
            Self::Available { bytes } => Some(*bytes),
            _ => None,
        }
    }

    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }

    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::Available { .. } => ResultKind::Available,
            Self::Critical => ResultKind::Critical,
            Self::Unsupported { .. } => ResultKind::Unsupported,
            Self::UnknownRequest { .. } => ResultKind::UnknownRequest,
        }
    }
}

impl fmt::Display for MemoryQueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { bytes } => write!(f, "available: {bytes} bytes"),
            Self::Critical => f.write_str("critical: low memory reported by the OS"),
            Self::Unsupported { reason } => write!(f, "unsupported: {reason}"),
            Self::UnknownRequest { method } => write!(f, "unknown request: {method}"),
        }
    }
}
