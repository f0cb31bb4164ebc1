//! Method-call and response codec.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ProtocolError;
use crate::domain::MemoryQueryResult;

/// Error code for a query the platform cannot answer.
pub const ERROR_CODE_UNAVAILABLE: &str = "UNAVAILABLE";

/// Legacy success value meaning "critical / low memory".
pub const LEGACY_CRITICAL_SENTINEL: i64 = -1;

/// A named call arriving on the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// A call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Legacy response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MethodResponse {
    /// Non-negative bytes, or `-1` for critical.
    Success { value: i64 },
    /// Structured error with a stable code.
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    /// The method is not handled on this channel.
    NotImplemented,
}

impl MethodResponse {
    /// Parse a legacy response received from a native host.
    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Which response shape to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseEncoding {
    /// Signed integer with the `-1` sentinel.
    #[default]
    Legacy,
    /// Tagged [`MemoryQueryResult`].
    Typed,
}

impl ResponseEncoding {
    pub fn encode(self, result: MemoryQueryResult) -> EncodedResponse {
        match self {
            Self::Legacy => EncodedResponse::Legacy(encode_legacy(&result)),
            Self::Typed => EncodedResponse::Typed(result),
        }
    }
}

/// A response ready for the wire, in either encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EncodedResponse {
    Legacy(MethodResponse),
    Typed(MemoryQueryResult),
}

impl EncodedResponse {
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Encode a result in the legacy shape.
///
/// Byte counts above `i64::MAX` saturate rather than wrap into the
/// negative range.
pub fn encode_legacy(result: &MemoryQueryResult) -> MethodResponse {
    match result {
        MemoryQueryResult::Available { bytes } => MethodResponse::Success {
            value: i64::try_from(*bytes).unwrap_or(i64::MAX),
        },
        MemoryQueryResult::Critical => MethodResponse::Success {
            value: LEGACY_CRITICAL_SENTINEL,
        },
        MemoryQueryResult::Unsupported { reason } => MethodResponse::Error {
            code: ERROR_CODE_UNAVAILABLE.to_string(),
            message: reason.clone(),
            details: None,
        },
        MemoryQueryResult::UnknownRequest { .. } => MethodResponse::NotImplemented,
    }
}

/// Decode a legacy response for a call to `method`.
///
/// Only exactly `-1` decodes as critical. Any other negative value is a
/// protocol error, so a future native change that leaks a negative number
/// is surfaced instead of being read as low memory.
pub fn decode_legacy(
    method: &str,
    response: &MethodResponse,
) -> Result<MemoryQueryResult, ProtocolError> {
    match response {
        MethodResponse::Success {
            value: LEGACY_CRITICAL_SENTINEL,
        } => Ok(MemoryQueryResult::Critical),
        MethodResponse::Success { value } => u64::try_from(*value)
            .map(|bytes| MemoryQueryResult::Available { bytes })
            .map_err(|_| ProtocolError::UnexpectedNegative(*value)),
        MethodResponse::Error { code, message, .. } if code == ERROR_CODE_UNAVAILABLE => {
            Ok(MemoryQueryResult::unsupported(message.clone()))
        }
        MethodResponse::Error { code, message, .. } => Err(ProtocolError::UnknownErrorCode {
            code: code.clone(),
            message: message.clone(),
        }),
        MethodResponse::NotImplemented => Ok(MemoryQueryResult::UnknownRequest {
            method: method.to_string(),
        }),
    }
}
