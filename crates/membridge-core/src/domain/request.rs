//! Named requests accepted by the dispatcher.

use std::fmt;
use std::str::FromStr;

/// An operation the application layer can ask the bridge to perform.
///
/// There is exactly one today. Unrecognized method names never become a
/// `MemoryQueryRequest`; the dispatcher reports them as
/// [`MemoryQueryResult::UnknownRequest`](super::MemoryQueryResult::UnknownRequest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryQueryRequest {
    /// Query the bytes currently available (`getAvailableMemory`).
    GetAvailableMemory,
}

impl MemoryQueryRequest {
    /// Every request the bridge understands.
    pub const ALL: [Self; 1] = [Self::GetAvailableMemory];

    /// Wire name of this request.
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::GetAvailableMemory => "getAvailableMemory",
        }
    }

    /// Resolve a wire method name. Matching is exact and case-sensitive.
    pub fn from_method(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|req| req.method_name() == name)
    }
}

impl fmt::Display for MemoryQueryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

impl FromStr for MemoryQueryRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_method(s).ok_or_else(|| format!("unknown method: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_name_roundtrip() {
        for req in MemoryQueryRequest::ALL {
            assert_eq!(MemoryQueryRequest::from_method(req.method_name()), Some(req));
        }
    }

    #[test]
    fn test_from_method_is_case_sensitive() {
        assert_eq!(MemoryQueryRequest::from_method("getavailablememory"), None);
        assert_eq!(MemoryQueryRequest::from_method(" getAvailableMemory"), None);
        assert_eq!(MemoryQueryRequest::from_method(""), None);
    }

    #[test]
    fn test_from_str_error_names_method() {
        let err = "unknownOp".parse::<MemoryQueryRequest>().unwrap_err();
        assert!(err.contains("unknownOp"));
    }
}
