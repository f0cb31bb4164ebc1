//! Native memory source ports.
//!
//! A source wraps exactly one OS memory API. Sources report what the OS
//! said, or a [`MemorySourceError`]; the probes in
//! [`services::probes`](crate::services) decide what that means.

use thiserror::Error;

use crate::domain::{DeviceMemorySnapshot, PlatformVersion};

/// Errors raised by a native memory source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemorySourceError {
    /// The OS call ran but returned an unusable answer.
    #[error("Memory query failed: {0}")]
    QueryFailed(String),

    /// The OS does not expose this figure in the current environment.
    #[error("Memory figure not exposed: {0}")]
    NotExposed(String),
}

/// Result type for native memory source operations.
pub type MemorySourceResult<T> = Result<T, MemorySourceError>;

/// Device-wide memory-info API.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceMemorySource: Send + Sync {
    /// Take one memory-info snapshot.
    fn memory_info(&self) -> MemorySourceResult<DeviceMemorySnapshot>;
}

/// Process-scoped available-memory API, gated on the platform version.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessMemorySource: Send + Sync {
    /// Human-readable platform family name used in diagnostics (e.g. "Linux").
    fn platform_name(&self) -> String;

    /// Version of the running platform, if it can be determined.
    fn platform_version(&self) -> Option<PlatformVersion>;

    /// Oldest platform version that ships the process-scoped API.
    fn minimum_version(&self) -> PlatformVersion;

    /// Bytes available to the calling process.
    ///
    /// Callers must only invoke this after confirming that
    /// `platform_version() >= minimum_version()`.
    fn available_process_memory(&self) -> MemorySourceResult<u64>;
}
