//! Raw readings and probe outcomes, before normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PlatformVersion;

/// One device-wide memory reading from the OS.
///
/// Mirrors what a device memory-info API hands back: the available figure,
/// the total, the threshold below which the OS considers memory low, and
/// the OS's own low-memory verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMemorySnapshot {
    /// Bytes available across the whole device.
    pub available_bytes: u64,
    /// Total physical memory in bytes.
    pub total_bytes: u64,
    /// Available-memory level at or below which `low_memory` is raised.
    pub threshold_bytes: u64,
    /// The OS considers the device to be in a low-memory state.
    pub low_memory: bool,
}

/// What a probe's numbers are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemoryScope {
    /// Memory available across the whole device.
    Device,
    /// Memory available to the calling process only.
    Process,
}

impl fmt::Display for MemoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device => f.write_str("device"),
            Self::Process => f.write_str("process"),
        }
    }
}

/// Raw result of one probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The OS reported this many bytes available.
    Measured(u64),
    /// The OS flagged low memory. `reported_bytes` is kept for logging only.
    LowMemory { reported_bytes: u64 },
    /// The query could not be answered on this platform.
    Unavailable(String),
}

/// Whether the process-scoped memory API can be called here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessMemoryCapability {
    /// The running platform version is new enough.
    Supported { version: PlatformVersion },
    /// The API must not be called; `reason` explains why.
    Unsupported { reason: String },
}

impl ProcessMemoryCapability {
    /// Decide support from the running platform version and the minimum
    /// version that ships the API.
    pub fn evaluate(
        platform: &str,
        running: Option<PlatformVersion>,
        minimum: PlatformVersion,
    ) -> Self {
        match running {
            Some(version) if version >= minimum => Self::Supported { version },
            Some(version) => Self::Unsupported {
                reason: format!(
                    "{platform} {minimum}+ required for process memory API (running {version})"
                ),
            },
            None => Self::Unsupported {
                reason: format!(
                    "{platform} {minimum}+ required for process memory API \
                     (platform version unknown)"
                ),
            },
        }
    }

    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Supported { .. })
    }
}
