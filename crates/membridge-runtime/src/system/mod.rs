//! Native memory sources and backend selection.
//!
//! Two backends exist, one per probe variant:
//!
//! - [`Backend::Device`]: device-wide available memory with a low-memory
//!   flag ([`SysinfoDeviceSource`] behind a `DeviceMemoryProbe`).
//! - [`Backend::Process`]: process-scoped headroom behind a version gate
//!   ([`CgroupProcessSource`] behind a `ProcessMemoryProbe`).
//!
//! The two report different things and are never substituted for one
//! another silently; `auto` picks the native one for the OS family.

mod device;
mod platform;
mod process;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use membridge_core::{
    DeviceMemoryProbe, MemoryProbePort, MemoryRequestDispatcher, MemoryScope,
    ProcessMemoryCapability, ProcessMemoryProbe, ProcessMemorySource,
};
use tracing::debug;

use crate::config::RuntimeConfig;

pub use device::SysinfoDeviceSource;
pub use platform::{kernel_release, linux_kernel_version, os_name, os_release};
pub use process::{CgroupProcessSource, MINIMUM_KERNEL_VERSION};

/// A concrete probe variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Device,
    Process,
}

impl Backend {
    /// Native backend for the OS family this binary was built for.
    ///
    /// Apple mobile targets expose a process-scoped API; every other family
    /// exposes device-wide memory info.
    pub const fn native() -> Self {
        if cfg!(any(
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "visionos"
        )) {
            Self::Process
        } else {
            Self::Device
        }
    }

    pub const fn scope(self) -> MemoryScope {
        match self {
            Self::Device => MemoryScope::Device,
            Self::Process => MemoryScope::Process,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device => f.write_str("device"),
            Self::Process => f.write_str("process"),
        }
    }
}

/// Backend selection as configured by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackendChoice {
    /// Use [`Backend::native`].
    #[default]
    Auto,
    Device,
    Process,
}

impl BackendChoice {
    pub const fn resolve(self) -> Backend {
        match self {
            Self::Auto => Backend::native(),
            Self::Device => Backend::Device,
            Self::Process => Backend::Process,
        }
    }
}

impl fmt::Display for BackendChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Device => f.write_str("device"),
            Self::Process => f.write_str("process"),
        }
    }
}

impl FromStr for BackendChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "device" => Ok(Self::Device),
            "process" => Ok(Self::Process),
            other => Err(format!(
                "unknown backend '{other}' (expected auto, device or process)"
            )),
        }
    }
}

/// Build the probe for the configured backend.
pub fn build_probe(config: &RuntimeConfig) -> Arc<dyn MemoryProbePort> {
    let backend = config.backend.resolve();
    debug!(%backend, choice = %config.backend, "building memory probe");

    match backend {
        Backend::Device => Arc::new(DeviceMemoryProbe::new(SysinfoDeviceSource::new(
            config.low_memory_ratio,
        ))),
        Backend::Process => Arc::new(ProcessMemoryProbe::new(CgroupProcessSource::new())),
    }
}

/// Build a dispatcher over the configured backend.
pub fn build_dispatcher(config: &RuntimeConfig) -> MemoryRequestDispatcher {
    MemoryRequestDispatcher::new(build_probe(config))
}

/// What this host supports, for diagnostics.
#[derive(Debug, Clone)]
pub struct PlatformReport {
    pub os_name: Option<String>,
    pub os_release: Option<String>,
    pub kernel_release: Option<String>,
    /// Backend `auto` resolves to here.
    pub native_backend: Backend,
    /// Whether the process-scoped backend can answer here.
    pub process_capability: ProcessMemoryCapability,
}

impl PlatformReport {
    /// Gather platform facts. Does not query memory.
    pub fn collect() -> Self {
        let source = CgroupProcessSource::new();
        Self {
            os_name: os_name(),
            os_release: os_release(),
            kernel_release: kernel_release(),
            native_backend: Backend::native(),
            process_capability: ProcessMemoryCapability::evaluate(
                &source.platform_name(),
                source.platform_version(),
                source.minimum_version(),
            ),
        }
    }
}
