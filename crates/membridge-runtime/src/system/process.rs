//! Process-scoped memory source backed by the cgroup memory controller.
//!
//! The headroom left under the process's cgroup memory limit is the
//! figure the kernel will actually let this process allocate, which makes
//! it process-scoped rather than device-wide.

use membridge_core::{
    MemorySourceError, MemorySourceResult, PlatformVersion, ProcessMemorySource,
};
use sysinfo::System;
use tracing::debug;

use super::platform::linux_kernel_version;

/// First kernel release with the unified cgroup memory controller.
pub const MINIMUM_KERNEL_VERSION: PlatformVersion = PlatformVersion::new(4, 5, 0);

/// [`ProcessMemorySource`] reading cgroup limits through `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CgroupProcessSource;

impl CgroupProcessSource {
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessMemorySource for CgroupProcessSource {
    fn platform_name(&self) -> String {
        "Linux".to_string()
    }

    fn platform_version(&self) -> Option<PlatformVersion> {
        linux_kernel_version()
    }

    fn minimum_version(&self) -> PlatformVersion {
        MINIMUM_KERNEL_VERSION
    }

    fn available_process_memory(&self) -> MemorySourceResult<u64> {
        let mut sys = System::new();
        sys.refresh_memory();

        let limits = sys.cgroup_limits().ok_or_else(|| {
            MemorySourceError::NotExposed(
                "no cgroup memory limit applies to this process".to_string(),
            )
        })?;
        debug!(
            limit = limits.total_memory,
            free = limits.free_memory,
            "cgroup memory limits"
        );
        Ok(limits.free_memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use membridge_core::{MemoryProbePort, ProbeOutcome, ProcessMemoryProbe};

    #[test]
    fn test_source_identity() {
        let source = CgroupProcessSource::new();
        assert_eq!(source.platform_name(), "Linux");
        assert_eq!(source.minimum_version(), PlatformVersion::new(4, 5, 0));
    }

    #[test]
    fn test_live_probe_never_panics() {
        let probe = ProcessMemoryProbe::new(CgroupProcessSource::new());
        // Depending on the host this is a measurement or a reasoned refusal
        match probe.probe() {
            ProbeOutcome::Measured(_) => assert!(probe.capability().is_supported()),
            ProbeOutcome::Unavailable(reason) => assert!(!reason.is_empty()),
            ProbeOutcome::LowMemory { .. } => panic!("process probe never reports low memory"),
        }
    }
}
