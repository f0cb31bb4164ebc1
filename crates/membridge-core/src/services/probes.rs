//! Probe variants.
//!
//! - [`DeviceMemoryProbe`] reads a device-wide snapshot and honors the OS
//!   low-memory flag.
//! - [`ProcessMemoryProbe`] reads process-scoped headroom behind a version
//!   gate and reports the number as-is.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::domain::{MemoryScope, ProbeOutcome, ProcessMemoryCapability};
use crate::ports::{DeviceMemorySource, MemoryProbePort, ProcessMemorySource};

/// Device-wide probe over a memory-info snapshot API.
pub struct DeviceMemoryProbe<S> {
    source: S,
}

impl<S: DeviceMemorySource> DeviceMemoryProbe<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: DeviceMemorySource> MemoryProbePort for DeviceMemoryProbe<S> {
    fn scope(&self) -> MemoryScope {
        MemoryScope::Device
    }

    fn probe(&self) -> ProbeOutcome {
        match self.source.memory_info() {
            Ok(info) if info.low_memory => {
                debug!(
                    available = info.available_bytes,
                    threshold = info.threshold_bytes,
                    "OS reports low memory"
                );
                ProbeOutcome::LowMemory {
                    reported_bytes: info.available_bytes,
                }
            }
            Ok(info) => ProbeOutcome::Measured(info.available_bytes),
            Err(e) => {
                warn!("device memory query failed: {e}");
                ProbeOutcome::Unavailable(e.to_string())
            }
        }
    }
}

/// Process-scoped probe with an explicit capability check.
///
/// The capability is evaluated on first use and cached for the life of the
/// probe. When it is unsupported the native API is never touched.
pub struct ProcessMemoryProbe<S> {
    source: S,
    capability: OnceLock<ProcessMemoryCapability>,
}

impl<S: ProcessMemorySource> ProcessMemoryProbe<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            capability: OnceLock::new(),
        }
    }

    /// Capability of the running platform, evaluated once.
    pub fn capability(&self) -> &ProcessMemoryCapability {
        self.capability.get_or_init(|| {
            let capability = ProcessMemoryCapability::evaluate(
                &self.source.platform_name(),
                self.source.platform_version(),
                self.source.minimum_version(),
            );
            debug!(?capability, "process memory capability evaluated");
            capability
        })
    }
}

impl<S: ProcessMemorySource> MemoryProbePort for ProcessMemoryProbe<S> {
    fn scope(&self) -> MemoryScope {
        MemoryScope::Process
    }

    fn probe(&self) -> ProbeOutcome {
        match self.capability() {
            ProcessMemoryCapability::Supported { .. } => {
                match self.source.available_process_memory() {
                    // No remapping of small numbers: the OS gave no flag.
                    Ok(bytes) => ProbeOutcome::Measured(bytes),
                    Err(e) => {
                        warn!("process memory query failed: {e}");
                        ProbeOutcome::Unavailable(e.to_string())
                    }
                }
            }
            ProcessMemoryCapability::Unsupported { reason } => {
                ProbeOutcome::Unavailable(reason.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeviceMemorySnapshot, PlatformVersion};
    use crate::ports::{MemorySourceError, MockDeviceMemorySource, MockProcessMemorySource};

    fn snapshot(available: u64, low: bool) -> DeviceMemorySnapshot {
        DeviceMemorySnapshot {
            available_bytes: available,
            total_bytes: 8 * 1024 * 1024 * 1024,
            threshold_bytes: 256 * 1024 * 1024,
            low_memory: low,
        }
    }

    fn process_source(running: Option<PlatformVersion>) -> MockProcessMemorySource {
        let mut source = MockProcessMemorySource::new();
        source
            .expect_platform_name()
            .returning(|| "iOS".to_string());
        source.expect_platform_version().return_const(running);
        source
            .expect_minimum_version()
            .return_const(PlatformVersion::new(13, 0, 0));
        source
    }

    #[test]
    fn test_device_low_memory_wins_over_number() {
        let mut source = MockDeviceMemorySource::new();
        source
            .expect_memory_info()
            .returning(|| Ok(snapshot(6 * 1024 * 1024 * 1024, true)));

        let probe = DeviceMemoryProbe::new(source);
        assert_eq!(
            probe.probe(),
            ProbeOutcome::LowMemory {
                reported_bytes: 6 * 1024 * 1024 * 1024
            }
        );
    }

    #[test]
    fn test_device_reports_available_unmodified() {
        let mut source = MockDeviceMemorySource::new();
        source
            .expect_memory_info()
            .returning(|| Ok(snapshot(524_288_000, false)));

        let probe = DeviceMemoryProbe::new(source);
        assert_eq!(probe.scope(), MemoryScope::Device);
        assert_eq!(probe.probe(), ProbeOutcome::Measured(524_288_000));
    }

    #[test]
    fn test_device_native_failure_is_unavailable() {
        let mut source = MockDeviceMemorySource::new();
        source
            .expect_memory_info()
            .returning(|| Err(MemorySourceError::QueryFailed("total memory is zero".into())));

        let probe = DeviceMemoryProbe::new(source);
        match probe.probe() {
            ProbeOutcome::Unavailable(reason) => assert!(reason.contains("total memory is zero")),
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_process_unsupported_never_calls_api() {
        let mut source = process_source(Some(PlatformVersion::new(12, 5, 7)));
        source.expect_available_process_memory().times(0);

        let probe = ProcessMemoryProbe::new(source);
        match probe.probe() {
            ProbeOutcome::Unavailable(reason) => {
                assert!(!reason.is_empty());
                assert!(reason.contains("13.0.0+"));
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_process_supported_reports_bytes() {
        let mut source = process_source(Some(PlatformVersion::new(17, 4, 1)));
        source
            .expect_available_process_memory()
            .times(1)
            .returning(|| Ok(1_073_741_824));

        let probe = ProcessMemoryProbe::new(source);
        assert_eq!(probe.scope(), MemoryScope::Process);
        assert_eq!(probe.probe(), ProbeOutcome::Measured(1_073_741_824));
    }

    #[test]
    fn test_process_small_number_is_not_critical() {
        let mut source = process_source(Some(PlatformVersion::new(13, 0, 0)));
        source
            .expect_available_process_memory()
            .returning(|| Ok(4096));

        let probe = ProcessMemoryProbe::new(source);
        assert_eq!(probe.probe(), ProbeOutcome::Measured(4096));
    }

    #[test]
    fn test_process_capability_evaluated_once() {
        let mut source = MockProcessMemorySource::new();
        source
            .expect_platform_name()
            .times(1)
            .returning(|| "Linux".to_string());
        source
            .expect_platform_version()
            .times(1)
            .return_const(Some(PlatformVersion::new(6, 1, 0)));
        source
            .expect_minimum_version()
            .times(1)
            .return_const(PlatformVersion::new(4, 5, 0));
        source
            .expect_available_process_memory()
            .times(3)
            .returning(|| Ok(2048));

        let probe = ProcessMemoryProbe::new(source);
        for _ in 0..3 {
            assert_eq!(probe.probe(), ProbeOutcome::Measured(2048));
        }
        assert!(probe.capability().is_supported());
    }

    #[test]
    fn test_process_native_failure_is_unavailable() {
        let mut source = process_source(Some(PlatformVersion::new(6, 1, 0)));
        source
            .expect_available_process_memory()
            .returning(|| Err(MemorySourceError::NotExposed("no cgroup memory limit".into())));

        let probe = ProcessMemoryProbe::new(source);
        assert!(matches!(probe.probe(), ProbeOutcome::Unavailable(_)));
    }
}
