//! Device-wide memory source backed by `sysinfo`.
//!
//! Desktop kernels publish an available-memory figure but no boolean
//! low-memory flag, so the flag is derived the way a mobile memory-info API
//! does it: low when available memory is at or below a threshold derived
//! from total memory.

use membridge_core::{
    DeviceMemorySnapshot, DeviceMemorySource, MemorySourceError, MemorySourceResult,
};
use sysinfo::System;
use tracing::debug;

/// [`DeviceMemorySource`] reading `sysinfo`'s available and total memory.
#[derive(Debug, Clone, Copy)]
pub struct SysinfoDeviceSource {
    low_memory_ratio: f64,
}

impl SysinfoDeviceSource {
    /// Create a source with the given low-memory ratio, clamped to `[0, 1]`.
    pub fn new(low_memory_ratio: f64) -> Self {
        let low_memory_ratio = if low_memory_ratio.is_nan() {
            0.0
        } else {
            low_memory_ratio.clamp(0.0, 1.0)
        };
        Self { low_memory_ratio }
    }

    pub const fn low_memory_ratio(&self) -> f64 {
        self.low_memory_ratio
    }
}

impl DeviceMemorySource for SysinfoDeviceSource {
    fn memory_info(&self) -> MemorySourceResult<DeviceMemorySnapshot> {
        let mut sys = System::new();
        sys.refresh_memory();
        let snapshot = build_snapshot(
            sys.available_memory(),
            sys.total_memory(),
            self.low_memory_ratio,
        )?;
        debug!(?snapshot, "device memory snapshot");
        Ok(snapshot)
    }
}

/// Assemble a snapshot from raw figures.
///
/// A zero total means the platform gave no usable reading.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn build_snapshot(
    available_bytes: u64,
    total_bytes: u64,
    low_memory_ratio: f64,
) -> MemorySourceResult<DeviceMemorySnapshot> {
    if total_bytes == 0 {
        return Err(MemorySourceError::QueryFailed(
            "total memory reported as zero".to_string(),
        ));
    }

    let threshold_bytes = (total_bytes as f64 * low_memory_ratio) as u64;

    Ok(DeviceMemorySnapshot {
        available_bytes,
        total_bytes,
        threshold_bytes,
        low_memory: available_bytes <= threshold_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_low_memory_at_threshold() {
        let snapshot = build_snapshot(GIB / 2, 10 * GIB, 0.05).unwrap();
        assert_eq!(snapshot.threshold_bytes, GIB / 2);
        assert!(snapshot.low_memory);
    }

    #[test]
    fn test_not_low_above_threshold() {
        let snapshot = build_snapshot(4 * GIB, 16 * GIB, 0.05).unwrap();
        assert!(!snapshot.low_memory);
        assert_eq!(snapshot.available_bytes, 4 * GIB);
        assert_eq!(snapshot.total_bytes, 16 * GIB);
    }

    #[test]
    fn test_zero_ratio_only_flags_exhaustion() {
        assert!(!build_snapshot(1, GIB, 0.0).unwrap().low_memory);
        assert!(build_snapshot(0, GIB, 0.0).unwrap().low_memory);
    }

    #[test]
    fn test_zero_total_is_failure() {
        assert!(matches!(
            build_snapshot(0, 0, 0.05),
            Err(MemorySourceError::QueryFailed(_))
        ));
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert!((SysinfoDeviceSource::new(7.0).low_memory_ratio() - 1.0).abs() < f64::EPSILON);
        assert!(SysinfoDeviceSource::new(-1.0).low_memory_ratio().abs() < f64::EPSILON);
        assert!(SysinfoDeviceSource::new(f64::NAN).low_memory_ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn test_live_snapshot_has_total() {
        let snapshot = SysinfoDeviceSource::new(0.05).memory_info().unwrap();
        // RAM should always be > 100MB on any test host
        assert!(snapshot.total_bytes > 100_000_000);
    }
}
