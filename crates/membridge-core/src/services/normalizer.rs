//! Response normalizer.
//!
//! Unifies the result *shape* of both probe variants. Magnitudes stay
//! platform-dependent: a device-wide figure and a process-scoped figure are
//! never made comparable here.

use crate::domain::{MemoryQueryResult, ProbeOutcome};

const GENERIC_UNAVAILABLE_REASON: &str = "memory information is not available on this platform";

/// Convert a raw probe outcome into the canonical result.
///
/// `LowMemory` always becomes [`MemoryQueryResult::Critical`]; the number
/// the OS reported alongside the flag is dropped.
pub fn normalize(outcome: ProbeOutcome) -> MemoryQueryResult {
    match outcome {
        ProbeOutcome::Measured(bytes) => MemoryQueryResult::Available { bytes },
        ProbeOutcome::LowMemory { .. } => MemoryQueryResult::Critical,
        ProbeOutcome::Unavailable(reason) if reason.trim().is_empty() => {
            MemoryQueryResult::unsupported(GENERIC_UNAVAILABLE_REASON)
        }
        ProbeOutcome::Unavailable(reason) => MemoryQueryResult::Unsupported { reason },
    }
}
