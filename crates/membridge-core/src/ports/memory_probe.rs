//! Memory probe port.
//!
//! A probe turns one native source into a [`ProbeOutcome`]. Both probe
//! variants sit behind this trait so the dispatcher never needs to know
//! which platform it is running on.
//!
//! # Design Notes
//!
//! - Core owns the trait and both variants (pure, testable)
//! - Runtime owns the native sources and picks the variant per OS family
//! - CLI injects the chosen probe via bootstrap

use crate::domain::{MemoryScope, ProbeOutcome};

/// Port for querying available memory.
///
/// Implementations must not panic or return errors: native failures are
/// reported as [`ProbeOutcome::Unavailable`]. Numbers from probes with
/// different [`MemoryScope`]s are not comparable.
///
/// # Example
///
/// ```ignore
/// use membridge_core::ports::MemoryProbePort;
///
/// fn report(probe: &dyn MemoryProbePort) {
///     let outcome = probe.probe();
///     println!("{} scope: {outcome:?}", probe.scope());
/// }
/// ```
pub trait MemoryProbePort: Send + Sync {
    /// Whether this probe measures device-wide or process-scoped memory.
    fn scope(&self) -> MemoryScope;

    /// Take one reading.
    fn probe(&self) -> ProbeOutcome;
}
