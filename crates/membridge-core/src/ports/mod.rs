//! Port definitions (trait abstractions) for native memory introspection.
//!
//! Ports define the interfaces that the core expects from the platform.
//! They contain no OS calls and use only domain types.
//!
//! # Design Rules
//!
//! - Native sources are thin: one OS reading per method, no interpretation
//! - Probes interpret readings and never fail; every native error becomes
//!   a [`ProbeOutcome`](crate::domain::ProbeOutcome)
//! - Implementations live in adapters (e.g., membridge-runtime)

pub mod memory_probe;
pub mod memory_source;

pub use memory_probe::MemoryProbePort;
pub use memory_source::{
    DeviceMemorySource, MemorySourceError, MemorySourceResult, ProcessMemorySource,
};

#[cfg(test)]
pub use memory_source::{MockDeviceMemorySource, MockProcessMemorySource};
