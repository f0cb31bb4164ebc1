//! Core domain types and port definitions for membridge.
//!
//! `membridge-core` owns everything that does not touch the operating
//! system: the request/result types, the native-source and probe ports,
//! the two probe variants, the response normalizer, the request
//! dispatcher and the wire protocol. Concrete native sources live in
//! `membridge-runtime`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod protocol;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DeviceMemorySnapshot, MemoryQueryRequest, MemoryQueryResult, MemoryScope, PlatformVersion,
    ProbeOutcome, ProcessMemoryCapability, ResultKind,
};
pub use ports::{
    DeviceMemorySource, MemoryProbePort, MemorySourceError, MemorySourceResult,
    ProcessMemorySource,
};
pub use protocol::{
    ERROR_CODE_UNAVAILABLE, EncodedResponse, LEGACY_CRITICAL_SENTINEL, MethodCall,
    MethodResponse, ProtocolError, ResponseEncoding, decode_legacy, encode_legacy,
};
pub use services::{
    DeviceMemoryProbe, MemoryRequestDispatcher, ProcessMemoryProbe, normalize,
};

// Silence unused dev-dependency warnings when automock is compiled out
#[cfg(test)]
use mockall as _;
