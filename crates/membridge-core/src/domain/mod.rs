//! Domain types for memory availability queries.
//!
//! These are pure data types with no OS access. Requests and results are
//! created fresh for every call and carry no identity beyond it.

mod request;
mod result;
mod snapshot;
mod version;

pub use request::MemoryQueryRequest;
pub use result::{MemoryQueryResult, ResultKind};
pub use snapshot::{DeviceMemorySnapshot, MemoryScope, ProbeOutcome, ProcessMemoryCapability};
pub use version::PlatformVersion;
