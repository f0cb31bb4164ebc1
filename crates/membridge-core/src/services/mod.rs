//! Core services: the two probe variants, the response normalizer and the
//! request dispatcher.

mod dispatcher;
mod normalizer;
mod probes;

pub use dispatcher::MemoryRequestDispatcher;
pub use normalizer::normalize;
pub use probes::{DeviceMemoryProbe, ProcessMemoryProbe};
