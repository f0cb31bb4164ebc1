//! Native memory sources and backend wiring for membridge.
//!
//! This crate is the only place that talks to the operating system. It
//! implements the native-source ports from `membridge-core` on top of
//! `sysinfo`, picks the probe variant for the running OS family, and
//! offers a bounded-wait wrapper around the synchronous dispatcher.
#![deny(unsafe_code)]

pub mod config;
pub mod deadline;
pub mod system;

pub use config::{ConfigError, RuntimeConfig};
pub use deadline::query_with_deadline;
pub use system::{
    Backend, BackendChoice, CgroupProcessSource, PlatformReport, SysinfoDeviceSource,
    build_dispatcher, build_probe,
};
