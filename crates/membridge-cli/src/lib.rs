//! Command-line adapter for membridge.
//!
//! The binary in `main.rs` is the composition root; this library holds the
//! parser, bootstrap, handlers and presentation so they can be tested.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary entry point
use anyhow as _;
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, EncodingArg};
pub use error::CliError;
pub use parser::Cli;
