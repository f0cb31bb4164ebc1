//! Main CLI parser and top-level argument handling.
//!
//! Global options configure the runtime and can be supplied through
//! `MEMBRIDGE_*` environment variables (or a `.env` file).

use clap::Parser;
use membridge_runtime::BackendChoice;

use crate::commands::Commands;

/// Command-line interface for the memory availability bridge.
#[derive(Parser, Debug)]
#[command(name = "membridge")]
#[command(about = "Query memory available to this process and detect critical memory pressure")]
#[command(version)]
pub struct Cli {
    /// Probe backend: auto, device or process
    #[arg(long, global = true, env = "MEMBRIDGE_BACKEND", default_value = "auto")]
    pub backend: BackendChoice,

    /// Upper bound for a single memory query, in milliseconds
    #[arg(
        long = "timeout-ms",
        global = true,
        env = "MEMBRIDGE_TIMEOUT_MS",
        default_value_t = 2_000
    )]
    pub timeout_ms: u64,

    /// Fraction of total memory at or below which the device backend reports critical
    #[arg(
        long = "low-memory-ratio",
        global = true,
        env = "MEMBRIDGE_LOW_MEMORY_RATIO",
        default_value_t = 0.05
    )]
    pub low_memory_ratio: f64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
