//! Terminal and JSON presentation for memory query results.

use chrono::{DateTime, Utc};
use membridge_core::{MemoryQueryResult, MemoryScope};
use serde::Serialize;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Exit code when memory is available.
pub const EXIT_AVAILABLE: i32 = 0;
/// Exit code when the OS reports critical memory pressure.
pub const EXIT_CRITICAL: i32 = 3;
/// Exit code when the platform cannot answer.
pub const EXIT_UNSUPPORTED: i32 = 4;

/// JSON report printed by `membridge available --json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub backend: String,
    pub scope: MemoryScope,
    #[serde(flatten)]
    pub result: MemoryQueryResult,
    pub sampled_at: DateTime<Utc>,
}

/// Format a byte count with binary units (e.g. "500.00 MiB").
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// One-line colored summary of a result.
pub fn summarize(result: &MemoryQueryResult, scope: MemoryScope) -> String {
    match result {
        MemoryQueryResult::Available { bytes } => format!(
            "{GREEN}✓ {} available{RESET} ({bytes} bytes, {scope} scope)",
            format_bytes(*bytes)
        ),
        MemoryQueryResult::Critical => {
            format!("{RED}✗ critical: the OS reports low memory{RESET}")
        }
        MemoryQueryResult::Unsupported { reason } => {
            format!("{YELLOW}○ unsupported: {reason}{RESET}")
        }
        MemoryQueryResult::UnknownRequest { method } => {
            format!("{RED}✗ unknown request: {method}{RESET}")
        }
    }
}

/// Exit code for the `available` command.
pub const fn exit_code_for(result: &MemoryQueryResult) -> i32 {
    match result {
        MemoryQueryResult::Available { .. } => EXIT_AVAILABLE,
        MemoryQueryResult::Critical => EXIT_CRITICAL,
        MemoryQueryResult::Unsupported { .. } | MemoryQueryResult::UnknownRequest { .. } => {
            EXIT_UNSUPPORTED
        }
    }
}
