//! `membridge capabilities` handler.
//!
//! Displays platform facts and which backends can answer here. Does not
//! query memory.

use membridge_core::ProcessMemoryCapability;
use membridge_runtime::{Backend, PlatformReport};

use crate::bootstrap::CliContext;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the capabilities command.
pub fn execute(ctx: &CliContext) {
    let report = PlatformReport::collect();

    println!("{BOLD}Platform:{RESET}");
    println!("{}", "-".repeat(40));
    println!("  os:      {}", report.os_name.as_deref().unwrap_or("unknown"));
    println!("  release: {}", report.os_release.as_deref().unwrap_or("unknown"));
    println!("  kernel:  {}", report.kernel_release.as_deref().unwrap_or("unknown"));

    println!("\n{BOLD}Backends:{RESET}");
    println!("{}", "-".repeat(40));
    for backend in [Backend::Device, Backend::Process] {
        let mut markers = Vec::new();
        if backend == report.native_backend {
            markers.push("native");
        }
        if backend == ctx.backend {
            markers.push("selected");
        }
        let markers = if markers.is_empty() {
            String::new()
        } else {
            format!(" [{}]", markers.join(", "))
        };

        println!(
            "  {:<8} {:<8} {}{}",
            backend.to_string(),
            backend.scope().to_string(),
            support_line(backend, &report.process_capability),
            markers
        );
    }
}

fn support_line(backend: Backend, process: &ProcessMemoryCapability) -> String {
    match (backend, process) {
        (Backend::Device, _) => format!("{GREEN}✓ supported{RESET}"),
        (Backend::Process, ProcessMemoryCapability::Supported { version }) => {
            format!("{GREEN}✓ supported (platform {version}){RESET}")
        }
        (Backend::Process, ProcessMemoryCapability::Unsupported { reason }) => {
            format!("{YELLOW}○ {reason}{RESET}")
        }
    }
}
