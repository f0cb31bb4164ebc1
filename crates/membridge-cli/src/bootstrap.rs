//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the native backend is chosen and
//! wired to the dispatcher. Command handlers receive the composed
//! [`CliContext`] and never build probes themselves.

use std::time::Duration;

use membridge_core::MemoryRequestDispatcher;
use membridge_runtime::{Backend, RuntimeConfig, build_dispatcher};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
}

impl CliConfig {
    /// Create config with library defaults.
    pub fn with_defaults() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
        }
    }

    /// Build config from parsed global options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            runtime: RuntimeConfig {
                backend: cli.backend,
                low_memory_ratio: cli.low_memory_ratio,
                query_timeout: Duration::from_millis(cli.timeout_ms),
            },
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Dispatcher over the chosen backend.
    pub dispatcher: MemoryRequestDispatcher,
    /// Backend the dispatcher was built over.
    pub backend: Backend,
    /// Validated configuration.
    pub config: CliConfig,
}

impl CliContext {
    pub const fn dispatcher(&self) -> &MemoryRequestDispatcher {
        &self.dispatcher
    }

    pub const fn query_timeout(&self) -> Duration {
        self.config.runtime.query_timeout
    }
}

/// Bootstrap the CLI application.
///
/// Validates the configuration, resolves the backend and builds the
/// dispatcher. No memory is queried here.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    config.runtime.validate()?;

    let backend = config.runtime.backend.resolve();
    let dispatcher = build_dispatcher(&config.runtime);
    debug!(%backend, scope = %dispatcher.scope(), "membridge bootstrapped");

    Ok(CliContext {
        dispatcher,
        backend,
        config,
    })
}
