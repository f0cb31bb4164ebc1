//! Log filter setup.
//!
//! `RUST_LOG` directives apply as given (default `warn`). `--verbose`
//! appends debug directives for the membridge crates, which take
//! precedence over any `RUST_LOG` entry for the same targets.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset, blank or invalid.
pub const DEFAULT_DIRECTIVES: &str = "warn";

const VERBOSE_DIRECTIVES: &str =
    "membridge=debug,membridge_cli=debug,membridge_core=debug,membridge_runtime=debug";

/// Combine the `RUST_LOG` value with the verbosity flag.
pub fn filter_directives(verbose: bool, env: Option<&str>) -> String {
    let base = env
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);

    if verbose {
        format!("{base},{VERBOSE_DIRECTIVES}")
    } else {
        base.to_string()
    }
}

/// Build the subscriber filter from `RUST_LOG` and `--verbose`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(verbose, env.as_deref())
}

fn build_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    EnvFilter::try_new(filter_directives(verbose, env))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose, None)))
}
