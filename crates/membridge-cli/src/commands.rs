//! Main commands enum and primary subcommands.

use clap::{Subcommand, ValueEnum};
use membridge_core::ResponseEncoding;

/// Available commands for the memory bridge.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one method call through the bridge and print the wire response
    Call {
        /// Method name (e.g., "getAvailableMemory")
        method: String,
        /// Call arguments as JSON (accepted and ignored by the bridge)
        #[arg(long = "args")]
        arguments: Option<String>,
        /// Response encoding
        #[arg(long, value_enum, default_value_t = EncodingArg::Legacy)]
        encoding: EncodingArg,
    },

    /// Query available memory and print a summary
    Available {
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decode a legacy wire response into the typed result
    Decode {
        /// Method the response answers (e.g., "getAvailableMemory")
        method: String,
        /// Legacy response JSON (e.g., '{"type":"success","value":-1}')
        response: String,
    },

    /// Show which backends this platform supports
    Capabilities,
}

/// Wire encoding selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    /// Signed integer with -1 meaning critical
    Legacy,
    /// Tagged result object
    Typed,
}

impl From<EncodingArg> for ResponseEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Legacy => Self::Legacy,
            EncodingArg::Typed => Self::Typed,
        }
    }
}
