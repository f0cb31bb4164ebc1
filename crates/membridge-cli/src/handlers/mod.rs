//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Parse/validate CLI-specific input
//! 2. Run the query through the context's dispatcher
//! 3. Format output for the terminal
//!
//! Handlers never construct probes; the backend is chosen in bootstrap.
//! Output goes to a caller-supplied writer so write failures surface as
//! [`CliError::Io`](crate::CliError::Io).

pub mod available;
pub mod call;
pub mod capabilities;
pub mod decode;
