//! `membridge decode` handler.
//!
//! Reads a legacy wire response as a native host would send it and prints
//! the typed result it stands for. No memory is queried.

use std::io::Write;

use membridge_core::{MemoryQueryResult, MethodResponse, decode_legacy};

use crate::error::CliError;

/// Decode `raw` as the legacy response to a call of `method`.
pub fn decode(method: &str, raw: &str) -> Result<MemoryQueryResult, CliError> {
    let response = MethodResponse::from_json(raw)?;
    Ok(decode_legacy(method, &response)?)
}

/// Execute the decode command, writing one JSON line to `out`.
pub fn execute(out: &mut impl Write, method: &str, raw: &str) -> Result<(), CliError> {
    let result = decode(method, raw)?;
    let rendered =
        serde_json::to_string(&result).map_err(|e| CliError::Protocol(e.to_string()))?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
