//! `membridge call` handler.
//!
//! Sends one method call through the bridge and prints the encoded wire
//! response as a single JSON line.

use std::io::Write;

use membridge_core::{EncodedResponse, MethodCall, ResponseEncoding};
use membridge_runtime::query_with_deadline;
use serde_json::Value;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Build the wire call from CLI input.
pub fn build_call(method: &str, arguments: Option<&str>) -> Result<MethodCall, CliError> {
    let arguments = match arguments {
        Some(raw) => serde_json::from_str::<Value>(raw)
            .map_err(|e| CliError::Arguments(format!("--args is not valid JSON: {e}")))?,
        None => Value::Null,
    };
    Ok(MethodCall::new(method).with_arguments(arguments))
}

/// Run the call and return the encoded response.
pub async fn respond(
    ctx: &CliContext,
    call: MethodCall,
    encoding: ResponseEncoding,
) -> EncodedResponse {
    let result = query_with_deadline(ctx.dispatcher().clone(), call, ctx.query_timeout()).await;
    encoding.encode(result)
}

/// Execute the call command, writing one JSON line to `out`.
pub async fn execute(
    out: &mut impl Write,
    ctx: &CliContext,
    method: &str,
    arguments: Option<&str>,
    encoding: ResponseEncoding,
) -> Result<(), CliError> {
    let call = build_call(method, arguments)?;
    let response = respond(ctx, call, encoding).await;
    writeln!(out, "{}", response.to_json()?)?;
    Ok(())
}
