//! `membridge available` handler.

use std::io::Write;

use chrono::Utc;
use membridge_core::{MemoryQueryRequest, MemoryQueryResult, MethodCall};
use membridge_runtime::query_with_deadline;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{AvailabilityReport, summarize};

/// Query available memory, print it, and return the result so the caller
/// can pick an exit code.
pub async fn execute(
    out: &mut impl Write,
    ctx: &CliContext,
    json: bool,
) -> Result<MemoryQueryResult, CliError> {
    let call = MethodCall::new(MemoryQueryRequest::GetAvailableMemory.method_name());
    let result = query_with_deadline(ctx.dispatcher().clone(), call, ctx.query_timeout()).await;

    if json {
        let report = AvailabilityReport {
            backend: ctx.backend.to_string(),
            scope: ctx.dispatcher().scope(),
            result: result.clone(),
            sampled_at: Utc::now(),
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::Protocol(e.to_string()))?;
        writeln!(out, "{rendered}")?;
    } else {
        writeln!(out, "{}", summarize(&result, ctx.dispatcher().scope()))?;
    }

    Ok(result)
}
