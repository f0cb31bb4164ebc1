//! Request dispatcher.
//!
//! Routes a named request to the injected probe and normalizes the
//! outcome. The dispatcher holds no mutable state, so one instance can be
//! shared across threads and called concurrently.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use super::normalize;
use crate::domain::{MemoryQueryRequest, MemoryQueryResult, MemoryScope, ProbeOutcome};
use crate::ports::MemoryProbePort;
use crate::protocol::{EncodedResponse, MethodCall, ResponseEncoding};

/// Entry point the application layer calls.
#[derive(Clone)]
pub struct MemoryRequestDispatcher {
    probe: Arc<dyn MemoryProbePort>,
}

impl MemoryRequestDispatcher {
    pub fn new(probe: Arc<dyn MemoryProbePort>) -> Self {
        Self { probe }
    }

    /// Scope of the numbers this dispatcher reports.
    pub fn scope(&self) -> MemoryScope {
        self.probe.scope()
    }

    /// Handle a method call by name. `arguments` are accepted and ignored.
    ///
    /// Unrecognized methods yield [`MemoryQueryResult::UnknownRequest`] and
    /// the probe is not invoked.
    pub fn dispatch(&self, method: &str, arguments: &Value) -> MemoryQueryResult {
        let Some(request) = MemoryQueryRequest::from_method(method) else {
            warn!(method, "unrecognized memory bridge method");
            return MemoryQueryResult::UnknownRequest {
                method: method.to_string(),
            };
        };

        if !arguments.is_null() {
            debug!(%request, "ignoring arguments");
        }
        self.query(request)
    }

    /// Handle a decoded wire call.
    pub fn handle(&self, call: &MethodCall) -> MemoryQueryResult {
        self.dispatch(&call.method, &call.arguments)
    }

    /// Handle a decoded wire call and encode the result for the wire.
    pub fn respond(&self, call: &MethodCall, encoding: ResponseEncoding) -> EncodedResponse {
        encoding.encode(self.handle(call))
    }

    /// Run a recognized request.
    pub fn query(&self, request: MemoryQueryRequest) -> MemoryQueryResult {
        match request {
            MemoryQueryRequest::GetAvailableMemory => {
                let result = normalize(self.probe_guarded());
                debug!(%request, scope = %self.probe.scope(), %result, "memory query complete");
                result
            }
        }
    }

    /// Invoke the probe, turning a panic into an unavailable outcome so the
    /// caller's process is never taken down by a native failure.
    fn probe_guarded(&self) -> ProbeOutcome {
        panic::catch_unwind(AssertUnwindSafe(|| self.probe.probe())).unwrap_or_else(|_| {
            error!(scope = %self.probe.scope(), "memory probe panicked");
            ProbeOutcome::Unavailable(format!(
                "{} memory probe failed unexpectedly",
                self.probe.scope()
            ))
        })
    }
}
