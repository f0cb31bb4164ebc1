//! Bounded-wait wrapper around the synchronous dispatcher.
//!
//! Native memory calls are expected to return promptly, but a caller on an
//! async runtime should not be parked behind one that doesn't. The query
//! runs on tokio's blocking pool and an expired deadline is reported as
//! `Unsupported`, like any other native failure.

use std::time::Duration;

use membridge_core::{MemoryQueryResult, MemoryRequestDispatcher, MethodCall};
use tracing::warn;

/// Dispatch `call`, giving up after `deadline`.
///
/// The blocking task is not cancelled on timeout; it finishes in the
/// background and its result is discarded.
pub async fn query_with_deadline(
    dispatcher: MemoryRequestDispatcher,
    call: MethodCall,
    deadline: Duration,
) -> MemoryQueryResult {
    let method = call.method.clone();
    let task = tokio::task::spawn_blocking(move || dispatcher.handle(&call));

    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            warn!(%method, "memory query task failed: {e}");
            MemoryQueryResult::unsupported(format!("memory query task failed: {e}"))
        }
        Err(_) => {
            warn!(%method, ?deadline, "memory query timed out");
            MemoryQueryResult::unsupported(format!(
                "memory query timed out after {} ms",
                deadline.as_millis()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use membridge_core::{MemoryProbePort, MemoryScope, ProbeOutcome};
    use std::sync::Arc;

    struct SlowProbe(Duration);

    impl MemoryProbePort for SlowProbe {
        fn scope(&self) -> MemoryScope {
            MemoryScope::Device
        }

        fn probe(&self) -> ProbeOutcome {
            std::thread::sleep(self.0);
            ProbeOutcome::Measured(1)
        }
    }

    #[tokio::test]
    async fn test_fast_probe_returns_result() {
        let dispatcher = MemoryRequestDispatcher::new(Arc::new(SlowProbe(Duration::ZERO)));

        let result = query_with_deadline(
            dispatcher,
            MethodCall::new("getAvailableMemory"),
            Duration::from_secs(5),
        )
        .await;

        assert_eq!(result, MemoryQueryResult::Available { bytes: 1 });
    }

    #[tokio::test]
    async fn test_slow_probe_times_out_as_unsupported() {
        let dispatcher =
            MemoryRequestDispatcher::new(Arc::new(SlowProbe(Duration::from_millis(300))));

        let result = query_with_deadline(
            dispatcher,
            MethodCall::new("getAvailableMemory"),
            Duration::from_millis(10),
        )
        .await;

        match result {
            MemoryQueryResult::Unsupported { reason } => assert!(reason.contains("timed out")),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_method_is_not_a_timeout() {
        let dispatcher =
            MemoryRequestDispatcher::new(Arc::new(SlowProbe(Duration::from_secs(10))));

        let result =
            query_with_deadline(dispatcher, MethodCall::new("unknownOp"), Duration::from_secs(5))
                .await;

        assert!(matches!(result, MemoryQueryResult::UnknownRequest { .. }));
    }
}
