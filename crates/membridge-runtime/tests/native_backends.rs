//! Tests for the native backends against the live host.
//!
//! Exact figures depend on the machine running the tests, so these only
//! check the shape of what comes back.

use membridge_core::{MemoryQueryResult, MemoryScope, MethodCall, ResultKind};
use membridge_runtime::{
    Backend, BackendChoice, RuntimeConfig, build_dispatcher, query_with_deadline,
};

fn config(backend: BackendChoice) -> RuntimeConfig {
    RuntimeConfig {
        backend,
        ..RuntimeConfig::default()
    }
}

#[test]
fn test_device_backend_never_unknown() {
    let dispatcher = build_dispatcher(&config(BackendChoice::Device));
    assert_eq!(dispatcher.scope(), MemoryScope::Device);

    let result = dispatcher.handle(&MethodCall::new("getAvailableMemory"));
    assert!(matches!(
        result.kind(),
        ResultKind::Available | ResultKind::Critical
    ));
}

#[test]
fn test_process_backend_answers_or_explains() {
    let dispatcher = build_dispatcher(&config(BackendChoice::Process));
    assert_eq!(dispatcher.scope(), MemoryScope::Process);

    match dispatcher.handle(&MethodCall::new("getAvailableMemory")) {
        MemoryQueryResult::Available { .. } => {}
        MemoryQueryResult::Unsupported { reason } => assert!(!reason.is_empty()),
        other => panic!("process backend returned {other:?}"),
    }
}

#[test]
fn test_full_ratio_always_reports_critical() {
    // With the threshold at 100% of total, any reading is low memory
    let dispatcher = build_dispatcher(&RuntimeConfig {
        backend: BackendChoice::Device,
        low_memory_ratio: 1.0,
        ..RuntimeConfig::default()
    });

    let result = dispatcher.handle(&MethodCall::new("getAvailableMemory"));
    assert_eq!(result, MemoryQueryResult::Critical);
}

#[test]
fn test_unknown_method_on_native_backend() {
    let dispatcher = build_dispatcher(&config(BackendChoice::Auto));

    let result = dispatcher.handle(&MethodCall::new("unknownOp"));
    assert_eq!(
        result,
        MemoryQueryResult::UnknownRequest {
            method: "unknownOp".to_string()
        }
    );
}

#[test]
fn test_auto_matches_native_scope() {
    let dispatcher = build_dispatcher(&config(BackendChoice::Auto));
    assert_eq!(dispatcher.scope(), Backend::native().scope());
}

#[tokio::test]
async fn test_deadline_wrapper_on_live_backend() {
    let dispatcher = build_dispatcher(&config(BackendChoice::Device));
    let result = query_with_deadline(
        dispatcher,
        MethodCall::new("getAvailableMemory"),
        RuntimeConfig::default().query_timeout,
    )
    .await;

    assert_ne!(result.kind(), ResultKind::UnknownRequest);
}
