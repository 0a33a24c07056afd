//! Task-local trace context for web requests.
//!
//! The request-trace middleware establishes a scope holding the request's
//! trace id; error bodies read it back from anywhere in the request
//! pipeline without threading it through call signatures.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// The trace id of the current request, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future with the given trace id installed as the task-local scope.
pub async fn scope<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
