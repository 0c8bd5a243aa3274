//! Span helpers for common extension operations

use tracing::Span;

/// Create a span for tool execution
///
/// # Example
/// ```
/// use adk_telemetry::tool_execute_span;
/// let span = tool_execute_span("list_adk_agents");
/// let _enter = span.enter();
/// ```
pub fn tool_execute_span(tool_name: &str) -> Span {
    tracing::info_span!("tool.execute", tool.name = tool_name, otel.kind = "internal")
}

/// Create a span for a call to a remote ADK API server
///
/// # Arguments
/// * `method` - HTTP method
/// * `url` - Full request URL
pub fn adk_request_span(method: &str, url: &str) -> Span {
    tracing::debug_span!("adk.request", http.method = method, http.url = url, otel.kind = "client")
}
