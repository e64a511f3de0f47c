pub mod cors;
pub mod tracing_middleware;

pub use cors::cors_headers;
pub use tracing_middleware::{extract_trace_id, TraceId, TracingMiddleware};
