//! HTTP middleware, listed innermost first.
//!
//! `main` wraps them so that `RequestTrace` runs first on the way in and
//! the CORS layer sits outermost.

pub mod request_trace;
pub mod trace_span;
pub mod structured_logger;
pub mod cors;

pub use cors::cors_middleware;
pub use request_trace::{RequestTrace, REQUEST_ID_HEADER};
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
