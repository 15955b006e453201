//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces are written to `~/.local/share/zellij/zcatalog/zcatalog-otlp.json`
//! - Files rotate at 10MB with 3 numbered backups
//! - Batches use the OTLP JSON encoding so standard tooling can read them
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`export`]: Span exporter and rotating file
//! - [`otlp`]: OTLP JSON encoding

pub mod export;
pub mod init;
pub mod otlp;

pub use init::{init_tracing, level_filter};
