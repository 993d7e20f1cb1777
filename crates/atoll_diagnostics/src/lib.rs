//! Diagnostics for the Atoll analog placement tools.
//!
//! Placement stages report progress and problems as [`Diagnostic`] records
//! emitted into a caller-supplied [`DiagnosticSink`]. Emission is
//! fire-and-forget: stages never block on, or react to, the sink. The caller
//! drains the sink after a run to render or count what happened.
//!
//! There is intentionally no process-global logger; every function that logs
//! takes a `&DiagnosticSink` handle.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod severity;
pub mod sink;

pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use sink::DiagnosticSink;
