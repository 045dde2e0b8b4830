//! Diagnostic system for error reporting.
//!
//! Provides the building blocks every heir phase uses to report problems:
//! - [`Span`] and [`Location`] for pinpointing source positions
//! - [`Diagnostic`] with a [`Severity`] level
//! - [`DiagnosticQueue`] for accumulating warnings and errors across a run
//! - [`emitter`] for rendering diagnostics to a terminal stream
//!
//! Warnings never stop a run; the driver checks
//! [`DiagnosticQueue::has_errors`] before finalizing any output.

mod diagnostic;
pub mod emitter;
mod location;
mod queue;
mod span;

pub use diagnostic::{Diagnostic, Severity};
pub use location::Location;
pub use queue::DiagnosticQueue;
pub use span::Span;
