//! Diagnostic emitters.
//!
//! An emitter renders [`Diagnostic`] values to some sink. The only
//! implementation today is the [`TerminalEmitter`], which writes
//! human-readable `source:line:col: severity: message` lines with optional
//! ANSI color.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// A sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    /// Render one diagnostic.
    fn emit(&mut self, diag: &Diagnostic);
}
