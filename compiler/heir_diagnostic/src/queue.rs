//! Accumulating diagnostic queue.

use crate::{Diagnostic, Severity};

/// Append-only queue of diagnostics produced during a run.
///
/// Phases push into the queue and keep going; the driver decides at the end
/// whether errors occurred and whether output may be finalized. Emission
/// order is push order.
#[derive(Default, Debug)]
pub struct DiagnosticQueue {
    diags: Vec<Diagnostic>,
    errors: usize,
    warnings: usize,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a diagnostic, updating per-severity counts.
    pub fn push(&mut self, diag: Diagnostic) {
        match diag.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
        self.diags.push(diag);
    }

    /// Number of error-severity diagnostics pushed so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Number of warning-severity diagnostics pushed so far.
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Returns `true` if any error-severity diagnostic was pushed.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Returns `true` if nothing was pushed.
    pub fn is_empty(&self) -> bool {
        self.diags.is_empty()
    }

    /// Iterate diagnostics in push order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diags.iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticQueue {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_by_severity() {
        let mut queue = DiagnosticQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.has_errors());

        queue.push(Diagnostic::warning("a.c", Location::default(), "w1"));
        queue.push(Diagnostic::error("a.c", Location::default(), "e1"));
        queue.push(Diagnostic::warning("a.c", Location::default(), "w2"));

        assert_eq!(queue.error_count(), 1);
        assert_eq!(queue.warning_count(), 2);
        assert!(queue.has_errors());
    }

    #[test]
    fn iterates_in_push_order() {
        let mut queue = DiagnosticQueue::new();
        queue.push(Diagnostic::error("a.c", Location::default(), "first"));
        queue.push(Diagnostic::error("a.c", Location::default(), "second"));

        let messages: Vec<_> = queue.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
