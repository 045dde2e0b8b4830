//! The expand pipeline: preprocess, collect, resolve, rewrite.

use std::fs;
use std::path::Path;

use heir_codegen::rewrite;
use heir_diagnostic::DiagnosticQueue;
use heir_graph::{collect_definitions, resolve_inherits, DefTable};
use heir_lexer::{Lexer, SourceBuffer};
use tracing::{debug, info};

use crate::dump::render_tree;
use crate::error::DriverError;
use crate::preprocess::preprocess;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions {
    /// Skip `cc -E` and scan the input as already-expanded text. Parents
    /// must then live in the file itself.
    pub raw: bool,
    /// Also render the struct hierarchy tree.
    pub dump: bool,
}

/// Result of a run that got far enough to produce output.
///
/// The queue may still hold errors; callers must check it before using
/// `output`.
#[derive(Debug)]
pub struct Expansion {
    pub output: String,
    pub tree: Option<String>,
    pub queue: DiagnosticQueue,
}

/// Expand one file from disk.
pub fn expand_file(path: &Path, opts: ExpandOptions) -> Result<Expansion, DriverError> {
    let raw = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_owned(),
        source,
    })?;
    let expanded = if opts.raw {
        None
    } else {
        Some(preprocess(path)?)
    };
    let name = path.display().to_string();
    expand_source(expanded.as_deref().unwrap_or(&raw), &raw, &name, opts)
}

/// Expand from in-memory text.
///
/// `expanded` is the preprocessed view used to collect parent
/// definitions; `raw` is the text that gets rewritten. They are the same
/// string when the preprocessor was skipped.
pub fn expand_source(
    expanded: &str,
    raw: &str,
    name: &str,
    opts: ExpandOptions,
) -> Result<Expansion, DriverError> {
    let expanded_buf = SourceBuffer::new(expanded);
    let raw_buf = SourceBuffer::new(raw);
    let mut table = DefTable::new();
    let mut queue = DiagnosticQueue::new();

    // Line numbers in expanded text do not line up with the file on
    // disk, so its diagnostics carry a marked source name.
    let expanded_name = format!("{name} (preprocessed)");
    let mut first = Lexer::new(expanded_name.clone(), &expanded_buf);
    collect_definitions(&mut first, &mut table, &mut queue)
        .map_err(|err| DriverError::Fatal(err.into_diagnostic(&expanded_name)))?;
    debug!(definitions = table.len(), "first pass done");

    let mut second = Lexer::new(name, &raw_buf);
    resolve_inherits(&mut second, &mut table, &mut queue)
        .map_err(|err| DriverError::Fatal(err.into_diagnostic(name)))?;

    let resolved = table.iter().filter(|(_, d)| d.parent.is_some()).count();
    info!(definitions = table.len(), resolved, "inheritance resolved");

    let output =
        rewrite(name, raw, &table, &mut queue).map_err(|err| DriverError::Fatal(err.into_diagnostic()))?;
    let tree = opts.dump.then(|| render_tree(&table));
    Ok(Expansion {
        output,
        tree,
        queue,
    })
}
