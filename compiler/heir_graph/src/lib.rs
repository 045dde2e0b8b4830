//! Struct declaration collection and inheritance resolution.
//!
//! Declarations are gathered in two passes over two different views of the
//! same file. The first pass scans preprocessor-expanded text so parents
//! defined in headers are visible; it fills the table with every plain
//! struct definition. The second pass scans the raw file and resolves the
//! parent reference written between a struct's name and its body, linking
//! each child to an already-collected parent and recording the byte spans
//! the rewriter needs to splice in the flattened declaration.

mod collect;
mod def;
mod error;
mod parse;
mod resolve;
mod table;

pub use collect::collect_definitions;
pub use def::{DefId, Definition, Splice};
pub use error::ParseError;
pub use resolve::resolve_inherits;
pub use table::DefTable;
