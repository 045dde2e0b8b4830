//! C output generation.
//!
//! Takes the resolved definition table and the raw source text, and
//! produces the rewritten file: inheriting declarations are replaced by
//! flat structs carrying every ancestor member, each followed by
//! `_Static_assert` lines pinning the layout, and the cast marker is
//! expanded into `_Generic` dispatch macros.

mod asserts;
mod casts;
mod error;
mod fields;
mod rewrite;

pub use casts::CAST_MARKER;
pub use error::RewriteError;
pub use rewrite::rewrite;
