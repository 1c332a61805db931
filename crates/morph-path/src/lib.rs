//! Path tokenizing and resolution over nested config values
//!
//! Resolves dotted/bracketed paths such as `servers[0].host` or
//! `rows[id=42].value` against a `serde_json::Value` tree, failing with a
//! typed [`PathError`] at the first segment that does not fit.

pub mod error;
pub mod resolve;
pub mod segment;

pub use error::{PathError, PathErrorKind, Result, ShapeMismatch};
pub use resolve::{kind_name, resolve, resolve_segments};
pub use segment::{
    PathExpr, PathInput, Segment, render_location, tokenize, tokenize_split, tokenize_str,
};
