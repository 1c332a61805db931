//! Path segments and the tokenizer
//!
//! A path is either a single string such as `servers[0].host` or a pre-split
//! list of tokens such as `["servers", "[0]", "host"]`. Both are turned into
//! typed [`Segment`]s exactly once, before any traversal.
//!
//! # Path Syntax
//!
//! - Dot-separated keys: `config.database.host`
//! - Array indexing: `items[0].name`
//! - Predicate lookup: `rows[id=42].value`
//!
//! A `.` inside brackets belongs to the bracket text: `hosts[name=db.local]`
//! is two segments, not three.
//!
//! # Examples
//!
//! ```
//! use morph_path::{tokenize, Segment};
//!
//! let segments = tokenize("rows[id=42].value").unwrap();
//! assert_eq!(segments, vec![
//!     Segment::field("rows"),
//!     Segment::predicate("id", "42"),
//!     Segment::field("value"),
//! ]);
//! ```

use std::fmt;

use crate::error::{PathError, Result};

/// One atomic step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A key in a mapping (e.g., "database" in "config.database")
    Field(String),
    /// A position in a sequence (e.g., 0 in `items[0]`)
    Index(usize),
    /// First mapping in a sequence whose `field` equals `value` (e.g., `rows[id=42]`)
    Predicate { field: String, value: String },
    /// All-digit index too large for `usize`, kept as written
    IndexOverflow(String),
    /// Bracket text that is neither an index nor a single `field=value`.
    ///
    /// Only a sequence cursor reports it as an invalid bracket expression; a
    /// mapping or scalar cursor rejects it like any other bracket segment.
    Malformed { raw: String, reason: &'static str },
}

impl Segment {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn predicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Predicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Classify a single token.
    ///
    /// Tokens wrapped in `[` `]` are bracket expressions; anything else,
    /// dots included, is a literal field name.
    pub fn from_token(token: &str) -> Self {
        match token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(inner) => Self::from_bracket(inner),
            None => Self::Field(token.to_string()),
        }
    }

    /// Classify the text between `[` and `]`.
    fn from_bracket(inner: &str) -> Self {
        if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
            return match inner.parse() {
                Ok(index) => Self::Index(index),
                Err(_) => Self::IndexOverflow(inner.to_string()),
            };
        }

        match inner.split_once('=') {
            Some((field, value)) if !value.contains('=') => Self::predicate(field, value),
            Some(_) => Self::Malformed {
                raw: inner.to_string(),
                reason: "predicate must contain exactly one '='",
            },
            None => Self::Malformed {
                raw: inner.to_string(),
                reason: "expected a numeric index or a field=value predicate",
            },
        }
    }

    /// Whether this segment is written in `[...]` form
    pub fn is_bracket(&self) -> bool {
        !matches!(self, Self::Field(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Predicate { field, value } => write!(f, "[{field}={value}]"),
            Self::IndexOverflow(digits) => write!(f, "[{digits}]"),
            Self::Malformed { raw, .. } => write!(f, "[{raw}]"),
        }
    }
}

/// Render segments as a location, starting from `$` for the root.
///
/// ```
/// use morph_path::{render_location, tokenize};
///
/// let segments = tokenize("servers[0].host").unwrap();
/// assert_eq!(render_location(&segments), "$.servers[0].host");
/// ```
pub fn render_location(segments: &[Segment]) -> String {
    let mut out = String::from("$");
    for segment in segments {
        if !segment.is_bracket() {
            out.push('.');
        }
        out.push_str(&segment.to_string());
    }
    out
}

/// Split a path string into segments.
///
/// Empty field names between dots are skipped, so `a..b` reads as `a.b`.
/// Unbalanced brackets and text trailing a `]` in the same dot-delimited part
/// are rejected as [`PathError::InvalidPath`].
pub fn tokenize_str(path: &str) -> Result<Vec<Segment>> {
    if path.trim().is_empty() {
        return Err(PathError::invalid_path("path string is empty"));
    }

    let mut segments = Vec::new();
    let mut current_key = String::new();
    let mut after_bracket = false;
    let mut chars = path.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current_key.is_empty() {
                    segments.push(Segment::Field(std::mem::take(&mut current_key)));
                }
                after_bracket = false;
            }
            '[' => {
                if !current_key.is_empty() {
                    segments.push(Segment::Field(std::mem::take(&mut current_key)));
                }
                let mut inner = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    if ch == ']' {
                        closed = true;
                        break;
                    }
                    inner.push(ch);
                }
                if !closed {
                    return Err(PathError::invalid_path(format!(
                        "unclosed '[' in '{path}'"
                    )));
                }
                segments.push(Segment::from_bracket(&inner));
                after_bracket = true;
            }
            ']' => {
                return Err(PathError::invalid_path(format!(
                    "unmatched ']' in '{path}'"
                )));
            }
            _ if after_bracket => {
                return Err(PathError::invalid_path(format!(
                    "unexpected '{ch}' after ']' in '{path}'"
                )));
            }
            _ => current_key.push(ch),
        }
    }

    if !current_key.is_empty() {
        segments.push(Segment::Field(current_key));
    }

    if segments.is_empty() {
        return Err(PathError::invalid_path(format!(
            "'{path}' contains no segments"
        )));
    }

    Ok(segments)
}

/// Classify an already split list of tokens, one segment per token.
pub fn tokenize_split<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Segment>> {
    if tokens.is_empty() {
        return Err(PathError::invalid_path("path sequence is empty"));
    }
    Ok(tokens
        .iter()
        .map(|token| Segment::from_token(token.as_ref()))
        .collect())
}

/// Anything that can be read as a path
pub trait PathExpr {
    fn to_segments(&self) -> Result<Vec<Segment>>;
}

impl PathExpr for str {
    fn to_segments(&self) -> Result<Vec<Segment>> {
        tokenize_str(self)
    }
}

impl PathExpr for String {
    fn to_segments(&self) -> Result<Vec<Segment>> {
        tokenize_str(self)
    }
}

impl<S: AsRef<str>> PathExpr for [S] {
    fn to_segments(&self) -> Result<Vec<Segment>> {
        tokenize_split(self)
    }
}

impl<S: AsRef<str>> PathExpr for Vec<S> {
    fn to_segments(&self) -> Result<Vec<Segment>> {
        tokenize_split(self)
    }
}

impl<S: AsRef<str>, const N: usize> PathExpr for [S; N] {
    fn to_segments(&self) -> Result<Vec<Segment>> {
        tokenize_split(self)
    }
}

/// Owned path, for holding a path in options or config before resolving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// Dot/bracket string form
    Dotted(String),
    /// Pre-split token form
    Split(Vec<String>),
}

impl PathExpr for PathInput {
    fn to_segments(&self) -> Result<Vec<Segment>> {
        match self {
            Self::Dotted(path) => tokenize_str(path),
            Self::Split(tokens) => tokenize_split(tokens),
        }
    }
}

impl fmt::Display for PathInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dotted(path) => f.write_str(path),
            Self::Split(tokens) => {
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 && !token.starts_with('[') {
                        f.write_str(".")?;
                    }
                    f.write_str(token)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for PathInput {
    fn from(path: &str) -> Self {
        Self::Dotted(path.to_string())
    }
}

impl From<String> for PathInput {
    fn from(path: String) -> Self {
        Self::Dotted(path)
    }
}

impl From<Vec<String>> for PathInput {
    fn from(tokens: Vec<String>) -> Self {
        Self::Split(tokens)
    }
}

impl From<Vec<&str>> for PathInput {
    fn from(tokens: Vec<&str>) -> Self {
        Self::Split(tokens.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for PathInput {
    fn from(tokens: &[&str]) -> Self {
        Self::Split(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// Tokenize any path expression into typed segments.
pub fn tokenize<P: PathExpr + ?Sized>(path: &P) -> Result<Vec<Segment>> {
    path.to_segments()
}
