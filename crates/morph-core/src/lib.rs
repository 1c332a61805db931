//! Config loading and schema binding for Config Morpher
//!
//! Loads TOML, JSON or YAML configs into a `serde_json::Value` mapping and
//! binds them to target schemas, optionally starting from a nested path
//! resolved with [`morph_path`].
//!
//! ```
//! use morph_core::{ConfigMorpher, Format, MorphOptions, Schema};
//! use serde_json::json;
//!
//! let morpher = ConfigMorpher::parse(
//!     "[openai]\napi_key = \"empty\"\nbase_url = \"http://localhost/v1\"\n",
//!     Format::Toml,
//! )
//! .unwrap();
//!
//! let client = Schema::with_params("OpenAI", ["api_key", "base_url", "timeout"]);
//! let bound = morpher
//!     .morph_one(&client, &MorphOptions::new().start_from("openai"))
//!     .unwrap();
//! assert_eq!(bound.get("api_key"), Some(&json!("empty")));
//! assert_eq!(bound.get("timeout"), None);
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod morpher;
pub mod schema;

pub use error::{Error, Result};
pub use format::Format;
pub use morpher::{ConfigMorpher, MorphOptions};
pub use schema::{Bound, Param, Schema};

pub use morph_path::{PathError, PathExpr, PathInput, Segment, resolve, tokenize};
