//! Command implementations for morph-cli

pub mod bind;
pub mod get;
pub mod tokens;

pub use bind::{BindArgs, run_bind};
pub use get::run_get;
pub use tokens::run_tokens;
