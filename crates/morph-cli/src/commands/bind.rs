//! Bind command implementation

use std::path::PathBuf;

use morph_core::{ConfigMorpher, MorphOptions, Schema};
use serde_json::Value;

use crate::error::{CliError, Result};

/// Arguments of the bind command
#[derive(Debug, Clone)]
pub struct BindArgs {
    pub file: PathBuf,
    pub schema: String,
    pub params: Vec<String>,
    pub start_from: Option<String>,
    pub deny_extra: bool,
    pub all_params: bool,
}

/// Run the bind command
pub fn run_bind(args: BindArgs) -> Result<()> {
    let schema = build_schema(&args.schema, &args.params)?;
    let mut options = MorphOptions::new()
        .allow_extra_keys(!args.deny_extra)
        .config_keys_only(!args.all_params);
    if let Some(start_from) = args.start_from {
        options = options.start_from(start_from);
    }

    let morpher = ConfigMorpher::from_path(&args.file)?;
    let bound = morpher.morph_one(&schema, &options)?;
    println!("{}", serde_json::to_string_pretty(&bound.params)?);
    Ok(())
}

/// Build a schema from `NAME` / `NAME=DEFAULT` parameter specs.
fn build_schema(name: &str, specs: &[String]) -> Result<Schema> {
    specs.iter().try_fold(Schema::new(name), |schema, spec| {
        let (param, default) = match spec.split_once('=') {
            Some((param, default)) => (param, Some(parse_default(default))),
            None => (spec.as_str(), None),
        };
        if param.is_empty() {
            return Err(CliError::user(format!("Empty parameter name in '{spec}'")));
        }
        Ok(match default {
            Some(default) => schema.param_with_default(param, default),
            None => schema.param(param),
        })
    })
}

fn parse_default(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
