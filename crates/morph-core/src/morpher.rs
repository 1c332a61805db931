//! Binding config mappings to schemas
//!
//! [`ConfigMorpher`] owns a loaded config (always a mapping at the root) and
//! hands out parameter sets shaped by [`Schema`]s, optionally starting from a
//! nested sub-mapping selected with a path.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use morph_path::{
    PathExpr, PathInput, kind_name, render_location, resolve, resolve_segments, tokenize,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::format::Format;
use crate::schema::{Bound, Schema};

/// Name used in errors for configs that did not come from a file
const INLINE_ORIGIN: &str = "<inline>";

/// Options controlling [`ConfigMorpher::morph`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphOptions {
    /// Path to the sub-mapping binding starts from; the root when `None`
    pub start_from: Option<PathInput>,
    /// Tolerate config keys that no schema consumes
    pub allow_extra_keys: bool,
    /// Only return parameters whose keys exist in the config, instead of
    /// filling the rest with defaults (or `null`)
    pub config_keys_only: bool,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            start_from: None,
            allow_extra_keys: true,
            config_keys_only: true,
        }
    }
}

impl MorphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_from(mut self, path: impl Into<PathInput>) -> Self {
        self.start_from = Some(path.into());
        self
    }

    pub fn allow_extra_keys(mut self, allow: bool) -> Self {
        self.allow_extra_keys = allow;
        self
    }

    pub fn config_keys_only(mut self, only: bool) -> Self {
        self.config_keys_only = only;
        self
    }
}

/// A loaded config, ready to be morphed into parameter sets
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigMorpher {
    config: Value,
}

impl ConfigMorpher {
    /// Wrap an in-memory config. The root must be a mapping.
    pub fn new(config: Value) -> Result<Self> {
        if !config.is_object() {
            return Err(Error::NotAMapping {
                at: render_location(&[]),
                found: kind_name(&config),
            });
        }
        Ok(Self { config })
    }

    /// Parse config source text in the given format
    pub fn parse(source: &str, format: Format) -> Result<Self> {
        let config = format.parse(source).map_err(|message| Error::ConfigParse {
            path: INLINE_ORIGIN.into(),
            format: format.name().into(),
            message,
        })?;
        Self::new(config)
    }

    /// Load a config file, detecting the format from its extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
            extension: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })?;
        Self::load(path, format)
    }

    pub fn from_toml(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(path.as_ref(), Format::Toml)
    }

    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(path.as_ref(), Format::Json)
    }

    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(path.as_ref(), Format::Yaml)
    }

    fn load(path: &Path, format: Format) -> Result<Self> {
        tracing::debug!(?path, format = format.name(), "Loading config");
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = format.parse(&content).map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        })?;
        Self::new(config)
    }

    /// The loaded config
    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Take the loaded config back out
    pub fn into_config(self) -> Value {
        self.config
    }

    /// Resolve a path against the loaded config
    pub fn get<P: PathExpr + ?Sized>(&self, path: &P) -> Result<&Value> {
        Ok(resolve(&self.config, path)?)
    }

    /// Select the mapping binding starts from, plus its location for errors
    fn start(&self, start_from: Option<&PathInput>) -> Result<(&Map<String, Value>, String)> {
        let (value, at) = match start_from {
            Some(path) => {
                let segments = tokenize(path)?;
                let value = resolve_segments(&self.config, &segments)?;
                (value, render_location(&segments))
            }
            None => (&self.config, render_location(&[])),
        };
        match value.as_object() {
            Some(map) => Ok((map, at)),
            None => Err(Error::NotAMapping {
                at,
                found: kind_name(value),
            }),
        }
    }

    /// Bind the config to each schema, in order.
    ///
    /// Each schema takes the config entries named like its parameters. When
    /// `config_keys_only` is off, parameters missing from the config are
    /// filled with their default, or `null` without one.
    ///
    /// # Errors
    ///
    /// - path errors from `start_from`
    /// - [`Error::NotAMapping`] if the starting value is not a mapping
    /// - [`Error::UnusedKeys`] if extra keys are denied and some key was not
    ///   consumed by any schema
    pub fn morph(&self, schemas: &[Schema], options: &MorphOptions) -> Result<Vec<Bound>> {
        let (config, at) = self.start(options.start_from.as_ref())?;
        let mut unused: BTreeSet<&str> = config.keys().map(String::as_str).collect();
        let mut outputs = Vec::with_capacity(schemas.len());

        for schema in schemas {
            let mut params = Map::new();
            for param in &schema.params {
                match config.get(&param.name) {
                    Some(value) => {
                        unused.remove(param.name.as_str());
                        params.insert(param.name.clone(), value.clone());
                    }
                    None if options.config_keys_only => {}
                    None => {
                        let fallback = param.default.clone().unwrap_or(Value::Null);
                        params.insert(param.name.clone(), fallback);
                    }
                }
            }
            tracing::debug!(schema = %schema.name, %at, bound = params.len(), "Bound schema");
            outputs.push(Bound {
                schema: schema.name.clone(),
                params,
            });
        }

        if !unused.is_empty() {
            let keys: Vec<String> = unused.into_iter().map(String::from).collect();
            if !options.allow_extra_keys {
                return Err(Error::UnusedKeys { keys });
            }
            tracing::debug!(?keys, %at, "Config keys not used by any schema");
        }

        Ok(outputs)
    }

    /// Bind a single schema
    pub fn morph_one(&self, schema: &Schema, options: &MorphOptions) -> Result<Bound> {
        let mut outputs = self.morph(std::slice::from_ref(schema), options)?;
        Ok(outputs.remove(0))
    }

    /// Deserialize the starting sub-mapping into `T`.
    ///
    /// Only `start_from` applies; unknown keys are dropped unless `T` uses
    /// `#[serde(deny_unknown_fields)]`.
    pub fn morph_into<T: DeserializeOwned>(&self, options: &MorphOptions) -> Result<T> {
        let (config, at) = self.start(options.start_from.as_ref())?;
        serde_json::from_value(Value::Object(config.clone()))
            .map_err(|source| Error::Deserialize { at, source })
    }
}
