//! Target signatures for binding
//!
//! A [`Schema`] describes what a target accepts: a name and its ordered
//! parameters, each optionally carrying a default. Binding fills those
//! parameters from config keys of the same name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Receiver names that are never bound from config
const RECEIVERS: &[&str] = &["self", "cls"];

/// One named parameter of a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// A target's parameter list.
///
/// Deserialized schemas go through the same filtering as the builder, so
/// receivers and repeated names are dropped there too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SchemaDef")]
pub struct Schema {
    pub name: String,
    pub params: Vec<Param>,
}

/// Schema as written in a config file, before filtering
#[derive(Deserialize)]
struct SchemaDef {
    name: String,
    #[serde(default)]
    params: Vec<Param>,
}

impl From<SchemaDef> for Schema {
    fn from(def: SchemaDef) -> Self {
        def.params
            .into_iter()
            .fold(Self::new(def.name), |schema, param| {
                schema.push(param.name, param.default)
            })
    }
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Build a schema from bare parameter names
    pub fn with_params<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        params
            .into_iter()
            .fold(Self::new(name), |schema, param| schema.param(param))
    }

    /// Add a parameter with no default.
    ///
    /// `self`/`cls` and names already declared are ignored.
    pub fn param(self, name: impl Into<String>) -> Self {
        self.push(name.into(), None)
    }

    /// Add a parameter with a default used when the config lacks the key
    pub fn param_with_default(self, name: impl Into<String>, default: Value) -> Self {
        self.push(name.into(), Some(default))
    }

    fn push(mut self, name: String, default: Option<Value>) -> Self {
        if !RECEIVERS.contains(&name.as_str()) && !self.has_param(&name) {
            self.params.push(Param { name, default });
        }
        self
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

/// Parameters bound for one schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// Name of the schema these parameters were bound for
    pub schema: String,
    pub params: Map<String, Value>,
}

impl Bound {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    pub fn into_params(self) -> Map<String, Value> {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receivers_are_skipped() {
        let schema = Schema::with_params("Client.__init__", ["self", "base_url", "cls"]);
        assert_eq!(schema.param_names().collect::<Vec<_>>(), vec!["base_url"]);
    }

    #[test]
    fn test_first_declaration_wins() {
        let schema = Schema::new("f")
            .param_with_default("timeout", json!(30))
            .param("timeout");
        assert_eq!(schema.params.len(), 1);
        assert_eq!(schema.params[0].default, Some(json!(30)));
    }

    #[test]
    fn test_schema_from_toml() {
        let schema: Schema = toml::from_str(
            r#"
name = "create"
[[params]]
name = "model"
[[params]]
name = "temperature"
default = 1.0
"#,
        )
        .unwrap();
        assert!(schema.has_param("model"));
        assert_eq!(schema.params[1].default, Some(json!(1.0)));
    }

    #[test]
    fn test_deserialized_schema_is_filtered() {
        let schema: Schema = serde_json::from_value(json!({
            "name": "Client.__init__",
            "params": [
                {"name": "self"},
                {"name": "timeout", "default": 30},
                {"name": "cls"},
                {"name": "timeout", "default": 60},
                {"name": "base_url"},
            ],
        }))
        .unwrap();

        assert_eq!(
            schema.param_names().collect::<Vec<_>>(),
            vec!["timeout", "base_url"]
        );
        assert_eq!(schema.params[0].default, Some(json!(30)));
    }
}
