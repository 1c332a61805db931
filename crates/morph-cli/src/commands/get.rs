//! Get command implementation

use std::path::Path;

use morph_core::ConfigMorpher;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Run the get command
pub fn run_get(file: &Path, path: &str, output: OutputFormat) -> Result<()> {
    let morpher = ConfigMorpher::from_path(file)?;
    let value = morpher.get(path)?;
    tracing::debug!(?file, path, "Resolved value");
    print!("{}", render(value, output)?);
    Ok(())
}

/// Render a value, always ending with a newline
pub fn render(value: &Value, output: OutputFormat) -> Result<String> {
    let mut text = match output {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json() {
        assert_eq!(render(&json!("y"), OutputFormat::Json).unwrap(), "\"y\"\n");
    }

    #[test]
    fn test_render_yaml() {
        assert_eq!(
            render(&json!({"a": 1}), OutputFormat::Yaml).unwrap(),
            "a: 1\n"
        );
    }
}
