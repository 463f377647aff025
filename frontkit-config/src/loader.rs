// Loading schemas, defaults and attribute sets from text or files

use crate::{ConfigError, ConfigMap, ConfigSchema, Dataset, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported source formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    /// Flat `name=value` lines, one data attribute per line
    Attributes,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "attrs" | "env" => Some(FileFormat::Attributes),
            _ => None,
        }
    }
}

/// Configuration source loader
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Pick the format from a file extension
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Read and parse a file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        frontkit_log::debug!("loaded configuration source {}", path.display());
        self.parse(&content)
    }

    /// Parse text in this loader's format
    pub fn parse(&self, content: &str) -> Result<Value> {
        match self.format {
            FileFormat::Json => self.parse_json(content),
            FileFormat::Toml => self.parse_toml(content),
            FileFormat::Attributes => Ok(Value::Object(
                self.parse_attributes(content)
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect(),
            )),
        }
    }

    /// Parse text that must be a mapping (defaults, options)
    pub fn parse_map(&self, content: &str) -> Result<ConfigMap> {
        match self.parse(content)? {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::ParseError(format!(
                "expected a mapping at the top level, found {}",
                kind_name(&other)
            ))),
        }
    }

    /// Parse a component schema
    pub fn parse_schema(&self, content: &str) -> Result<ConfigSchema> {
        serde_json::from_value(self.parse(content)?)
            .map_err(|e| ConfigError::DeserializationError(format!("invalid schema: {}", e)))
    }

    /// Parse a flat attribute set.
    ///
    /// Only meaningful for [`FileFormat::Attributes`]; other formats must
    /// contain a flat mapping of strings.
    pub fn parse_dataset(&self, content: &str) -> Result<Dataset> {
        if self.format == FileFormat::Attributes {
            return Ok(self.parse_attributes(content));
        }

        self.parse_map(content)?
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => Ok((key, s)),
                other => Err(ConfigError::ParseError(format!(
                    "attribute \"{}\" must be a string, found {}",
                    key,
                    kind_name(&other)
                ))),
            })
            .collect()
    }

    fn parse_json(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))
    }

    fn parse_toml(&self, content: &str) -> Result<Value> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

        serde_json::to_value(toml_value)
            .map_err(|e| ConfigError::SerializationError(format!("TOML to JSON conversion error: {}", e)))
    }

    fn parse_attributes(&self, content: &str) -> Dataset {
        let mut dataset = Dataset::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().trim_start_matches("data-");
                let value = value.trim().trim_matches('"').trim_matches('\'');
                dataset.insert(key.to_string(), value.to_string());
            }
        }

        dataset
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
