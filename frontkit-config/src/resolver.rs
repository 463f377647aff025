// Resolution of a component's final configuration

use crate::{
    ConfigError, ConfigLoader, ConfigMap, ConfigSchema, Dataset, FileFormat, ResolvedConfig,
    Result, merge_configs, normalise_dataset, validate_config,
};
use std::path::Path;

/// Resolve a component configuration from its sources.
///
/// Precedence, lowest first: `defaults`, caller `options`, then the data
/// attributes normalised through `schema`. The merged result is validated
/// and the first error, prefixed with `component`, is returned on failure.
///
/// ```
/// use frontkit_config::{ConfigMap, ConfigSchema, Dataset, PropertyType, resolve_config};
/// use serde_json::json;
///
/// let schema = ConfigSchema::new()
///     .property("maxlength", PropertyType::Number)
///     .any_of(["maxlength"], "maxlength is required");
/// let defaults: ConfigMap = serde_json::from_value(json!({ "threshold": 0 })).unwrap();
/// let dataset: Dataset = [("maxlength".to_string(), "10".to_string())].into();
///
/// let config = resolve_config("CharacterCount", &schema, &defaults, None, Some(&dataset)).unwrap();
/// assert_eq!(config.get_number("maxlength").unwrap(), 10.0);
///
/// let err = resolve_config("CharacterCount", &schema, &defaults, None, None).unwrap_err();
/// assert_eq!(err.to_string(), "CharacterCount: maxlength is required");
/// ```
pub fn resolve_config(
    component: &str,
    schema: &ConfigSchema,
    defaults: &ConfigMap,
    options: Option<&ConfigMap>,
    dataset: Option<&Dataset>,
) -> Result<ResolvedConfig> {
    let empty = ConfigMap::new();
    let attributes = dataset
        .map(|d| normalise_dataset(schema, d))
        .unwrap_or_default();

    let merged = merge_configs([defaults, options.unwrap_or(&empty), &attributes]);

    let errors = validate_config(schema, &merged);
    if let Some(first) = errors.into_iter().next() {
        frontkit_log::debug!("{} configuration rejected: {}", component, first);
        return Err(ConfigError::validation(component, first));
    }

    frontkit_log::debug!("resolved {} configuration ({} keys)", component, merged.len());
    Ok(ResolvedConfig::new(merged))
}

/// A component's configuration contract: its name, schema and defaults.
///
/// Owned as plain data so any number of instances can be resolved from it.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    component: String,
    schema: ConfigSchema,
    defaults: ConfigMap,
}

impl ConfigResolver {
    pub fn new(component: impl Into<String>, schema: ConfigSchema, defaults: ConfigMap) -> Self {
        Self {
            component: component.into(),
            schema,
            defaults,
        }
    }

    pub fn builder(component: impl Into<String>) -> ConfigResolverBuilder {
        ConfigResolverBuilder::new(component)
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn schema(&self) -> &ConfigSchema {
        &self.schema
    }

    pub fn defaults(&self) -> &ConfigMap {
        &self.defaults
    }

    /// Resolve one instance's configuration
    pub fn resolve(
        &self,
        options: Option<&ConfigMap>,
        dataset: Option<&Dataset>,
    ) -> Result<ResolvedConfig> {
        resolve_config(&self.component, &self.schema, &self.defaults, options, dataset)
    }
}

/// Builder for ConfigResolver
pub struct ConfigResolverBuilder {
    component: String,
    schema: ConfigSchema,
    defaults: Vec<ConfigMap>,
    schema_file: Option<(String, FileFormat)>,
    default_files: Vec<(String, FileFormat)>,
}

impl ConfigResolverBuilder {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            schema: ConfigSchema::default(),
            defaults: Vec::new(),
            schema_file: None,
            default_files: Vec::new(),
        }
    }

    /// Use an in-memory schema
    pub fn schema(mut self, schema: ConfigSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Load the schema from a file at build time
    pub fn schema_file(mut self, path: impl AsRef<Path>, format: FileFormat) -> Self {
        self.schema_file = Some((path.as_ref().display().to_string(), format));
        self
    }

    /// Add a layer of defaults; later layers win
    pub fn defaults(mut self, defaults: ConfigMap) -> Self {
        self.defaults.push(defaults);
        self
    }

    /// Add a defaults file, merged after in-memory defaults
    pub fn defaults_file(mut self, path: impl AsRef<Path>, format: FileFormat) -> Self {
        self.default_files.push((path.as_ref().display().to_string(), format));
        self
    }

    pub fn build(self) -> Result<ConfigResolver> {
        let schema = match self.schema_file {
            Some((path, format)) => {
                let value = ConfigLoader::new(format).load_file(&path)?;
                serde_json::from_value(value).map_err(|e| {
                    ConfigError::DeserializationError(format!("invalid schema in {}: {}", path, e))
                })?
            }
            None => self.schema,
        };

        let mut layers = self.defaults;
        for (path, format) in self.default_files {
            let loader = ConfigLoader::new(format);
            match loader.load_file(&path)? {
                serde_json::Value::Object(map) => layers.push(map),
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "defaults in {} must be a mapping",
                        path
                    )));
                }
            }
        }

        let defaults = merge_configs(&layers);
        Ok(ConfigResolver::new(self.component, schema, defaults))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertyType;
    use serde_json::{Value, json};

    fn map(value: Value) -> ConfigMap {
        serde_json::from_value(value).unwrap()
    }

    fn accordion() -> ConfigResolver {
        ConfigResolver::new(
            "Accordion",
            ConfigSchema::new()
                .property("i18n", PropertyType::Object)
                .property("rememberExpanded", PropertyType::Boolean),
            map(json!({
                "i18n": { "showAllSections": "Show all sections", "hideAllSections": "Hide all sections" },
                "rememberExpanded": true
            })),
        )
    }

    #[test]
    fn test_defaults_only() {
        let config = accordion().resolve(None, None).unwrap();
        assert!(config.get_bool("rememberExpanded").unwrap());
        assert_eq!(config.get_string("i18n.showAllSections").unwrap(), "Show all sections");
    }

    #[test]
    fn test_precedence_defaults_options_attributes() {
        let options = map(json!({
            "rememberExpanded": false,
            "i18n": { "showAllSections": "Dangos adrannau" }
        }));
        let dataset: Dataset = [
            ("remember-expanded".to_string(), "true".to_string()),
            ("i18n.hideAllSections".to_string(), "Cuddio adrannau".to_string()),
        ]
        .into();

        let config = accordion().resolve(Some(&options), Some(&dataset)).unwrap();
        assert!(!config.get_bool("rememberExpanded").unwrap());
        assert_eq!(config.get_string("i18n.showAllSections").unwrap(), "Dangos adrannau");
        assert_eq!(config.get_string("i18n.hideAllSections").unwrap(), "Cuddio adrannau");
    }

    #[test]
    fn test_attribute_overrides_option() {
        let options = map(json!({ "rememberExpanded": true }));
        let dataset: Dataset = [("rememberExpanded".to_string(), "false".to_string())].into();

        let config = accordion().resolve(Some(&options), Some(&dataset)).unwrap();
        assert!(!config.get_bool("rememberExpanded").unwrap());
    }

    #[test]
    fn test_validation_error_names_component() {
        let resolver = ConfigResolver::new(
            "CharacterCount",
            ConfigSchema::new()
                .property("maxlength", PropertyType::Number)
                .any_of(["maxlength"], "Either \"maxlength\" or \"maxwords\" must be provided"),
            ConfigMap::new(),
        );

        match resolver.resolve(None, None) {
            Err(ConfigError::Validation { component, message }) => {
                assert_eq!(component, "CharacterCount");
                assert!(message.contains("maxwords"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|c| c.into_inner())),
        }
    }

    #[test]
    fn test_builder_layers_defaults() {
        let resolver = ConfigResolver::builder("Button")
            .schema(ConfigSchema::new().property("preventDoubleClick", PropertyType::Boolean))
            .defaults(map(json!({ "preventDoubleClick": false, "label": "Save" })))
            .defaults(map(json!({ "label": "Continue" })))
            .build()
            .unwrap();

        assert_eq!(resolver.component(), "Button");
        assert_eq!(resolver.defaults()["label"], "Continue");

        let config = resolver.resolve(None, None).unwrap();
        assert!(!config.get_bool("preventDoubleClick").unwrap());
    }

    #[test]
    fn test_builder_reports_missing_files() {
        let result = ConfigResolver::builder("Button")
            .defaults_file("/no/such/defaults.json", FileFormat::Json)
            .build();
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
