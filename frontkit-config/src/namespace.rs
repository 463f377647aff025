// Dot-namespaced data attributes to nested configuration

use crate::normalise::normalise_string;
use crate::{ConfigMap, ConfigSchema, Dataset};
use serde_json::Value;

/// Build the nested mapping for one namespace of flat, dotted keys.
///
/// Keys are visited in ascending lexicographic order, so a deeper path
/// (`f.e.l`) always lands after, and overrides, a shorter one (`f.e`)
/// that collides with it. The bare `namespace` key contributes nothing.
/// Leaf values pass through [`normalise_string`] without a declared type.
///
/// ```
/// use frontkit_config::{Dataset, extract_config_by_namespace};
/// use serde_json::json;
///
/// let dataset: Dataset = [
///     ("i18n.key2.one", "The"),
///     ("i18n.key2.other", "Other"),
///     ("module", "accordion"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let i18n = extract_config_by_namespace(&dataset, "i18n");
/// assert_eq!(serde_json::Value::Object(i18n), json!({ "key2": { "one": "The", "other": "Other" } }));
/// ```
pub fn extract_config_by_namespace(dataset: &Dataset, namespace: &str) -> ConfigMap {
    let mut out = ConfigMap::new();

    // BTreeMap iteration is already in ascending key order.
    for (key, raw) in dataset {
        let mut segments = key.split('.');
        if segments.next() != Some(namespace) {
            continue;
        }

        let path: Vec<&str> = segments.collect();
        if path.is_empty() {
            continue;
        }

        insert_path(&mut out, &path, normalise_string(raw, None));
    }

    frontkit_log::trace!(
        "extracted {} top-level keys for namespace \"{}\"",
        out.len(),
        namespace
    );

    out
}

/// Schema-aware extraction.
///
/// Returns `None` unless `namespace` is declared in the schema with
/// `type: "object"`; otherwise behaves as [`extract_config_by_namespace`].
pub fn extract_config_by_schema(
    schema: &ConfigSchema,
    dataset: &Dataset,
    namespace: &str,
) -> Option<ConfigMap> {
    let property = schema.properties.get(namespace)?;
    if !property.is_object() {
        return None;
    }

    Some(extract_config_by_namespace(dataset, namespace))
}

fn insert_path(map: &mut ConfigMap, path: &[&str], value: Value) {
    let Some((leaf, parents)) = path.split_last() else {
        return;
    };

    let mut current = map;
    for segment in parents {
        let entry = current
            .entry(*segment)
            .or_insert_with(|| Value::Object(ConfigMap::new()));

        if !entry.is_object() {
            *entry = Value::Object(ConfigMap::new());
        }

        let Some(next) = entry.as_object_mut() else {
            return;
        };
        current = next;
    }

    current.insert(leaf.to_string(), value);
}
