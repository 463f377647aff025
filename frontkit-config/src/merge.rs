// Deep merge of configuration sources

use crate::ConfigMap;
use serde_json::Value;

/// Merge configuration sources, later sources taking precedence.
///
/// Where both sides hold a mapping at the same key the mappings are merged
/// recursively; in every other case the later value replaces the earlier
/// one outright. Inputs are never modified.
///
/// ```
/// use frontkit_config::{ConfigMap, merge_configs};
/// use serde_json::json;
///
/// let defaults: ConfigMap = serde_json::from_value(json!({
///     "threshold": 0,
///     "i18n": { "wordsAtLimit": "You have 0 words remaining" }
/// })).unwrap();
/// let options: ConfigMap = serde_json::from_value(json!({
///     "threshold": 75,
///     "i18n": { "charactersAtLimit": "No characters left" }
/// })).unwrap();
///
/// let merged = merge_configs([&defaults, &options]);
/// assert_eq!(merged["threshold"], 75);
/// assert_eq!(merged["i18n"]["wordsAtLimit"], "You have 0 words remaining");
/// assert_eq!(merged["i18n"]["charactersAtLimit"], "No characters left");
/// ```
pub fn merge_configs<'a, I>(sources: I) -> ConfigMap
where
    I: IntoIterator<Item = &'a ConfigMap>,
{
    let mut merged = ConfigMap::new();
    let mut count = 0usize;

    for source in sources {
        merge_into(&mut merged, source);
        count += 1;
    }

    frontkit_log::trace!(
        "merged {} configuration sources into {} keys",
        count,
        merged.len()
    );

    merged
}

fn merge_into(target: &mut ConfigMap, source: &ConfigMap) {
    for (key, incoming) in source {
        match (target.get_mut(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}
