//! Facet display configuration.
//!
//! The facet domain is the one place the service accepts arbitrary nested
//! JSON from the admin UI, so reads and writes both funnel through
//! [`FacetConfig::from_value`], which never fails: unknown shapes are
//! dropped or coerced rather than rejected.
//!
//! Wire names in this domain are snake_case; older records were written
//! that way and the admin UI still submits them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{coerce_bool, coerce_i64};
use crate::defaults;

/// Display settings for one facet field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetEntry {
    pub title: String,
    pub description: String,
    pub order: i64,
    pub enabled: bool,
    pub show_count: bool,
    pub max_items: i64,
}

impl Default for FacetEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            order: defaults::FACET_ORDER,
            enabled: defaults::FACET_ENABLED,
            show_count: defaults::FACET_SHOW_COUNT,
            max_items: defaults::FACET_MAX_ITEMS,
        }
    }
}

impl FacetEntry {
    /// Normalize a raw entry for `field`. `title` falls back to the field
    /// name itself; numeric and boolean sub-fields are coerced.
    fn from_value(field: &str, value: &Value) -> Self {
        let d = FacetEntry::default();
        let obj = value.as_object();
        let get = |key: &str| obj.and_then(|o| o.get(key));

        Self {
            title: get("title")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(field)
                .to_string(),
            description: get("description")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            order: get("order").and_then(coerce_i64).unwrap_or(d.order),
            enabled: get("enabled").and_then(coerce_bool).unwrap_or(d.enabled),
            show_count: get("show_count")
                .and_then(coerce_bool)
                .unwrap_or(d.show_count),
            max_items: get("max_items")
                .and_then(coerce_i64)
                .unwrap_or(d.max_items),
        }
    }
}

/// Defaults applied to facets without per-field overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetDefaults {
    pub enabled: bool,
    pub show_count: bool,
    pub max_items: i64,
}

impl Default for FacetDefaults {
    fn default() -> Self {
        Self {
            enabled: defaults::FACET_ENABLED,
            show_count: defaults::FACET_SHOW_COUNT,
            max_items: defaults::FACET_MAX_ITEMS,
        }
    }
}

impl FacetDefaults {
    fn from_value(value: Option<&Value>) -> Self {
        let d = FacetDefaults::default();
        let obj = value.and_then(Value::as_object);
        let get = |key: &str| obj.and_then(|o| o.get(key));

        Self {
            enabled: get("enabled").and_then(coerce_bool).unwrap_or(d.enabled),
            show_count: get("show_count")
                .and_then(coerce_bool)
                .unwrap_or(d.show_count),
            max_items: get("max_items")
                .and_then(coerce_i64)
                .unwrap_or(d.max_items),
        }
    }
}

/// Facet configuration: per-field display settings, a global ordering, and
/// the fallback defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetConfig {
    pub facets: BTreeMap<String, FacetEntry>,
    pub global_order: Vec<String>,
    pub default_settings: FacetDefaults,
}

impl FacetConfig {
    /// Normalize an arbitrary JSON value into a valid facet configuration.
    ///
    /// Only non-empty string field names are kept; `global_order` is
    /// filtered to strings; `default_settings` is always fully present.
    pub fn from_value(value: &Value) -> Self {
        let obj = value.as_object();
        let get = |key: &str| obj.and_then(|o| o.get(key));

        let facets = get("facets")
            .and_then(Value::as_object)
            .map(|raw| {
                raw.iter()
                    .filter(|(field, _)| !field.is_empty())
                    .map(|(field, entry)| (field.clone(), FacetEntry::from_value(field, entry)))
                    .collect()
            })
            .unwrap_or_default();

        let global_order = get("global_order")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            facets,
            global_order,
            default_settings: FacetDefaults::from_value(get("default_settings")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_empty_field_names_and_coerces_order() {
        let input = json!({
            "facets": {
                "": {"title": "ghost"},
                "valid_field": {"order": "3"}
            }
        });
        let config = FacetConfig::from_value(&input);
        assert_eq!(config.facets.len(), 1);
        let entry = &config.facets["valid_field"];
        assert_eq!(entry.order, 3);
    }

    #[test]
    fn title_defaults_to_field_name() {
        let input = json!({"facets": {"organisation": {}}});
        let config = FacetConfig::from_value(&input);
        assert_eq!(config.facets["organisation"].title, "organisation");
    }

    #[test]
    fn coerces_boolean_and_numeric_sub_fields() {
        let input = json!({
            "facets": {
                "status": {
                    "enabled": "false",
                    "show_count": 1,
                    "max_items": "25"
                }
            }
        });
        let entry = &FacetConfig::from_value(&input).facets["status"];
        assert!(!entry.enabled);
        assert!(entry.show_count);
        assert_eq!(entry.max_items, 25);
    }

    #[test]
    fn global_order_filtered_to_strings() {
        let input = json!({"global_order": ["status", 7, null, "organisation"]});
        let config = FacetConfig::from_value(&input);
        assert_eq!(config.global_order, vec!["status", "organisation"]);
    }

    #[test]
    fn default_settings_always_fully_present() {
        let config = FacetConfig::from_value(&json!({}));
        assert!(config.default_settings.enabled);
        assert!(config.default_settings.show_count);
        assert_eq!(config.default_settings.max_items, 10);

        let config =
            FacetConfig::from_value(&json!({"default_settings": {"max_items": "5"}}));
        assert_eq!(config.default_settings.max_items, 5);
        assert!(config.default_settings.enabled);
    }

    #[test]
    fn garbage_input_yields_empty_config() {
        let config = FacetConfig::from_value(&json!("not an object"));
        assert!(config.facets.is_empty());
        assert!(config.global_order.is_empty());
        assert_eq!(config.default_settings, FacetDefaults::default());
    }
}
