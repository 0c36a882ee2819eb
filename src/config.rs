//! Provider configuration: component defaults shared by a subtree.
//!
//! A [`UiProvider`] carries the merged [`UiConfig`] plus the name of the
//! style adapter the subtree uses. Composables that read defaults take an
//! `Option<&UiProvider>`; without one they fall back to
//! [`UiConfig::default`] and log a warning.
//!
//! # Merging
//!
//! Partial configuration arrives as JSON and is deep-merged over the
//! defaults with [`deep_merge`]: objects merge key by key, everything else
//! replaces, and `null` in the override leaves the default untouched.
//!
//! ```rust
//! use serde_json::json;
//! use soave_ui::config::UiConfig;
//! use soave_ui::state::{ButtonVariant, Size};
//!
//! let config = UiConfig::merged(&json!({ "button": { "default_size": "lg" } })).unwrap();
//! assert_eq!(config.button.default_size, Size::Lg);
//! assert_eq!(config.button.default_variant, ButtonVariant::Primary);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UiError;
use crate::state::{AlertVariant, ButtonVariant, CardPadding, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub default_variant: ButtonVariant,
    pub default_size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub default_size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub default_padding: CardPadding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub default_variant: AlertVariant,
}

/// Component defaults for a provider subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub button: ButtonConfig,
    pub input: InputConfig,
    pub card: CardConfig,
    pub alert: AlertConfig,
}

impl UiConfig {
    /// Deep-merges a partial JSON configuration over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if `overrides` is not an object or
    /// the merged result does not describe a valid configuration (for
    /// example an unknown variant name).
    pub fn merged(overrides: &Value) -> Result<Self, UiError> {
        Self::default().merge(overrides)
    }

    /// Deep-merges a partial JSON configuration over `self`.
    pub fn merge(&self, overrides: &Value) -> Result<Self, UiError> {
        if !overrides.is_object() && !overrides.is_null() {
            return Err(UiError::InvalidConfig {
                message: format!("expected an object, found {}", json_kind(overrides)),
            });
        }

        let base = serde_json::to_value(self).map_err(|e| UiError::InvalidConfig {
            message: e.to_string(),
        })?;
        let merged = deep_merge(&base, overrides);
        serde_json::from_value(merged).map_err(|e| UiError::InvalidConfig {
            message: e.to_string(),
        })
    }
}

/// Recursively merges `source` into a copy of `target`.
///
/// Nested objects on both sides merge key by key. Any other non-null
/// source value replaces the target value, arrays included. `null` source
/// values are skipped.
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            let mut output = target_map.clone();
            for (key, source_value) in source_map {
                if source_value.is_null() {
                    continue;
                }
                let merged = match output.get(key) {
                    Some(target_value) => deep_merge(target_value, source_value),
                    None => source_value.clone(),
                };
                output.insert(key.clone(), merged);
            }
            Value::Object(output)
        }
        (_, Value::Null) => target.clone(),
        (_, source) => source.clone(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Configuration scope shared by a component subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiProvider {
    config: UiConfig,
    adapter: String,
}

impl UiProvider {
    /// Default adapter used when none is named.
    pub const DEFAULT_ADAPTER: &'static str = "tailwind";

    pub fn new(config: UiConfig) -> Self {
        tracing::debug!(?config, "ui provider initialized");
        Self {
            config,
            adapter: Self::DEFAULT_ADAPTER.to_string(),
        }
    }

    /// Builds a provider from a partial JSON configuration.
    pub fn from_json(overrides: &Value) -> Result<Self, UiError> {
        Ok(Self::new(UiConfig::merged(overrides)?))
    }

    /// Selects the style adapter by registry name.
    pub fn with_adapter(mut self, name: impl Into<String>) -> Self {
        self.adapter = name.into();
        self
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Name of the style adapter this subtree renders with.
    pub fn adapter(&self) -> &str {
        &self.adapter
    }
}

impl Default for UiProvider {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

/// Returns the provider's configuration, or the defaults when there is none.
pub fn ui_config(provider: Option<&UiProvider>) -> UiConfig {
    match provider {
        Some(provider) => provider.config,
        None => {
            tracing::warn!("no ui provider found, using default configuration");
            UiConfig::default()
        }
    }
}

/// Returns the adapter name for `provider`, defaulting to `"tailwind"`.
pub fn adapter_name(provider: Option<&UiProvider>) -> &str {
    provider.map_or(UiProvider::DEFAULT_ADAPTER, UiProvider::adapter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.button.default_variant, ButtonVariant::Primary);
        assert_eq!(config.button.default_size, Size::Md);
        assert_eq!(config.input.default_size, Size::Md);
        assert_eq!(config.card.default_padding, CardPadding::Md);
        assert_eq!(config.alert.default_variant, AlertVariant::Default);
    }

    #[test]
    fn test_merged_partial() {
        let config = UiConfig::merged(&json!({
            "button": { "default_variant": "ghost" },
            "card": { "default_padding": "none" }
        }))
        .unwrap();
        assert_eq!(config.button.default_variant, ButtonVariant::Ghost);
        assert_eq!(config.button.default_size, Size::Md);
        assert_eq!(config.card.default_padding, CardPadding::None);
    }

    #[test]
    fn test_merged_null_is_ignored() {
        let config = UiConfig::merged(&json!({ "button": { "default_size": null } })).unwrap();
        assert_eq!(config.button.default_size, Size::Md);
        assert_eq!(UiConfig::merged(&Value::Null).unwrap(), UiConfig::default());
    }

    #[test]
    fn test_merged_invalid_variant() {
        let err = UiConfig::merged(&json!({ "button": { "default_variant": "shiny" } }))
            .unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig { .. }));
    }

    #[test]
    fn test_merged_rejects_non_object() {
        let err = UiConfig::merged(&json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_deep_merge_nested() {
        let target = json!({ "a": { "b": 1, "c": 2 }, "d": [1, 2] });
        let source = json!({ "a": { "c": 3 }, "d": [9], "e": "new" });
        assert_eq!(
            deep_merge(&target, &source),
            json!({ "a": { "b": 1, "c": 3 }, "d": [9], "e": "new" })
        );
    }

    #[test]
    fn test_deep_merge_object_replaces_scalar() {
        let target = json!({ "a": 1 });
        let source = json!({ "a": { "nested": true } });
        assert_eq!(deep_merge(&target, &source), json!({ "a": { "nested": true } }));
    }

    #[test]
    fn test_ui_config_without_provider() {
        assert_eq!(ui_config(None), UiConfig::default());
        assert_eq!(adapter_name(None), "tailwind");
    }

    #[test]
    fn test_provider() {
        let provider = UiProvider::from_json(&json!({ "alert": { "default_variant": "info" } }))
            .unwrap()
            .with_adapter("css-variables");
        assert_eq!(provider.adapter(), "css-variables");
        assert_eq!(ui_config(Some(&provider)).alert.default_variant, AlertVariant::Info);
        assert_eq!(adapter_name(Some(&provider)), "css-variables");
    }
}
