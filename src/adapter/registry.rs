//! Name-to-adapter registry.
//!
//! # Design
//!
//! The registry is an ordinary value. It is built once at startup,
//! usually with [`AdapterRegistry::with_builtins`], and passed by reference
//! to whatever resolves the provider's adapter name. Custom adapters are
//! added with [`AdapterRegistry::register`].
//!
//! Built-in names are reserved: a custom adapter can sit beside the
//! built-ins but can never shadow one, so `"headless"` always means "no
//! classes" wherever a registry from `with_builtins` is used.
//!
//! # Example
//!
//! ```rust
//! use soave_ui::adapter::{AdapterRegistry, StyleAdapter};
//! use soave_ui::state::ComponentState;
//!
//! struct Bootstrap;
//!
//! impl StyleAdapter for Bootstrap {
//!     fn name(&self) -> &str {
//!         "bootstrap"
//!     }
//!
//!     fn classes(&self, component: &str, _state: &ComponentState) -> String {
//!         match component {
//!             "button" => "btn btn-primary".to_string(),
//!             _ => String::new(),
//!         }
//!     }
//! }
//!
//! let mut registry = AdapterRegistry::with_builtins();
//! registry.register(Bootstrap).unwrap();
//! assert_eq!(registry.names(), vec!["bootstrap", "css-variables", "headless", "tailwind"]);
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{CssVariablesAdapter, HeadlessAdapter, StyleAdapter, TailwindAdapter};
use crate::error::UiError;

/// Names of the adapters registered by [`AdapterRegistry::with_builtins`].
pub const BUILTIN_ADAPTERS: &[&str] = &["tailwind", "css-variables", "headless"];

/// Registry of style adapters keyed by name.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<String, Arc<dyn StyleAdapter>>,
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.names())
            .finish()
    }
}

impl AdapterRegistry {
    /// Creates an empty registry.
    ///
    /// Most callers want [`AdapterRegistry::with_builtins`] instead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the three built-in adapters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(Arc::new(TailwindAdapter));
        registry.insert(Arc::new(CssVariablesAdapter));
        registry.insert(Arc::new(HeadlessAdapter));
        registry
    }

    fn insert(&mut self, adapter: Arc<dyn StyleAdapter>) {
        let name = adapter.name().to_string();
        tracing::debug!(adapter = %name, "registered style adapter");
        self.adapters.insert(name, adapter);
    }

    /// Registers a custom adapter under its own [`StyleAdapter::name`].
    ///
    /// Registering again under the same custom name replaces the previous
    /// adapter.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ReservedAdapterName`] if the name belongs to a
    /// built-in adapter.
    pub fn register<A>(&mut self, adapter: A) -> Result<(), UiError>
    where
        A: StyleAdapter + 'static,
    {
        self.register_arc(Arc::new(adapter))
    }

    /// Registers an adapter that is already shared.
    pub fn register_arc(&mut self, adapter: Arc<dyn StyleAdapter>) -> Result<(), UiError> {
        let name = adapter.name();
        if BUILTIN_ADAPTERS.contains(&name) {
            return Err(UiError::ReservedAdapterName {
                name: name.to_string(),
            });
        }
        self.insert(adapter);
        Ok(())
    }

    /// Looks up an adapter by name.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownAdapter`] if nothing is registered under
    /// `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn StyleAdapter>, UiError> {
        self.adapters
            .get(name)
            .cloned()
            .ok_or_else(|| UiError::UnknownAdapter {
                name: name.to_string(),
            })
    }

    /// Returns `true` if an adapter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    /// Iterates over all registered adapters in name order.
    pub fn adapters(&self) -> impl Iterator<Item = &Arc<dyn StyleAdapter>> {
        self.adapters.values()
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.adapters.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
