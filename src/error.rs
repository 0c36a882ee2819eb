//! Error types.
//!
//! Programmer and configuration mistakes surface as [`UiError`]. User-facing
//! validation problems are never errors: they are recorded as messages on the
//! owning state object (see [`crate::form`] and [`crate::file_input`]).

use thiserror::Error;

/// Error returned by composables, the adapter registry and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A context-dependent composable was used without its ancestor context.
    #[error("provider not found: wrap the component in its {context} provider")]
    ProviderNotFound {
        /// The kind of context that was expected (e.g. `"radio-group"`).
        context: &'static str,
    },

    /// No adapter is registered under the requested name.
    #[error("style adapter '{name}' is not registered")]
    UnknownAdapter { name: String },

    /// A custom adapter tried to take the name of a built-in adapter.
    #[error("style adapter name '{name}' is reserved for a built-in adapter")]
    ReservedAdapterName { name: String },

    /// A form operation referenced a field the schema does not declare.
    #[error("field '{field}' does not exist in the schema")]
    FieldNotFound { field: String },

    /// Configuration could not be merged or deserialized.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Stylesheet template rendering failed.
    #[error("template error: {message}")]
    Template { message: String },
}

impl From<minijinja::Error> for UiError {
    fn from(err: minijinja::Error) -> Self {
        UiError::Template {
            message: err.to_string(),
        }
    }
}
