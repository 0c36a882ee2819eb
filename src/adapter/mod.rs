//! Style adapters: component state in, class string out.
//!
//! A [`StyleAdapter`] is the only place where presentation enters the
//! library. Composables compute a [`ComponentState`] and ask the adapter
//! selected by the provider for the matching class string. Swapping the
//! adapter changes nothing but those strings.
//!
//! Three adapters are built in:
//!
//! | Name | Strategy |
//! |------|----------|
//! | `tailwind` | Utility classes, conflicts resolved by [`merge_classes`](crate::classes::merge_classes) |
//! | `css-variables` | BEM class names (`button--primary`) styled through CSS custom properties |
//! | `headless` | No classes at all |
//!
//! # Example
//!
//! ```rust
//! use soave_ui::adapter::AdapterRegistry;
//! use soave_ui::state::{ButtonState, ButtonVariant, ComponentState};
//!
//! let registry = AdapterRegistry::with_builtins();
//! let adapter = registry.get("css-variables").unwrap();
//! let state = ComponentState::Button(ButtonState {
//!     variant: ButtonVariant::Ghost,
//!     ..Default::default()
//! });
//! assert_eq!(adapter.classes("button", &state), "button button--ghost button--md");
//! ```

mod css_variables;
mod headless;
mod registry;
mod tailwind;

pub use css_variables::CssVariablesAdapter;
pub use headless::HeadlessAdapter;
pub use registry::{AdapterRegistry, BUILTIN_ADAPTERS};
pub use tailwind::TailwindAdapter;

use crate::component::Component;
use crate::state::ComponentState;

/// Translates component state into a class string.
///
/// Implementations must be pure: the output depends only on the two
/// arguments, and unknown component tags produce an empty string rather
/// than an error.
pub trait StyleAdapter: Send + Sync {
    /// Registry name, e.g. `"tailwind"`.
    fn name(&self) -> &str;

    /// Human-readable summary of the styling strategy.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Returns the classes for `component` in `state`.
    fn classes(&self, component: &str, state: &ComponentState) -> String;
}

/// Resolves a tag for adapters that dispatch on [`Component`].
///
/// Adapters call this first and return `""` on `None`.
pub(crate) fn parse_tag(component: &str) -> Option<Component> {
    Component::from_tag(component)
}
