//! Headless UI components: state, accessibility and pluggable styling.
//!
//! Components here never touch a DOM. Each one derives a small state record
//! and an ARIA attribute map from its props, reacts to events the host
//! forwards, and leaves presentation to a [`StyleAdapter`] that turns
//! `(component tag, state)` into a class string.
//!
//! # Modules
//!
//! - [`adapter`] - The [`StyleAdapter`] trait, the built-in Tailwind, BEM
//!   (`css-variables`) and headless adapters, and [`AdapterRegistry`]
//! - [`config`] - Provider defaults ([`UiProvider`], [`UiConfig`])
//! - [`controls`] - Buttons, fields, checkboxes, switches, cards, alerts
//! - [`interaction`] - Dialog, sheet, popover, tooltip, dropdown, select,
//!   radio group and toasts
//! - [`form`] - Form values, schema validation, field arrays, submission
//! - [`file_input`] - File picking and drop zones
//! - [`position`] - Inline placement styles for floating content
//! - [`theme`] - Light/dark/system mode and theme stylesheet generation
//!
//! # Example
//!
//! ```rust
//! use soave_ui::{AdapterRegistry, ComponentState};
//! use soave_ui::state::{ButtonState, ButtonVariant};
//!
//! let registry = AdapterRegistry::with_builtins();
//! let adapter = registry.get("css-variables").unwrap();
//!
//! let state = ComponentState::Button(ButtonState {
//!     variant: ButtonVariant::Secondary,
//!     ..Default::default()
//! });
//! assert_eq!(adapter.classes("button", &state), "button button--secondary button--md");
//! assert_eq!(registry.get("headless").unwrap().classes("button", &state), "");
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events and installs no subscriber.

pub mod adapter;
pub mod aria;
pub mod classes;
pub mod component;
pub mod config;
pub mod controls;
pub mod error;
pub mod file_input;
pub mod form;
pub mod interaction;
pub mod position;
pub mod state;
pub mod theme;

pub use adapter::{AdapterRegistry, StyleAdapter};
pub use aria::{AriaAttributes, AriaValue};
pub use classes::{merge_classes, ClassList};
pub use component::Component;
pub use config::{ui_config, UiConfig, UiProvider};
pub use error::UiError;
pub use position::{position_styles, Align, Placement, Side, StyleMap};
pub use state::ComponentState;
