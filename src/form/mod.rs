//! Form state with schema validation.
//!
//! A [`Form`] holds JSON values keyed by field name, the current error
//! message per field, which fields were touched, and the dirty and
//! submitting flags. Validation runs against a [`Schema`].
//!
//! # Example
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_json::json;
//! use soave_ui::form::{Form, Rule, Schema, SubmitError};
//!
//! #[derive(Deserialize)]
//! struct Signup {
//!     email: String,
//! }
//!
//! let schema = Schema::new().field("email", Rule::new().required("Required").email("Invalid email"));
//! let mut form = Form::new(schema);
//!
//! form.set_field_value("email", json!("not-an-email"));
//! let result = futures::executor::block_on(
//!     form.submit(|_: Signup| async { Ok::<(), std::convert::Infallible>(()) }),
//! );
//! assert!(matches!(result, Err(SubmitError::Validation)));
//! assert_eq!(form.error("email"), Some("Invalid email"));
//! ```
//!
//! # Design
//!
//! Validity is recomputed on demand by [`Form::is_valid`] and never cached.
//! Submission borrows the form mutably for the whole handler, so the
//! handler receives parsed data rather than the form itself. Code that must
//! observe the submitting flag while the handler runs (a spinner on the
//! submit button, say) takes a [`SubmittingHandle`] beforehand.

mod field_array;
mod schema;

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::UiError;

pub use field_array::FieldArray;
pub use schema::{Rule, Schema};

/// Why [`Form::submit`] did not complete.
#[derive(Debug, Error)]
pub enum SubmitError<E> {
    /// At least one field failed validation; see [`Form::errors`].
    #[error("form has validation errors")]
    Validation,

    /// The values passed validation but did not deserialize into the
    /// handler's input type.
    #[error("form values could not be parsed: {0}")]
    Parse(String),

    #[error("submit handler failed: {0}")]
    Handler(E),
}

/// Read-only view of a form's submitting flag, usable while
/// [`Form::submit`] holds the form.
#[derive(Debug, Clone)]
pub struct SubmittingHandle(Arc<AtomicBool>);

impl SubmittingHandle {
    pub fn is_submitting(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// Each form owns its flag; a cloned form starts from the current value but
// does not share it.
#[derive(Debug, Default)]
struct SubmittingFlag(Arc<AtomicBool>);

impl Clone for SubmittingFlag {
    fn clone(&self) -> Self {
        Self(Arc::new(AtomicBool::new(self.0.load(Ordering::Acquire))))
    }
}

// Clears the submitting flag however the handler future ends, including
// being dropped before completion.
struct Submitting(Arc<AtomicBool>);

impl Submitting {
    fn start(flag: &SubmittingFlag) -> Self {
        flag.0.store(true, Ordering::Release);
        Self(Arc::clone(&flag.0))
    }
}

impl Drop for Submitting {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    schema: Schema,
    values: Map<String, Value>,
    errors: BTreeMap<String, String>,
    touched: BTreeSet<String>,
    form_error: Option<String>,
    submitting: SubmittingFlag,
    is_dirty: bool,
}

impl Form {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            ..Default::default()
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// The last whole-form failure, such as values not matching the submit
    /// handler's input type.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn touched(&self) -> impl Iterator<Item = &str> {
        self.touched.iter().map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.0.load(Ordering::Acquire)
    }

    /// A handle that reports [`Form::is_submitting`] without borrowing the
    /// form.
    pub fn submitting_handle(&self) -> SubmittingHandle {
        SubmittingHandle(Arc::clone(&self.submitting.0))
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Whether the current values satisfy the schema. Does not record errors.
    pub fn is_valid(&self) -> bool {
        self.schema.validate(&self.values).is_empty()
    }

    /// Merges `values` into the form, key by key.
    pub fn set_values(&mut self, values: Map<String, Value>) {
        self.values.extend(values);
        self.is_dirty = true;
    }

    pub fn set_field_value(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field.into(), value);
        self.is_dirty = true;
    }

    /// Validates one field, marking it touched and the form dirty.
    ///
    /// A field the schema does not declare records a "does not exist"
    /// message as its error.
    pub fn validate_field(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        self.is_dirty = true;

        let result = match self.schema.rule(field) {
            Some(rule) => rule.check(self.values.get(field)),
            None => Err(UiError::FieldNotFound {
                field: field.to_string(),
            }
            .to_string()),
        };
        match result {
            Ok(()) => {
                self.errors.remove(field);
            }
            Err(message) => {
                self.errors.insert(field.to_string(), message);
            }
        }
    }

    /// Validates every declared field, replacing the error map.
    ///
    /// Failing fields are marked touched. Returns `true` when all pass.
    pub fn validate_all(&mut self) -> bool {
        let failures = self.schema.validate(&self.values);
        self.errors.clear();
        for (field, message) in failures {
            self.touched.insert(field.clone());
            self.errors.entry(field).or_insert(message);
        }
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.touched.clear();
        self.form_error = None;
        self.is_dirty = false;
        tracing::debug!("form reset");
    }

    /// List helpers for an array-valued field.
    pub fn field_array(&mut self, field: impl Into<String>) -> FieldArray<'_> {
        FieldArray::new(self, field.into())
    }

    /// Validates, parses the values into `T` and runs `handler`.
    ///
    /// The handler is not called unless every field validates and the
    /// values deserialize. `is_submitting` is set only while the handler
    /// runs.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Validation`] when a field fails its rule.
    /// - [`SubmitError::Parse`] when the values do not fit `T`; the message
    ///   is also kept in [`Form::form_error`].
    /// - [`SubmitError::Handler`] with whatever the handler returned.
    pub async fn submit<T, E, F, Fut>(&mut self, handler: F) -> Result<(), SubmitError<E>>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.form_error = None;
        if !self.validate_all() {
            tracing::debug!(errors = self.errors.len(), "form submit blocked by validation");
            return Err(SubmitError::Validation);
        }

        let data: T = match serde_json::from_value(Value::Object(self.values.clone())) {
            Ok(data) => data,
            Err(e) => {
                let message = e.to_string();
                self.form_error = Some(message.clone());
                return Err(SubmitError::Parse(message));
            }
        };

        tracing::debug!("form submit");
        let submitting = Submitting::start(&self.submitting);
        let result = handler(data).await;
        drop(submitting);

        result.map_err(SubmitError::Handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::Cell;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Login {
        email: String,
        password: String,
    }

    fn schema() -> Schema {
        Schema::new()
            .field(
                "email",
                Rule::new().required("Email is required").email("Invalid email"),
            )
            .field(
                "password",
                Rule::new()
                    .required("Password is required")
                    .min_length(8, "At least 8 characters"),
            )
    }

    fn filled() -> Form {
        let mut form = Form::new(schema());
        form.set_field_value("email", json!("user@example.com"));
        form.set_field_value("password", json!("hunter22"));
        form
    }

    // ========================================================================
    // Field validation
    // ========================================================================

    #[test]
    fn test_validate_field_records_and_clears() {
        let mut form = Form::new(schema());
        form.set_field_value("email", json!("not-an-email"));
        form.validate_field("email");
        assert_eq!(form.error("email"), Some("Invalid email"));
        assert!(form.is_touched("email"));

        form.set_field_value("email", json!("user@example.com"));
        form.validate_field("email");
        assert_eq!(form.error("email"), None);
        assert!(form.is_dirty());
    }

    #[test]
    fn test_validate_unknown_field() {
        let mut form = Form::new(schema());
        form.validate_field("nickname");
        assert_eq!(
            form.error("nickname"),
            Some("field 'nickname' does not exist in the schema")
        );
    }

    #[test]
    fn test_validate_all_replaces_errors() {
        let mut form = Form::new(schema());
        form.validate_field("ghost");
        assert!(!form.validate_all());
        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.error("ghost"), None);
        assert_eq!(form.error("password"), Some("Password is required"));
        assert!(form.is_touched("email"));

        let mut form = filled();
        assert!(form.validate_all());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_is_valid_does_not_touch_state() {
        let form = Form::new(schema());
        assert!(!form.is_valid());
        assert!(form.errors().is_empty());
        assert_eq!(form.touched().count(), 0);
        assert!(filled().is_valid());
    }

    // ========================================================================
    // Values
    // ========================================================================

    #[test]
    fn test_set_values_merges() {
        let mut form = Form::new(schema());
        form.set_field_value("email", json!("a@b.co"));
        let mut partial = Map::new();
        partial.insert("password".to_string(), json!("secret123"));
        form.set_values(partial);
        assert_eq!(form.value("email"), Some(&json!("a@b.co")));
        assert_eq!(form.value("password"), Some(&json!("secret123")));
        assert!(form.is_dirty());
    }

    #[test]
    fn test_reset() {
        let mut form = filled();
        form.validate_field("email");
        form.reset();
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.touched().count(), 0);
        assert!(!form.is_dirty());
    }

    // ========================================================================
    // Submission
    // ========================================================================

    #[test]
    fn test_submit_skips_handler_on_invalid() {
        let mut form = Form::new(schema());
        let called = Cell::new(false);
        let result = block_on(form.submit(|_: Login| {
            called.set(true);
            async { Ok::<(), String>(()) }
        }));
        assert!(matches!(result, Err(SubmitError::Validation)));
        assert!(!called.get());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_passes_parsed_data() {
        let mut form = filled();
        let mut received = None;
        let result = block_on(form.submit(|login: Login| {
            received = Some(login);
            async { Ok::<(), String>(()) }
        }));
        assert!(result.is_ok());
        assert_eq!(received.unwrap().email, "user@example.com");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_propagates_handler_error() {
        let mut form = filled();
        let result = block_on(form.submit(|_: Login| async { Err("server down".to_string()) }));
        match result {
            Err(SubmitError::Handler(message)) => assert_eq!(message, "server down"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submit_flag_visible_while_handler_runs() {
        let mut form = filled();
        let handle = form.submitting_handle();
        assert!(!handle.is_submitting());

        let seen = Cell::new(false);
        let result = block_on(form.submit(|_: Login| {
            let handle = handle.clone();
            let seen = &seen;
            async move {
                seen.set(handle.is_submitting());
                Ok::<(), String>(())
            }
        }));
        assert!(result.is_ok());
        assert!(seen.get());
        assert!(!handle.is_submitting());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_cloned_form_has_own_flag() {
        let form = filled();
        let copy = form.clone();
        let _submitting = Submitting::start(&form.submitting);
        assert!(form.is_submitting());
        assert!(!copy.is_submitting());
    }

    #[test]
    fn test_unchecked_consent_blocks_submit() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Signup {
            email: String,
            terms: bool,
        }

        let schema = Schema::new()
            .field("email", Rule::new().required("Email is required"))
            .field("terms", Rule::new().must_be_true("Accept the terms"));
        let mut form = Form::new(schema);
        form.set_field_value("email", json!("user@example.com"));

        let called = Cell::new(false);
        let result = block_on(form.submit(|_: Signup| {
            called.set(true);
            async { Ok::<(), String>(()) }
        }));
        assert!(matches!(result, Err(SubmitError::Validation)));
        assert!(!called.get());
        assert_eq!(form.error("terms"), Some("Accept the terms"));
    }

    #[test]
    fn test_submit_parse_failure() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct NeedsAge {
            age: u32,
        }

        let mut form = filled();
        let result = block_on(form.submit(|_: NeedsAge| async { Ok::<(), String>(()) }));
        assert!(matches!(result, Err(SubmitError::Parse(_))));
        assert!(form.form_error().unwrap().contains("age"));
    }
}
