//! Validation schema: an ordered list of fields, each with a [`Rule`].
//!
//! A rule is a chain of checks run in order; the first failing check's
//! message is the field's error. A missing value is checked as `null`, so
//! `must_be_true`, item counts and numeric bounds reject it. Format checks
//! (`email`, `pattern`) skip blank values (missing, `null` or `""`) and
//! length checks skip missing ones, so optional text fields stay optional.
//!
//! ```rust
//! use serde_json::json;
//! use soave_ui::form::{Rule, Schema};
//!
//! let schema = Schema::new()
//!     .field("email", Rule::new().required("Email is required").email("Invalid email"))
//!     .field("age", Rule::new().min(18.0, "Too young"))
//!     .field("nickname", Rule::new().min_length(3, "Too short"));
//!
//! let rule = schema.rule("email").unwrap();
//! assert_eq!(rule.check(Some(&json!("nope"))), Err("Invalid email".to_string()));
//! assert_eq!(rule.check(None), Err("Email is required".to_string()));
//! assert_eq!(schema.rule("age").unwrap().check(None), Err("Too young".to_string()));
//! assert!(schema.rule("nickname").unwrap().check(None).is_ok());
//! ```

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

static EMAIL: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

#[derive(Clone)]
enum Check {
    Required,
    String,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Pattern(Regex),
    Min(f64),
    Max(f64),
    MustBeTrue,
    MinItems(usize),
    MaxItems(usize),
    Custom(Predicate),
}

impl Check {
    fn passes(&self, value: &Value) -> bool {
        match self {
            Check::Required => !is_blank(value),
            Check::String => value.is_string(),
            Check::MinLength(n) => value.as_str().is_some_and(|s| s.chars().count() >= *n),
            Check::MaxLength(n) => value.as_str().is_some_and(|s| s.chars().count() <= *n),
            Check::Email => value
                .as_str()
                .is_some_and(|s| EMAIL.as_ref().is_some_and(|re| re.is_match(s))),
            Check::Pattern(re) => value.as_str().is_some_and(|s| re.is_match(s)),
            Check::Min(min) => value.as_f64().is_some_and(|n| n >= *min),
            Check::Max(max) => value.as_f64().is_some_and(|n| n <= *max),
            Check::MustBeTrue => value.as_bool() == Some(true),
            Check::MinItems(n) => value.as_array().is_some_and(|a| a.len() >= *n),
            Check::MaxItems(n) => value.as_array().is_some_and(|a| a.len() <= *n),
            Check::Custom(predicate) => predicate(value),
        }
    }

    fn skips(&self, value: &Value) -> bool {
        match self {
            Check::Email | Check::Pattern(_) => is_blank(value),
            Check::MinLength(_) | Check::MaxLength(_) => value.is_null(),
            _ => false,
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Required => f.write_str("Required"),
            Check::String => f.write_str("String"),
            Check::MinLength(n) => write!(f, "MinLength({})", n),
            Check::MaxLength(n) => write!(f, "MaxLength({})", n),
            Check::Email => f.write_str("Email"),
            Check::Pattern(re) => write!(f, "Pattern({})", re.as_str()),
            Check::Min(n) => write!(f, "Min({})", n),
            Check::Max(n) => write!(f, "Max({})", n),
            Check::MustBeTrue => f.write_str("MustBeTrue"),
            Check::MinItems(n) => write!(f, "MinItems({})", n),
            Check::MaxItems(n) => write!(f, "MaxItems({})", n),
            Check::Custom(_) => f.write_str("Custom"),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Checks for one field, each with its own message.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    checks: Vec<(Check, String)>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, check: Check, message: impl Into<String>) -> Self {
        self.checks.push((check, message.into()));
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.push(Check::Required, message)
    }

    pub fn string(self, message: impl Into<String>) -> Self {
        self.push(Check::String, message)
    }

    /// Minimum length in characters.
    pub fn min_length(self, len: usize, message: impl Into<String>) -> Self {
        self.push(Check::MinLength(len), message)
    }

    pub fn max_length(self, len: usize, message: impl Into<String>) -> Self {
        self.push(Check::MaxLength(len), message)
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.push(Check::Email, message)
    }

    /// The value must be a string matching `pattern`.
    pub fn pattern(self, pattern: Regex, message: impl Into<String>) -> Self {
        self.push(Check::Pattern(pattern), message)
    }

    pub fn min(self, min: f64, message: impl Into<String>) -> Self {
        self.push(Check::Min(min), message)
    }

    pub fn max(self, max: f64, message: impl Into<String>) -> Self {
        self.push(Check::Max(max), message)
    }

    /// For consent checkboxes.
    pub fn must_be_true(self, message: impl Into<String>) -> Self {
        self.push(Check::MustBeTrue, message)
    }

    pub fn min_items(self, count: usize, message: impl Into<String>) -> Self {
        self.push(Check::MinItems(count), message)
    }

    pub fn max_items(self, count: usize, message: impl Into<String>) -> Self {
        self.push(Check::MaxItems(count), message)
    }

    pub fn custom<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.push(Check::Custom(Arc::new(predicate)), message)
    }

    /// Runs the checks against `value`, returning the first failing message.
    ///
    /// `None` is checked as `null`.
    pub fn check(&self, value: Option<&Value>) -> Result<(), String> {
        let value = value.unwrap_or(&NULL);
        match self
            .checks
            .iter()
            .find(|(check, _)| !check.skips(value) && !check.passes(value))
        {
            Some((_, message)) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

/// Fields in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Rule)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. Redeclaring a field replaces its rule in place.
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = rule,
            None => self.fields.push((name, rule)),
        }
        self
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Validates every field, returning `(field, message)` for each failure
    /// in declaration order.
    pub fn validate(&self, values: &Map<String, Value>) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|(name, rule)| {
                rule.check(values.get(name))
                    .err()
                    .map(|message| (name.clone(), message))
            })
            .collect()
    }
}
