//! Toast notifications.
//!
//! A [`Toaster`] owns its queue; there is no process-wide toast list. Toasts
//! with a non-zero duration expire on their own: the host calls
//! [`Toaster::tick`] and removes whatever it reports.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use soave_ui::interaction::{ToastProps, Toaster};
//!
//! let start = Instant::now();
//! let mut toaster = Toaster::new();
//! let id = toaster.success(ToastProps::titled("Saved"), start);
//!
//! assert_eq!(toaster.len(), 1);
//! assert_eq!(toaster.tick(start + Duration::from_secs(5)), vec![id]);
//! assert!(toaster.is_empty());
//! ```

use std::time::{Duration, Instant};

use crate::aria::AriaAttributes;
use crate::state::{ToastPosition, ToastState, ToastVariant, ToasterState};

/// Default lifetime of a toast.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// A button rendered inside a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    pub label: String,
}

/// Options for a new toast. Unset fields take the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastProps {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Option<ToastVariant>,
    /// Zero keeps the toast until dismissed.
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
    pub action: Option<ToastAction>,
}

impl ToastProps {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Fields to change on an existing toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Option<ToastVariant>,
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
    pub action: Option<ToastAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub dismissible: bool,
    pub action: Option<ToastAction>,
    pub created_at: Instant,
    expires_at: Option<Instant>,
}

impl Toast {
    pub fn state(&self) -> ToastState {
        ToastState {
            variant: self.variant,
        }
    }

    pub fn aria(&self) -> AriaAttributes {
        toast_aria(self.variant)
    }
}

/// Live-region attributes for a toast of `variant`.
///
/// Errors and warnings interrupt (`alert`, `assertive`); everything else
/// waits its turn (`status`, `polite`).
pub fn toast_aria(variant: ToastVariant) -> AriaAttributes {
    let urgent = matches!(variant, ToastVariant::Error | ToastVariant::Warning);
    AriaAttributes::new()
        .set("role", if urgent { "alert" } else { "status" })
        .set("aria-live", if urgent { "assertive" } else { "polite" })
        .set("aria-atomic", "true")
}

/// A queue of toasts.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    toasts: Vec<Toast>,
    counter: u64,
    position: ToastPosition,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: ToastPosition) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn state(&self) -> ToasterState {
        ToasterState {
            position: self.position,
        }
    }

    /// Toasts in insertion order.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// The newest `max` toasts, oldest first.
    pub fn visible(&self, max: usize) -> &[Toast] {
        let start = self.toasts.len().saturating_sub(max);
        &self.toasts[start..]
    }

    pub fn get(&self, id: &str) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn generate_id(&mut self) -> String {
        self.counter += 1;
        format!("toast-{}", self.counter)
    }

    /// Adds a toast and returns its id.
    pub fn add(&mut self, props: ToastProps, now: Instant) -> String {
        let id = match props.id {
            Some(id) => id,
            None => self.generate_id(),
        };
        let duration = props.duration.unwrap_or(DEFAULT_DURATION);
        let toast = Toast {
            id: id.clone(),
            title: props.title,
            description: props.description,
            variant: props.variant.unwrap_or_default(),
            duration,
            dismissible: props.dismissible.unwrap_or(true),
            action: props.action,
            created_at: now,
            expires_at: (!duration.is_zero()).then(|| now + duration),
        };
        tracing::debug!(id = %id, variant = toast.variant.as_str(), "toast added");
        self.toasts.push(toast);
        id
    }

    fn add_variant(&mut self, variant: ToastVariant, props: ToastProps, now: Instant) -> String {
        self.add(
            ToastProps {
                variant: Some(variant),
                ..props
            },
            now,
        )
    }

    pub fn default_toast(&mut self, props: ToastProps, now: Instant) -> String {
        self.add_variant(ToastVariant::Default, props, now)
    }

    pub fn success(&mut self, props: ToastProps, now: Instant) -> String {
        self.add_variant(ToastVariant::Success, props, now)
    }

    pub fn error(&mut self, props: ToastProps, now: Instant) -> String {
        self.add_variant(ToastVariant::Error, props, now)
    }

    pub fn warning(&mut self, props: ToastProps, now: Instant) -> String {
        self.add_variant(ToastVariant::Warning, props, now)
    }

    pub fn info(&mut self, props: ToastProps, now: Instant) -> String {
        self.add_variant(ToastVariant::Info, props, now)
    }

    /// Removes a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Changes fields of a toast, keeping its id and creation time.
    ///
    /// The expiry scheduled when the toast was added stays as it was.
    pub fn update(&mut self, id: &str, update: ToastUpdate) {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(title) = update.title {
            toast.title = Some(title);
        }
        if let Some(description) = update.description {
            toast.description = Some(description);
        }
        if let Some(variant) = update.variant {
            toast.variant = variant;
        }
        if let Some(duration) = update.duration {
            toast.duration = duration;
        }
        if let Some(dismissible) = update.dismissible {
            toast.dismissible = dismissible;
        }
        if let Some(action) = update.action {
            toast.action = Some(action);
        }
    }

    /// Removes expired toasts and returns their ids.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        let mut expired = Vec::new();
        self.toasts.retain(|t| match t.expires_at {
            Some(at) if at <= now => {
                expired.push(t.id.clone());
                false
            }
            _ => true,
        });
        expired
    }

    /// The earliest pending expiry.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().filter_map(|t| t.expires_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_add_defaults() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let id = toaster.add(ToastProps::titled("Hello"), now);

        let toast = toaster.get(&id).unwrap();
        assert_eq!(toast.variant, ToastVariant::Default);
        assert_eq!(toast.duration, ms(5000));
        assert!(toast.dismissible);
        assert_eq!(toast.created_at, now);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let a = toaster.add(ToastProps::default(), now);
        let b = toaster.add(ToastProps::default(), now);
        assert_ne!(a, b);
    }

    #[test]
    fn test_explicit_id() {
        let mut toaster = Toaster::new();
        let id = toaster.add(
            ToastProps {
                id: Some("upload".to_string()),
                ..Default::default()
            },
            Instant::now(),
        );
        assert_eq!(id, "upload");
    }

    #[test]
    fn test_variant_adders() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let id = toaster.error(ToastProps::titled("Failed"), now);
        assert_eq!(toaster.get(&id).unwrap().variant, ToastVariant::Error);
        let id = toaster.info(ToastProps::titled("FYI"), now);
        assert_eq!(toaster.get(&id).unwrap().state().variant, ToastVariant::Info);
    }

    #[test]
    fn test_dismiss_and_dismiss_all() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let a = toaster.add(ToastProps::default(), now);
        toaster.add(ToastProps::default(), now);
        toaster.dismiss(&a);
        toaster.dismiss("missing");
        assert_eq!(toaster.len(), 1);
        toaster.dismiss_all();
        assert!(toaster.is_empty());
    }

    #[test]
    fn test_update_keeps_identity() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let id = toaster.add(ToastProps::titled("Uploading"), now);
        toaster.update(
            &id,
            ToastUpdate {
                title: Some("Uploaded".to_string()),
                variant: Some(ToastVariant::Success),
                ..Default::default()
            },
        );
        let toast = toaster.get(&id).unwrap();
        assert_eq!(toast.title.as_deref(), Some("Uploaded"));
        assert_eq!(toast.variant, ToastVariant::Success);
        assert_eq!(toast.created_at, now);
    }

    #[test]
    fn test_auto_dismiss() {
        let now = Instant::now();
        let mut toaster = Toaster::new();
        let short = toaster.add(ToastProps::default().duration(ms(1000)), now);
        let long = toaster.add(ToastProps::default(), now);
        let sticky = toaster.add(ToastProps::default().duration(Duration::ZERO), now);

        assert_eq!(toaster.next_deadline(), Some(now + ms(1000)));
        assert!(toaster.tick(now + ms(999)).is_empty());
        assert_eq!(toaster.tick(now + ms(1000)), vec![short]);
        assert_eq!(toaster.tick(now + ms(5000)), vec![long]);
        assert!(toaster.tick(now + ms(60_000)).is_empty());
        assert_eq!(toaster.toasts()[0].id, sticky);
        assert_eq!(toaster.next_deadline(), None);
    }

    #[test]
    fn test_aria_roles() {
        let urgent = toast_aria(ToastVariant::Warning);
        assert_eq!(urgent.get_str("role").as_deref(), Some("alert"));
        assert_eq!(urgent.get_str("aria-live").as_deref(), Some("assertive"));

        let calm = toast_aria(ToastVariant::Success);
        assert_eq!(calm.get_str("role").as_deref(), Some("status"));
        assert_eq!(calm.get_str("aria-live").as_deref(), Some("polite"));
        assert_eq!(calm.get_str("aria-atomic").as_deref(), Some("true"));
    }

    #[test]
    fn test_visible_keeps_newest() {
        let now = Instant::now();
        let mut toaster = Toaster::with_position(ToastPosition::TopCenter);
        for _ in 0..5 {
            toaster.add(ToastProps::default(), now);
        }
        let visible = toaster.visible(3);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].id, "toast-3");
        assert_eq!(toaster.visible(10).len(), 5);
        assert_eq!(toaster.state().position, ToastPosition::TopCenter);
    }
}
