//! Interactive composables: overlays, menus, selection and notifications.
//!
//! These types own open/close state and react to events the host forwards
//! to them. They never touch a DOM. Side effects the host must perform
//! (prevent the browser default, move focus) come back as a [`KeyOutcome`].
//!
//! # Events
//!
//! - Keys arrive as [`Key`], parsed from DOM `KeyboardEvent.key` strings.
//! - Pointer-downs arrive as [`PointerDown`], carrying the chain of element
//!   ids from the event target up to the root. A surface treats the event
//!   as outside when neither its trigger nor its content is on that path.
//!
//! # Listener lifecycle
//!
//! Document-level handlers only act while the composable is mounted.
//! `mount` takes a [`ListenerGuard`] from the shared [`Listeners`] set and
//! `unmount` (or dropping the composable) returns it, so the set always
//! reflects what is actually listening.
//!
//! # Time
//!
//! Delays are driven by injected [`Instant`](std::time::Instant)s: handlers
//! that start a timer take `now`, and the host calls `tick(now)` to fire
//! whatever has come due.

mod dialog;
mod dropdown;
mod popover;
mod radio;
mod select;
mod toast;
mod tooltip;

pub use dialog::{Dialog, Sheet};
pub use dropdown::{Dropdown, DropdownProps};
pub use popover::{Popover, PopoverProps};
pub use radio::{radio_item, RadioGroupContext, RadioItem, RadioItemProps};
pub use select::{
    select_content, select_item, select_trigger, select_value, SelectContext, SelectItem,
    SelectItemProps, SelectProps, SelectTrigger, SelectValue,
};
pub use toast::{toast_aria, Toast, ToastAction, ToastProps, ToastUpdate, Toaster};
pub use tooltip::{Tooltip, TooltipProps};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::position::{position_styles, Placement, StyleMap};

// ============================================================================
// Elements and events
// ============================================================================

/// Host-assigned identifier of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Keys the composables react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    /// Any other key.
    Other,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Key {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

/// Side effects a key handler asks the host to perform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Call `preventDefault()` on the event.
    pub prevent_default: bool,
    /// Move focus to this element.
    pub focus: Option<ElementId>,
}

impl KeyOutcome {
    /// The event was not handled.
    pub fn ignored() -> Self {
        Self::default()
    }

    /// The event was handled and its default action must be suppressed.
    pub fn prevented() -> Self {
        Self {
            prevent_default: true,
            focus: None,
        }
    }

    pub fn with_focus(mut self, focus: Option<ElementId>) -> Self {
        self.focus = focus;
        self
    }
}

/// A document-level pointer-down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerDown {
    /// Element ids from the event target up to the root.
    pub path: Vec<ElementId>,
}

impl PointerDown {
    pub fn new<I, E>(path: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ElementId>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `element` is the target or one of its ancestors.
    pub fn hits(&self, element: &ElementId) -> bool {
        self.path.contains(element)
    }
}

// ============================================================================
// Listeners
// ============================================================================

/// Kinds of document-level listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    PointerDown,
    KeyDown,
}

#[derive(Debug, Default)]
struct ListenerSet {
    next: u64,
    active: BTreeMap<u64, (String, ListenerKind)>,
}

/// Shared bookkeeping of active document-level listeners.
///
/// Cloning shares the same set.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<ListenerSet>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kinds` for `owner` until the returned guard is dropped.
    pub fn acquire(&self, owner: &str, kinds: &[ListenerKind]) -> ListenerGuard {
        let mut set = self.inner.borrow_mut();
        let mut ids = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let id = set.next;
            set.next += 1;
            set.active.insert(id, (owner.to_string(), *kind));
            ids.push(id);
        }
        tracing::trace!(owner, count = ids.len(), "listeners acquired");
        ListenerGuard {
            set: Rc::clone(&self.inner),
            ids,
        }
    }

    /// Number of active listeners.
    pub fn len(&self) -> usize {
        self.inner.borrow().active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of active listeners of `kind`.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .active
            .values()
            .filter(|(_, k)| *k == kind)
            .count()
    }

    /// Returns `true` if `owner` holds any listener.
    pub fn is_listening(&self, owner: &str) -> bool {
        self.inner
            .borrow()
            .active
            .values()
            .any(|(o, _)| o == owner)
    }
}

/// Releases its listeners from the owning [`Listeners`] set when dropped.
#[derive(Debug)]
pub struct ListenerGuard {
    set: Rc<RefCell<ListenerSet>>,
    ids: Vec<u64>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut set = self.set.borrow_mut();
        for id in &self.ids {
            set.active.remove(id);
        }
    }
}

// ============================================================================
// Shared surface state
// ============================================================================

/// Allocates `"{prefix}-{n}"` from a process-wide counter.
pub(crate) fn next_id(prefix: &str, counter: &AtomicUsize) -> String {
    let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{prefix}-{n}")
}

/// Open state and element references of a floating surface.
#[derive(Debug)]
pub(crate) struct Surface {
    pub(crate) id: String,
    pub(crate) is_open: bool,
    pub(crate) trigger: Option<ElementId>,
    pub(crate) content: Option<ElementId>,
    guard: Option<ListenerGuard>,
}

impl Surface {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            is_open: false,
            trigger: None,
            content: None,
            guard: None,
        }
    }

    pub(crate) fn mount(&mut self, listeners: &Listeners, kinds: &[ListenerKind]) {
        self.guard = Some(listeners.acquire(&self.id, kinds));
    }

    pub(crate) fn unmount(&mut self) {
        self.guard = None;
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.guard.is_some()
    }

    /// Returns `true` if an open, mounted surface should close for `event`.
    pub(crate) fn is_outside(&self, event: &PointerDown) -> bool {
        if !self.is_open || !self.is_mounted() {
            return false;
        }
        let on = |element: &Option<ElementId>| element.as_ref().is_some_and(|e| event.hits(e));
        !on(&self.trigger) && !on(&self.content)
    }

    pub(crate) fn position_styles(&self, placement: Placement) -> StyleMap {
        position_styles(self.trigger.is_some(), self.is_open, placement)
    }
}
