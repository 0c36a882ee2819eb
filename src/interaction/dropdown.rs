//! Menu button with keyboard navigation.
//!
//! # States
//!
//! ```text
//! closed --(trigger click | Enter | Space | ArrowDown)--> open, item 0 active
//! closed --(ArrowUp on trigger)-----------------------> open, last item active
//! open   --(Escape)--> closed, focus back to trigger
//! open   --(Tab)-----> closed, default tab behavior kept
//! open   --(pointer-down outside trigger and content)--> closed
//! ```
//!
//! While open, ArrowDown / ArrowUp move the active item by one and stop at
//! the ends; Home / End jump to the first / last item. Items announce
//! themselves with [`Dropdown::register_item`] and the item count is the
//! number of registrations. With no items the active index stays at 0.

use std::sync::atomic::AtomicUsize;

use serde::{Deserialize, Serialize};

use super::{next_id, ElementId, Key, KeyOutcome, ListenerKind, Listeners, PointerDown, Surface};
use crate::aria::AriaAttributes;
use crate::position::{Align, Placement, Side, StyleMap};
use crate::state::OpenState;

static DROPDOWN_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownProps {
    pub side: Side,
    pub align: Align,
}

impl Default for DropdownProps {
    fn default() -> Self {
        Self {
            side: Placement::DROPDOWN.side,
            align: Placement::DROPDOWN.align,
        }
    }
}

#[derive(Debug)]
pub struct Dropdown {
    props: DropdownProps,
    surface: Surface,
    active_index: Option<usize>,
    item_count: usize,
}

impl Dropdown {
    pub fn new(props: DropdownProps) -> Self {
        Self {
            props,
            surface: Surface::new(next_id("dropdown", &DROPDOWN_COUNTER)),
            active_index: None,
            item_count: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.surface.id
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_open
    }

    /// The highlighted item while open, `None` while closed.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn set_props(&mut self, props: DropdownProps) {
        self.props = props;
    }

    pub fn set_trigger(&mut self, element: Option<ElementId>) {
        self.surface.trigger = element;
    }

    pub fn set_content(&mut self, element: Option<ElementId>) {
        self.surface.content = element;
    }

    pub fn mount(&mut self, listeners: &Listeners) {
        self.surface.mount(listeners, &[ListenerKind::PointerDown]);
    }

    pub fn unmount(&mut self) {
        self.surface.unmount();
    }

    pub fn open(&mut self) {
        self.surface.is_open = true;
        self.active_index = Some(0);
        tracing::debug!(id = %self.surface.id, "dropdown opened");
    }

    pub fn close(&mut self) {
        self.surface.is_open = false;
        self.active_index = None;
        tracing::debug!(id = %self.surface.id, "dropdown closed");
    }

    pub fn toggle(&mut self) {
        if self.surface.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn handle_trigger_click(&mut self) {
        self.toggle();
    }

    fn last_index(&self) -> usize {
        self.item_count.saturating_sub(1)
    }

    /// Handles a key press on the trigger.
    pub fn handle_trigger_key_down(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Enter | Key::Space | Key::ArrowDown => {
                self.open();
                KeyOutcome::prevented()
            }
            Key::ArrowUp => {
                self.open();
                self.active_index = Some(self.last_index());
                KeyOutcome::prevented()
            }
            _ => KeyOutcome::ignored(),
        }
    }

    /// Handles a key press inside the menu content. Ignored while closed.
    pub fn handle_content_key_down(&mut self, key: Key) -> KeyOutcome {
        if !self.surface.is_open {
            return KeyOutcome::ignored();
        }
        match key {
            Key::ArrowDown => {
                let next = match self.active_index {
                    Some(index) => (index + 1).min(self.last_index()),
                    None => 0,
                };
                self.active_index = Some(next);
                KeyOutcome::prevented()
            }
            Key::ArrowUp => {
                let prev = self.active_index.map_or(0, |index| index.saturating_sub(1));
                self.active_index = Some(prev);
                KeyOutcome::prevented()
            }
            Key::Home => {
                self.active_index = Some(0);
                KeyOutcome::prevented()
            }
            Key::End => {
                self.active_index = Some(self.last_index());
                KeyOutcome::prevented()
            }
            Key::Escape => {
                self.close();
                KeyOutcome::prevented().with_focus(self.surface.trigger.clone())
            }
            Key::Tab => {
                self.close();
                KeyOutcome::ignored()
            }
            _ => KeyOutcome::ignored(),
        }
    }

    /// Handles a document pointer-down. Returns `true` if the menu closed.
    pub fn handle_pointer_down(&mut self, event: &PointerDown) -> bool {
        if self.surface.is_outside(event) {
            self.close();
            return true;
        }
        false
    }

    /// Registers an item and returns its index.
    ///
    /// The count only grows; items re-registering after a close get new
    /// indices.
    pub fn register_item(&mut self) -> usize {
        let index = self.item_count;
        self.item_count += 1;
        index
    }

    /// Highlights an item, e.g. on pointer hover.
    pub fn set_active_item(&mut self, index: usize) {
        self.active_index = Some(index);
    }

    pub fn is_item_active(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    pub fn position_styles(&self) -> StyleMap {
        self.surface.position_styles(Placement::new(
            self.props.side,
            self.props.align,
            Placement::DROPDOWN.offset,
        ))
    }

    pub fn state(&self) -> OpenState {
        OpenState {
            is_open: self.surface.is_open,
        }
    }

    pub fn trigger_aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("aria-haspopup", "menu")
            .set("aria-expanded", self.surface.is_open)
            .set("aria-controls", self.surface.id.clone())
    }

    pub fn content_aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("id", self.surface.id.clone())
            .set("role", "menu")
    }

    pub fn item_aria(&self, index: usize, disabled: bool) -> AriaAttributes {
        AriaAttributes::new()
            .set("role", "menuitem")
            .set("tabindex", if self.is_item_active(index) { "0" } else { "-1" })
            .set_if(disabled, "aria-disabled", true)
    }
}
