use std::sync::atomic::AtomicUsize;

use serde::{Deserialize, Serialize};

use super::{next_id, ElementId, Key, KeyOutcome, ListenerKind, Listeners, PointerDown, Surface};
use crate::aria::AriaAttributes;
use crate::position::{Align, Placement, Side, StyleMap};
use crate::state::OpenState;

static POPOVER_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopoverProps {
    pub side: Side,
    pub align: Align,
    pub modal: bool,
}

impl Default for PopoverProps {
    fn default() -> Self {
        Self {
            side: Placement::POPOVER.side,
            align: Placement::POPOVER.align,
            modal: false,
        }
    }
}

/// A click-toggled floating panel.
///
/// Clicking the trigger toggles it. Escape and pointer-downs outside the
/// trigger and content close it.
#[derive(Debug)]
pub struct Popover {
    props: PopoverProps,
    surface: Surface,
}

impl Popover {
    pub fn new(props: PopoverProps) -> Self {
        Self {
            props,
            surface: Surface::new(next_id("popover", &POPOVER_COUNTER)),
        }
    }

    /// Identity used to link trigger and content.
    pub fn id(&self) -> &str {
        &self.surface.id
    }

    pub fn props(&self) -> &PopoverProps {
        &self.props
    }

    pub fn set_props(&mut self, props: PopoverProps) {
        self.props = props;
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_open
    }

    pub fn set_trigger(&mut self, element: Option<ElementId>) {
        self.surface.trigger = element;
    }

    pub fn set_content(&mut self, element: Option<ElementId>) {
        self.surface.content = element;
    }

    /// Starts listening for document pointer-downs and key presses.
    pub fn mount(&mut self, listeners: &Listeners) {
        self.surface
            .mount(listeners, &[ListenerKind::PointerDown, ListenerKind::KeyDown]);
    }

    pub fn unmount(&mut self) {
        self.surface.unmount();
    }

    pub fn open(&mut self) {
        self.surface.is_open = true;
        tracing::debug!(id = %self.surface.id, "popover opened");
    }

    pub fn close(&mut self) {
        self.surface.is_open = false;
        tracing::debug!(id = %self.surface.id, "popover closed");
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

    /// Handles a document key press: Escape closes an open, mounted popover
    /// and returns focus to the trigger.
    pub fn handle_key_down(&mut self, key: Key) -> KeyOutcome {
        if key == Key::Escape && self.surface.is_open && self.surface.is_mounted() {
            self.close();
            return KeyOutcome::ignored().with_focus(self.surface.trigger.clone());
        }
        KeyOutcome::ignored()
    }

    /// Handles a document pointer-down. Returns `true` if the popover closed.
    pub fn handle_pointer_down(&mut self, event: &PointerDown) -> bool {
        if self.surface.is_outside(event) {
            self.close();
            return true;
        }
        false
    }

    pub fn position_styles(&self) -> StyleMap {
        self.surface.position_styles(Placement::new(
            self.props.side,
            self.props.align,
            Placement::POPOVER.offset,
        ))
    }

    pub fn state(&self) -> OpenState {
        OpenState {
            is_open: self.surface.is_open,
        }
    }

    pub fn trigger_aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("aria-haspopup", "dialog")
            .set("aria-expanded", self.surface.is_open)
            .set("aria-controls", self.surface.id.clone())
    }

    pub fn content_aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("id", self.surface.id.clone())
            .set("role", "dialog")
            .set_if(self.props.modal, "aria-modal", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(listeners: &Listeners) -> Popover {
        let mut popover = Popover::new(PopoverProps::default());
        popover.set_trigger(Some(ElementId::new("trigger")));
        popover.set_content(Some(ElementId::new("panel")));
        popover.mount(listeners);
        popover
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Popover::new(PopoverProps::default());
        let b = Popover::new(PopoverProps::default());
        assert_ne!(a.id(), b.id());
        assert!(a.id().starts_with("popover-"));
    }

    #[test]
    fn test_trigger_click_toggles() {
        let listeners = Listeners::new();
        let mut popover = mounted(&listeners);
        popover.handle_trigger_click();
        assert!(popover.is_open());
        popover.handle_trigger_click();
        assert!(!popover.is_open());
    }

    #[test]
    fn test_escape_closes_and_returns_focus() {
        let listeners = Listeners::new();
        let mut popover = mounted(&listeners);
        popover.open();

        let outcome = popover.handle_key_down(Key::Escape);
        assert!(!popover.is_open());
        assert_eq!(outcome.focus, Some(ElementId::new("trigger")));
        assert!(!outcome.prevent_default);

        assert_eq!(popover.handle_key_down(Key::Escape), KeyOutcome::ignored());
    }

    #[test]
    fn test_outside_pointer_closes() {
        let listeners = Listeners::new();
        let mut popover = mounted(&listeners);
        popover.open();

        assert!(!popover.handle_pointer_down(&PointerDown::new(["link", "panel", "body"])));
        assert!(popover.is_open());
        assert!(!popover.handle_pointer_down(&PointerDown::new(["trigger", "body"])));
        assert!(popover.is_open());
        assert!(popover.handle_pointer_down(&PointerDown::new(["main", "body"])));
        assert!(!popover.is_open());
    }

    #[test]
    fn test_unmounted_ignores_document_events() {
        let listeners = Listeners::new();
        let mut popover = mounted(&listeners);
        popover.unmount();
        assert!(listeners.is_empty());

        popover.open();
        assert!(!popover.handle_pointer_down(&PointerDown::new(["main"])));
        assert!(popover.is_open());
        assert_eq!(popover.handle_key_down(Key::Escape), KeyOutcome::ignored());
        assert!(popover.is_open());

        popover.mount(&listeners);
        let outcome = popover.handle_key_down(Key::Escape);
        assert!(!popover.is_open());
        assert_eq!(outcome.focus, Some(ElementId::new("trigger")));
    }

    #[test]
    fn test_position_styles() {
        let listeners = Listeners::new();
        let mut popover = mounted(&listeners);
        assert!(popover.position_styles().is_empty());

        popover.open();
        let styles = popover.position_styles();
        assert_eq!(styles.get("marginTop").map(String::as_str), Some("8px"));
        assert_eq!(styles.get("left").map(String::as_str), Some("50%"));
    }

    #[test]
    fn test_aria() {
        let mut popover = Popover::new(PopoverProps {
            modal: true,
            ..Default::default()
        });
        popover.open();
        let trigger = popover.trigger_aria();
        assert_eq!(trigger.get_str("aria-expanded").as_deref(), Some("true"));
        assert_eq!(trigger.get_str("aria-controls").as_deref(), Some(popover.id()));
        assert!(popover.content_aria().contains("aria-modal"));
    }
}
