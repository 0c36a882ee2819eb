use std::sync::atomic::AtomicUsize;
use std::time::{Duration, Instant};

use super::{next_id, ElementId, Surface};
use crate::aria::AriaAttributes;
use crate::position::{Align, Placement, Side, StyleMap};
use crate::state::SidedState;

static TOOLTIP_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipProps {
    pub side: Side,
    pub align: Align,
    /// Hover time before the tooltip shows.
    pub delay: Duration,
    /// Time after the pointer leaves before the tooltip hides.
    pub skip_delay: Duration,
    pub disabled: bool,
}

impl Default for TooltipProps {
    fn default() -> Self {
        Self {
            side: Placement::TOOLTIP.side,
            align: Placement::TOOLTIP.align,
            delay: Duration::from_millis(200),
            skip_delay: Duration::from_millis(100),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    at: Instant,
    open: bool,
}

/// A hover and focus label.
///
/// Focus shows it at once and blur hides it. Pointer enter and leave go
/// through delays, fired by [`Tooltip::tick`]. At most one timer is pending:
/// scheduling, `show`, `hide` and `unmount` all cancel the previous one.
#[derive(Debug)]
pub struct Tooltip {
    props: TooltipProps,
    surface: Surface,
    pending: Option<Pending>,
}

impl Tooltip {
    pub fn new(props: TooltipProps) -> Self {
        Self {
            props,
            surface: Surface::new(next_id("tooltip", &TOOLTIP_COUNTER)),
            pending: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.surface.id
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_open
    }

    pub fn set_props(&mut self, props: TooltipProps) {
        self.props = props;
    }

    pub fn set_trigger(&mut self, element: Option<ElementId>) {
        self.surface.trigger = element;
    }

    pub fn set_content(&mut self, element: Option<ElementId>) {
        self.surface.content = element;
    }

    fn clear_timers(&mut self) {
        self.pending = None;
    }

    /// Shows immediately, unless disabled.
    pub fn show(&mut self) {
        if self.props.disabled {
            return;
        }
        self.clear_timers();
        self.surface.is_open = true;
    }

    /// Hides immediately.
    pub fn hide(&mut self) {
        self.clear_timers();
        self.surface.is_open = false;
    }

    pub fn handle_mouse_enter(&mut self, now: Instant) {
        if self.props.disabled {
            return;
        }
        self.clear_timers();
        self.pending = Some(Pending {
            at: now + self.props.delay,
            open: true,
        });
    }

    pub fn handle_mouse_leave(&mut self, now: Instant) {
        self.clear_timers();
        self.pending = Some(Pending {
            at: now + self.props.skip_delay,
            open: false,
        });
    }

    pub fn handle_focus(&mut self) {
        self.show();
    }

    pub fn handle_blur(&mut self) {
        self.hide();
    }

    /// Fires the pending timer if it is due. Returns `true` if it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.at <= now => {
                self.pending = None;
                self.surface.is_open = pending.open;
                true
            }
            _ => false,
        }
    }

    /// When the pending timer is due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.at)
    }

    /// Cancels pending timers.
    pub fn unmount(&mut self) {
        self.clear_timers();
        self.surface.unmount();
    }

    pub fn position_styles(&self) -> StyleMap {
        self.surface.position_styles(Placement::new(
            self.props.side,
            self.props.align,
            Placement::TOOLTIP.offset,
        ))
    }

    pub fn state(&self) -> SidedState {
        SidedState {
            is_open: self.surface.is_open,
            side: self.props.side,
        }
    }

    pub fn trigger_aria(&self) -> AriaAttributes {
        AriaAttributes::new().set_if(
            self.surface.is_open,
            "aria-describedby",
            self.surface.id.clone(),
        )
    }

    pub fn content_aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("id", self.surface.id.clone())
            .set("role", "tooltip")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_hover_shows_after_delay() {
        let start = Instant::now();
        let mut tooltip = Tooltip::new(TooltipProps::default());

        tooltip.handle_mouse_enter(start);
        assert!(!tooltip.tick(start + ms(199)));
        assert!(!tooltip.is_open());
        assert!(tooltip.tick(start + ms(200)));
        assert!(tooltip.is_open());
        assert_eq!(tooltip.next_deadline(), None);
    }

    #[test]
    fn test_leave_hides_after_skip_delay() {
        let start = Instant::now();
        let mut tooltip = Tooltip::new(TooltipProps::default());
        tooltip.show();

        tooltip.handle_mouse_leave(start);
        assert_eq!(tooltip.next_deadline(), Some(start + ms(100)));
        tooltip.tick(start + ms(150));
        assert!(!tooltip.is_open());
    }

    #[test]
    fn test_leave_cancels_pending_show() {
        let start = Instant::now();
        let mut tooltip = Tooltip::new(TooltipProps::default());

        tooltip.handle_mouse_enter(start);
        tooltip.handle_mouse_leave(start + ms(50));
        tooltip.tick(start + ms(500));
        assert!(!tooltip.is_open());
    }

    #[test]
    fn test_focus_and_blur_are_immediate() {
        let start = Instant::now();
        let mut tooltip = Tooltip::new(TooltipProps::default());

        tooltip.handle_mouse_leave(start);
        tooltip.handle_focus();
        assert!(tooltip.is_open());
        assert_eq!(tooltip.next_deadline(), None);

        tooltip.handle_blur();
        assert!(!tooltip.is_open());
    }

    #[test]
    fn test_disabled_never_shows() {
        let start = Instant::now();
        let mut tooltip = Tooltip::new(TooltipProps {
            disabled: true,
            ..Default::default()
        });
        tooltip.handle_focus();
        tooltip.handle_mouse_enter(start);
        tooltip.tick(start + ms(1000));
        assert!(!tooltip.is_open());
    }

    #[test]
    fn test_unmount_clears_timer() {
        let start = Instant::now();
        let mut tooltip = Tooltip::new(TooltipProps::default());
        tooltip.handle_mouse_enter(start);
        tooltip.unmount();
        assert!(!tooltip.tick(start + ms(1000)));
        assert!(!tooltip.is_open());
    }

    #[test]
    fn test_position_defaults_to_top() {
        let mut tooltip = Tooltip::new(TooltipProps::default());
        tooltip.set_trigger(Some(ElementId::new("help")));
        tooltip.show();
        let styles = tooltip.position_styles();
        assert_eq!(styles.get("bottom").map(String::as_str), Some("100%"));
        assert_eq!(styles.get("marginBottom").map(String::as_str), Some("8px"));
        assert_eq!(tooltip.state().side, Side::Top);
    }

    #[test]
    fn test_aria_links_when_open() {
        let mut tooltip = Tooltip::new(TooltipProps::default());
        assert!(tooltip.trigger_aria().is_empty());
        tooltip.show();
        assert_eq!(
            tooltip.trigger_aria().get_str("aria-describedby").as_deref(),
            Some(tooltip.id())
        );
        assert_eq!(tooltip.content_aria().get_str("role").as_deref(), Some("tooltip"));
    }
}
