use super::StyleAdapter;
use crate::state::ComponentState;

/// Adapter that never emits classes.
///
/// Use it when every element is styled by the host application.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessAdapter;

impl StyleAdapter for HeadlessAdapter {
    fn name(&self) -> &str {
        "headless"
    }

    fn description(&self) -> Option<&str> {
        Some("Headless mode (no styling applied)")
    }

    fn classes(&self, _component: &str, _state: &ComponentState) -> String {
        String::new()
    }
}
