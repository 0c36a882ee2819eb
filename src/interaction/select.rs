//! Select: a trigger showing the chosen value and a list of options.
//!
//! The root owns a [`SelectContext`]. The trigger, content, item and value
//! parts read it through `Option<&SelectContext>` and fail with
//! [`UiError::ProviderNotFound`] when rendered outside a select.

use crate::aria::AriaAttributes;
use crate::error::UiError;
use crate::interaction::ElementId;
use crate::state::{OpenState, SelectState, SelectValueState, Size};

const CONTEXT: &str = "select";

fn require(ctx: Option<&SelectContext>) -> Result<&SelectContext, UiError> {
    ctx.ok_or(UiError::ProviderNotFound { context: CONTEXT })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectProps {
    pub size: Size,
    pub disabled: bool,
    pub placeholder: String,
}

/// State shared by the parts of a select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectContext {
    value: String,
    is_open: bool,
    props: SelectProps,
    trigger: Option<ElementId>,
}

impl SelectContext {
    pub fn new(value: impl Into<String>, props: SelectProps) -> Self {
        Self {
            value: value.into(),
            is_open: false,
            props,
            trigger: None,
        }
    }

    /// The selected value; empty when nothing is selected.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn props(&self) -> &SelectProps {
        &self.props
    }

    pub fn trigger(&self) -> Option<&ElementId> {
        self.trigger.as_ref()
    }

    pub fn set_trigger(&mut self, element: Option<ElementId>) {
        self.trigger = element;
    }

    /// Selects `value` and closes the list.
    pub fn update_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.close();
    }

    /// Opens the list unless the select is disabled.
    pub fn open(&mut self) {
        if !self.props.disabled {
            self.is_open = true;
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }
}

/// Derived state of the select trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectTrigger {
    pub state: SelectState,
    pub aria: AriaAttributes,
}

pub fn select_trigger(ctx: Option<&SelectContext>) -> Result<SelectTrigger, UiError> {
    let ctx = require(ctx)?;
    let state = SelectState {
        size: ctx.props.size,
        disabled: ctx.props.disabled,
        is_open: ctx.is_open,
    };
    let aria = AriaAttributes::new()
        .set("role", "combobox")
        .set("aria-expanded", state.is_open)
        .set_if(state.disabled, "aria-disabled", true);
    Ok(SelectTrigger { state, aria })
}

pub fn select_content(ctx: Option<&SelectContext>) -> Result<OpenState, UiError> {
    let ctx = require(ctx)?;
    Ok(OpenState {
        is_open: ctx.is_open,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectItemProps {
    pub value: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub selected: bool,
    pub disabled: bool,
    pub aria: AriaAttributes,
}

pub fn select_item(ctx: Option<&SelectContext>, props: &SelectItemProps) -> Result<SelectItem, UiError> {
    let ctx = require(ctx)?;
    let selected = ctx.value == props.value;
    let aria = AriaAttributes::new()
        .set("role", "option")
        .set("aria-selected", selected)
        .set_if(props.disabled, "aria-disabled", true);
    Ok(SelectItem {
        selected,
        disabled: props.disabled,
        aria,
    })
}

/// What the trigger displays: the value, or the placeholder when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectValue {
    pub state: SelectValueState,
    pub text: String,
}

pub fn select_value(ctx: Option<&SelectContext>) -> Result<SelectValue, UiError> {
    let ctx = require(ctx)?;
    let has_value = !ctx.value.is_empty();
    let text = if has_value {
        ctx.value.clone()
    } else {
        ctx.props.placeholder.clone()
    };
    Ok(SelectValue {
        state: SelectValueState { has_value },
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SelectContext {
        SelectContext::new(
            "",
            SelectProps {
                size: Size::Sm,
                disabled: false,
                placeholder: "Pick a fruit".to_string(),
            },
        )
    }

    #[test]
    fn test_parts_require_context() {
        let expected = UiError::ProviderNotFound { context: "select" };
        assert_eq!(select_trigger(None).unwrap_err(), expected);
        assert_eq!(select_content(None).unwrap_err(), expected);
        assert_eq!(select_value(None).unwrap_err(), expected);
        assert_eq!(
            select_item(None, &SelectItemProps::default()).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_trigger_state() {
        let mut ctx = context();
        ctx.toggle();
        let trigger = select_trigger(Some(&ctx)).unwrap();
        assert_eq!(
            trigger.state,
            SelectState {
                size: Size::Sm,
                disabled: false,
                is_open: true
            }
        );
        assert_eq!(trigger.aria.get_str("aria-expanded").as_deref(), Some("true"));
        assert!(select_content(Some(&ctx)).unwrap().is_open);
    }

    #[test]
    fn test_update_value_selects_and_closes() {
        let mut ctx = context();
        ctx.open();
        ctx.update_value("apple");
        assert!(!ctx.is_open());

        let apple = SelectItemProps {
            value: "apple".to_string(),
            disabled: false,
        };
        let pear = SelectItemProps {
            value: "pear".to_string(),
            disabled: true,
        };
        assert!(select_item(Some(&ctx), &apple).unwrap().selected);
        let pear = select_item(Some(&ctx), &pear).unwrap();
        assert!(!pear.selected);
        assert!(pear.disabled);
        assert_eq!(pear.aria.get_str("aria-selected").as_deref(), Some("false"));
    }

    #[test]
    fn test_value_or_placeholder() {
        let mut ctx = context();
        let empty = select_value(Some(&ctx)).unwrap();
        assert!(!empty.state.has_value);
        assert_eq!(empty.text, "Pick a fruit");

        ctx.update_value("kiwi");
        let filled = select_value(Some(&ctx)).unwrap();
        assert!(filled.state.has_value);
        assert_eq!(filled.text, "kiwi");
    }

    #[test]
    fn test_disabled_does_not_open() {
        let mut ctx = SelectContext::new(
            "",
            SelectProps {
                disabled: true,
                ..Default::default()
            },
        );
        ctx.toggle();
        assert!(!ctx.is_open());
        let trigger = select_trigger(Some(&ctx)).unwrap();
        assert!(trigger.aria.contains("aria-disabled"));
    }
}
