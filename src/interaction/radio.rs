use crate::aria::AriaAttributes;
use crate::error::UiError;
use crate::state::{Orientation, RadioGroupState, Size, ToggleState};

/// Selection state shared by the items of a radio group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroupContext {
    value: String,
    disabled: bool,
    orientation: Orientation,
}

impl RadioGroupContext {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn update_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn state(&self) -> RadioGroupState {
        RadioGroupState {
            orientation: self.orientation,
        }
    }

    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set("role", "radiogroup")
            .set("aria-orientation", self.orientation.as_str())
            .set_if(self.disabled, "aria-disabled", true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioItemProps {
    pub value: String,
    pub size: Option<Size>,
    /// Overrides the group's disabled flag when set.
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioItem {
    pub state: ToggleState,
    pub aria: AriaAttributes,
}

/// Derives one radio item from its group.
///
/// # Errors
///
/// Returns [`UiError::ProviderNotFound`] outside a radio group.
pub fn radio_item(ctx: Option<&RadioGroupContext>, props: &RadioItemProps) -> Result<RadioItem, UiError> {
    let ctx = ctx.ok_or(UiError::ProviderNotFound {
        context: "radio-group",
    })?;

    let state = ToggleState {
        size: props.size.unwrap_or_default(),
        disabled: props.disabled.unwrap_or(ctx.disabled),
        checked: ctx.value == props.value,
    };
    let aria = AriaAttributes::new()
        .set("role", "radio")
        .set("aria-checked", state.checked)
        .set_if(state.disabled, "aria-disabled", true);
    Ok(RadioItem { state, aria })
}
