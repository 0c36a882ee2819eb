//! Form controls and static containers.
//!
//! Each function derives a component's state record plus the ARIA
//! attributes the host should set. Props left as `None` fall back to the
//! provider's defaults (see [`crate::config`]).
//!
//! ```rust
//! use soave_ui::config::UiProvider;
//! use soave_ui::controls::{button, ButtonProps};
//! use soave_ui::state::Size;
//!
//! let provider = UiProvider::from_json(&serde_json::json!({
//!     "button": { "default_size": "sm" }
//! })).unwrap();
//! let button = button(Some(&provider), &ButtonProps { loading: true, ..Default::default() });
//!
//! assert_eq!(button.state.size, Size::Sm);
//! assert_eq!(button.aria.get_str("aria-busy").as_deref(), Some("true"));
//! ```

use crate::aria::AriaAttributes;
use crate::config::{ui_config, UiProvider};
use crate::state::{
    AlertState, AlertVariant, ButtonState, ButtonVariant, CardPadding, CardState, CheckboxState,
    InputState, Size, TextareaState, ToggleState,
};

// ============================================================================
// Button
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: Option<ButtonVariant>,
    pub size: Option<Size>,
    pub disabled: bool,
    pub loading: bool,
    pub button_type: ButtonType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub state: ButtonState,
    pub button_type: ButtonType,
    pub aria: AriaAttributes,
}

pub fn button(provider: Option<&UiProvider>, props: &ButtonProps) -> Button {
    let defaults = ui_config(provider).button;
    let state = ButtonState {
        variant: props.variant.unwrap_or(defaults.default_variant),
        size: props.size.unwrap_or(defaults.default_size),
        disabled: props.disabled,
        loading: props.loading,
    };
    let aria = AriaAttributes::new()
        .set("role", "button")
        .set("type", props.button_type.as_str())
        .set_if(state.disabled, "aria-disabled", true)
        .set_if(state.loading, "aria-busy", true);
    Button {
        state,
        button_type: props.button_type,
        aria,
    }
}

// ============================================================================
// Input and textarea
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputProps {
    /// The HTML input type; `"text"` when unset.
    pub input_type: Option<String>,
    pub size: Option<Size>,
    pub disabled: bool,
    pub readonly: bool,
    /// Error message, if the value is invalid.
    pub error: Option<String>,
    /// Id of the element describing the error.
    pub error_id: Option<String>,
}

fn field_aria(has_error: bool, readonly: bool, error_id: Option<&str>) -> AriaAttributes {
    AriaAttributes::new()
        .set_if(has_error, "aria-invalid", true)
        .set_opt("aria-describedby", error_id)
        .set_if(readonly, "aria-readonly", true)
}

/// A text field with focus tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    props: InputProps,
    size: Size,
    is_focused: bool,
}

impl Input {
    pub fn new(provider: Option<&UiProvider>, props: InputProps) -> Self {
        let size = props.size.unwrap_or(ui_config(provider).input.default_size);
        Self {
            props,
            size,
            is_focused: false,
        }
    }

    pub fn input_type(&self) -> &str {
        self.props.input_type.as_deref().unwrap_or("text")
    }

    pub fn state(&self) -> InputState {
        InputState {
            size: self.size,
            disabled: self.props.disabled,
            readonly: self.props.readonly,
            error: self.props.error.is_some(),
        }
    }

    pub fn aria(&self) -> AriaAttributes {
        field_aria(
            self.props.error.is_some(),
            self.props.readonly,
            self.props.error_id.as_deref(),
        )
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn handle_focus(&mut self) {
        self.is_focused = true;
    }

    pub fn handle_blur(&mut self) {
        self.is_focused = false;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resize {
    None,
    #[default]
    Vertical,
    Horizontal,
    Both,
}

impl Resize {
    pub fn as_str(self) -> &'static str {
        match self {
            Resize::None => "none",
            Resize::Vertical => "vertical",
            Resize::Horizontal => "horizontal",
            Resize::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextareaProps {
    pub size: Option<Size>,
    pub disabled: bool,
    pub readonly: bool,
    pub error: Option<String>,
    pub error_id: Option<String>,
    pub resize: Resize,
}

/// A multi-line text field. Unlike [`Input`] its size does not come from
/// the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Textarea {
    props: TextareaProps,
    is_focused: bool,
}

impl Textarea {
    pub fn new(props: TextareaProps) -> Self {
        Self {
            props,
            is_focused: false,
        }
    }

    pub fn resize(&self) -> Resize {
        self.props.resize
    }

    pub fn state(&self) -> TextareaState {
        TextareaState {
            size: self.props.size.unwrap_or_default(),
            disabled: self.props.disabled,
            readonly: self.props.readonly,
            error: self.props.error.is_some(),
        }
    }

    pub fn aria(&self) -> AriaAttributes {
        field_aria(
            self.props.error.is_some(),
            self.props.readonly,
            self.props.error_id.as_deref(),
        )
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn handle_focus(&mut self) {
        self.is_focused = true;
    }

    pub fn handle_blur(&mut self) {
        self.is_focused = false;
    }
}

// ============================================================================
// Checkbox and switch
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckboxProps {
    pub size: Option<Size>,
    pub disabled: bool,
    pub indeterminate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub state: CheckboxState,
    pub aria: AriaAttributes,
}

/// `aria-checked` reads `"mixed"` while indeterminate, whatever `checked` is.
pub fn checkbox(props: &CheckboxProps, checked: bool) -> Checkbox {
    let state = CheckboxState {
        size: props.size.unwrap_or_default(),
        checked,
        disabled: props.disabled,
        indeterminate: props.indeterminate,
    };
    let aria = AriaAttributes::new().set("role", "checkbox");
    let aria = if state.indeterminate {
        aria.set("aria-checked", "mixed")
    } else {
        aria.set("aria-checked", state.checked)
    };
    Checkbox {
        state,
        aria: aria.set_if(state.disabled, "aria-disabled", true),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchProps {
    pub size: Option<Size>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub state: ToggleState,
    pub aria: AriaAttributes,
}

pub fn switch(props: &SwitchProps, checked: bool) -> Switch {
    let state = ToggleState {
        size: props.size.unwrap_or_default(),
        checked,
        disabled: props.disabled,
    };
    let aria = AriaAttributes::new()
        .set("role", "switch")
        .set("aria-checked", state.checked)
        .set_if(state.disabled, "aria-disabled", true);
    Switch { state, aria }
}

// ============================================================================
// Card, alert, label
// ============================================================================

pub fn card(provider: Option<&UiProvider>, padding: Option<CardPadding>) -> CardState {
    CardState {
        padding: padding.unwrap_or(ui_config(provider).card.default_padding),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub state: AlertState,
    /// Name of the icon shown beside the message.
    pub icon: &'static str,
    pub aria: AriaAttributes,
}

pub fn alert_icon(variant: AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Default | AlertVariant::Info => "info",
        AlertVariant::Success => "circle-check",
        AlertVariant::Warning => "triangle-alert",
        AlertVariant::Destructive => "circle-alert",
    }
}

pub fn alert(provider: Option<&UiProvider>, variant: Option<AlertVariant>) -> Alert {
    let variant = variant.unwrap_or(ui_config(provider).alert.default_variant);
    Alert {
        state: AlertState { variant },
        icon: alert_icon(variant),
        aria: AriaAttributes::new().set("role", "alert"),
    }
}

/// Attributes for a `<label>`; `for_id` names the labelled control.
pub fn label(for_id: Option<&str>) -> AriaAttributes {
    AriaAttributes::new().set_opt("for", for_id)
}
