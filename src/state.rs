//! Component state records handed to style adapters.
//!
//! Each composable derives a small, `Copy` record from its props and internal
//! flags. Adapters receive it wrapped in [`ComponentState`], a closed enum
//! with one variant per stateful component kind. Stateless sub-components
//! (titles, footers, overlays) use [`ComponentState::Empty`].
//!
//! States serialize with an internal `kind` tag so they can be supplied as
//! JSON, e.g. `{"kind": "button", "variant": "ghost", "size": "sm"}`.

use serde::{Deserialize, Serialize};

use crate::position::Side;

/// Three-step size scale shared by form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Outline,
    Destructive,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub fn as_str(self) -> &'static str {
        match self {
            CardPadding::None => "none",
            CardPadding::Sm => "sm",
            CardPadding::Md => "md",
            CardPadding::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

impl ToastVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastVariant::Default => "default",
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
            ToastVariant::Warning => "warning",
            ToastVariant::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Destructive,
}

impl AlertVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertVariant::Default => "default",
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Warning => "warning",
            AlertVariant::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Screen corner or edge center where toasts stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl ToastPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonState {
    pub variant: ButtonVariant,
    pub size: Size,
    pub disabled: bool,
    pub loading: bool,
}

/// State shared by single-line inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    pub size: Size,
    pub disabled: bool,
    pub readonly: bool,
    pub error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextareaState {
    pub size: Size,
    pub disabled: bool,
    pub readonly: bool,
    pub error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardState {
    pub padding: CardPadding,
}

/// Open state of an overlay surface (dialog, popover, dropdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenState {
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxState {
    pub size: Size,
    pub checked: bool,
    pub disabled: bool,
    pub indeterminate: bool,
}

/// State of a two-valued toggle (radio item, switch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleState {
    pub size: Size,
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioGroupState {
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectState {
    pub size: Size,
    pub disabled: bool,
    pub is_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectValueState {
    pub has_value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastState {
    pub variant: ToastVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToasterState {
    pub position: ToastPosition,
}

/// Open state plus the side a surface is attached to (tooltip, sheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidedState {
    pub is_open: bool,
    pub side: Side,
}

impl SidedState {
    /// Tooltips sit above their trigger unless told otherwise.
    pub const TOOLTIP: SidedState = SidedState {
        is_open: false,
        side: Side::Top,
    };

    /// Sheets slide in from the right unless told otherwise.
    pub const SHEET: SidedState = SidedState {
        is_open: false,
        side: Side::Right,
    };
}

impl Default for SidedState {
    fn default() -> Self {
        SidedState::TOOLTIP
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertState {
    pub variant: AlertVariant,
}

/// The state passed to [`StyleAdapter::classes`](crate::adapter::StyleAdapter::classes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ComponentState {
    /// No state: used by stateless sub-components.
    #[default]
    Empty,
    Button(ButtonState),
    Input(InputState),
    Textarea(TextareaState),
    Card(CardState),
    Dialog(OpenState),
    Checkbox(CheckboxState),
    Radio(ToggleState),
    RadioGroup(RadioGroupState),
    Switch(ToggleState),
    Select(SelectState),
    SelectValue(SelectValueState),
    Toast(ToastState),
    Toaster(ToasterState),
    Tooltip(SidedState),
    Popover(OpenState),
    Dropdown(OpenState),
    Sheet(SidedState),
    Alert(AlertState),
}

// Accessors return the carried record when the variant matches and the
// component's default record otherwise, so a mismatched state still formats.
macro_rules! state_accessor {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $ty:ty, $fallback:expr) => {
        $(#[$meta])*
        pub fn $name(&self) -> $ty {
            match self {
                ComponentState::$variant(state) => *state,
                _ => $fallback,
            }
        }
    };
}

impl ComponentState {
    state_accessor!(button, Button, ButtonState, ButtonState::default());
    state_accessor!(input, Input, InputState, InputState::default());
    state_accessor!(textarea, Textarea, TextareaState, TextareaState::default());
    state_accessor!(card, Card, CardState, CardState::default());
    state_accessor!(dialog, Dialog, OpenState, OpenState::default());
    state_accessor!(checkbox, Checkbox, CheckboxState, CheckboxState::default());
    state_accessor!(radio, Radio, ToggleState, ToggleState::default());
    state_accessor!(radio_group, RadioGroup, RadioGroupState, RadioGroupState::default());
    state_accessor!(switch, Switch, ToggleState, ToggleState::default());
    state_accessor!(select, Select, SelectState, SelectState::default());
    state_accessor!(select_value, SelectValue, SelectValueState, SelectValueState::default());
    state_accessor!(toast, Toast, ToastState, ToastState::default());
    state_accessor!(toaster, Toaster, ToasterState, ToasterState::default());
    state_accessor!(tooltip, Tooltip, SidedState, SidedState::TOOLTIP);
    state_accessor!(popover, Popover, OpenState, OpenState::default());
    state_accessor!(dropdown, Dropdown, OpenState, OpenState::default());
    state_accessor!(sheet, Sheet, SidedState, SidedState::SHEET);
    state_accessor!(alert, Alert, AlertState, AlertState::default());
}
