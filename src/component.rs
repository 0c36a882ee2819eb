//! Component tags understood by the style adapters.

use std::fmt;
use std::str::FromStr;

macro_rules! components {
    ($($variant:ident => $tag:literal),* $(,)?) => {
        /// A component or sub-component that adapters know how to style.
        ///
        /// Tags are the kebab-case strings used at the adapter boundary
        /// (`"button"`, `"dialog-overlay"`, `"card-header"`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Component {
            $($variant,)*
        }

        impl Component {
            /// Every recognised component, in declaration order.
            pub const ALL: &'static [Component] = &[$(Component::$variant,)*];

            /// Returns the tag string for this component.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Component::$variant => $tag,)*
                }
            }

            /// Looks up a component by tag. Unknown tags yield `None`.
            pub fn from_tag(tag: &str) -> Option<Component> {
                match tag {
                    $($tag => Some(Component::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

components! {
    Button => "button",
    Input => "input",
    Label => "label",
    Textarea => "textarea",
    Card => "card",
    CardHeader => "card-header",
    CardTitle => "card-title",
    CardDescription => "card-description",
    CardContent => "card-content",
    CardFooter => "card-footer",
    Dialog => "dialog",
    DialogOverlay => "dialog-overlay",
    DialogHeader => "dialog-header",
    DialogTitle => "dialog-title",
    DialogDescription => "dialog-description",
    DialogFooter => "dialog-footer",
    DialogClose => "dialog-close",
    Checkbox => "checkbox",
    Radio => "radio",
    RadioGroup => "radio-group",
    RadioIndicator => "radio-indicator",
    Switch => "switch",
    Select => "select",
    SelectContent => "select-content",
    SelectItem => "select-item",
    SelectValue => "select-value",
    SelectTriggerIcon => "select-trigger-icon",
    Toast => "toast",
    ToastTitle => "toast-title",
    ToastDescription => "toast-description",
    ToastAction => "toast-action",
    ToastDismiss => "toast-dismiss",
    Toaster => "toaster",
    Tooltip => "tooltip",
    Popover => "popover",
    Dropdown => "dropdown",
    DropdownItem => "dropdown-item",
    Sheet => "sheet",
    SheetOverlay => "sheet-overlay",
    SheetHeader => "sheet-header",
    SheetTitle => "sheet-title",
    SheetDescription => "sheet-description",
    SheetFooter => "sheet-footer",
    SheetClose => "sheet-close",
    Alert => "alert",
    AlertTitle => "alert-title",
    AlertDescription => "alert-description",
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised component tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownComponent(pub String);

impl fmt::Display for UnknownComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownComponent {}

impl FromStr for Component {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::from_tag(s).ok_or_else(|| UnknownComponent(s.to_string()))
    }
}
