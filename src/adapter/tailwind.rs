use super::{parse_tag, StyleAdapter};
use crate::classes::ClassList;
use crate::component::Component;
use crate::state::{
    AlertState, AlertVariant, ButtonState, ButtonVariant, CardPadding, CardState, CheckboxState,
    ComponentState, InputState, Orientation, RadioGroupState, SelectState, SelectValueState,
    SidedState, Size, TextareaState, ToastPosition, ToastState, ToastVariant, ToggleState,
    ToasterState,
};
use crate::position::Side;

/// Utility-class adapter in the shadcn/ui look.
///
/// Every class string goes through [`ClassList::merged`], so a fragment
/// added by a state flag replaces the conflicting base utility instead of
/// fighting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindAdapter;

impl StyleAdapter for TailwindAdapter {
    fn name(&self) -> &str {
        "tailwind"
    }

    fn description(&self) -> Option<&str> {
        Some("Tailwind CSS utility classes")
    }

    fn classes(&self, component: &str, state: &ComponentState) -> String {
        let Some(component) = parse_tag(component) else {
            return String::new();
        };

        let list = match component {
            Component::Button => button(state.button()),
            Component::Input => input(state.input()),
            Component::Textarea => textarea(state.textarea()),
            Component::Card => card(state.card()),
            Component::Checkbox => checkbox(state.checkbox()),
            Component::Radio => radio(state.radio()),
            Component::RadioGroup => radio_group(state.radio_group()),
            Component::Switch => switch(state.switch()),
            Component::Select => select(state.select()),
            Component::SelectValue => select_value(state.select_value()),
            Component::Toast => toast(state.toast()),
            Component::Toaster => toaster(state.toaster()),
            Component::Sheet => sheet(state.sheet()),
            Component::Alert => alert(state.alert()),
            other => ClassList::new().add(fixed(other)),
        };
        list.merged()
    }
}

// ============================================================================
// Stateful components
// ============================================================================

const FOCUS_RING: &str =
    "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2";

fn button(state: ButtonState) -> ClassList {
    let variant = match state.variant {
        ButtonVariant::Primary => {
            "bg-primary text-primary-foreground hover:bg-primary/90 active:bg-primary/80"
        }
        ButtonVariant::Secondary => {
            "bg-secondary text-secondary-foreground hover:bg-secondary/80 active:bg-secondary/70"
        }
        ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
        ButtonVariant::Outline => {
            "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
        }
        ButtonVariant::Destructive => {
            "bg-destructive text-destructive-foreground hover:bg-destructive/90"
        }
    };
    let size = match state.size {
        Size::Sm => "h-9 px-3 text-sm",
        Size::Md => "h-10 px-4 py-2",
        Size::Lg => "h-11 px-8 text-lg",
    };

    ClassList::new()
        .add("inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium")
        .add("ring-offset-background transition-colors")
        .add(FOCUS_RING)
        .add("disabled:pointer-events-none disabled:opacity-50")
        .add(variant)
        .add(size)
        .add_if(state.disabled, "opacity-50 cursor-not-allowed")
        .add_if(state.loading, "cursor-wait")
}

fn field_size(size: Size) -> &'static str {
    match size {
        Size::Sm => "h-9 text-sm",
        Size::Md => "h-10",
        Size::Lg => "h-11 text-lg",
    }
}

fn input(state: InputState) -> ClassList {
    ClassList::new()
        .add("flex w-full rounded-md border border-input bg-background px-3 py-2")
        .add("text-sm ring-offset-background")
        .add("file:border-0 file:bg-transparent file:text-sm file:font-medium")
        .add("placeholder:text-muted-foreground")
        .add(FOCUS_RING)
        .add("disabled:cursor-not-allowed disabled:opacity-50")
        .add(field_size(state.size))
        .add_if(state.error, "border-destructive focus-visible:ring-destructive")
        .add_if(state.readonly, "bg-muted")
}

fn textarea(state: TextareaState) -> ClassList {
    let size = match state.size {
        Size::Sm => "min-h-[80px] text-sm",
        Size::Md => "min-h-[100px]",
        Size::Lg => "min-h-[120px] text-lg",
    };

    ClassList::new()
        .add("flex w-full rounded-md border border-input bg-background px-3 py-2")
        .add("text-sm ring-offset-background placeholder:text-muted-foreground")
        .add(FOCUS_RING)
        .add("disabled:cursor-not-allowed disabled:opacity-50")
        .add(size)
        .add_if(state.error, "border-destructive focus-visible:ring-destructive")
        .add_if(state.readonly, "bg-muted")
}

fn card(state: CardState) -> ClassList {
    let padding = match state.padding {
        CardPadding::None => "",
        CardPadding::Sm => "p-4",
        CardPadding::Md => "p-6",
        CardPadding::Lg => "p-8",
    };

    ClassList::new()
        .add("rounded-lg border border-card-border bg-card text-card-foreground shadow-sm")
        .add(padding)
}

fn checkbox(state: CheckboxState) -> ClassList {
    ClassList::new()
        .add("peer h-4 w-4 shrink-0 rounded-sm border border-primary")
        .add("ring-offset-background")
        .add(FOCUS_RING)
        .add("disabled:cursor-not-allowed disabled:opacity-50")
        .add_if(state.checked, "bg-primary text-primary-foreground")
        .add_if(state.disabled, "opacity-50 cursor-not-allowed")
}

fn radio(state: ToggleState) -> ClassList {
    ClassList::new()
        .add("aspect-square h-4 w-4 rounded-full border border-primary text-primary")
        .add("ring-offset-background focus:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2")
        .add("disabled:cursor-not-allowed disabled:opacity-50")
        .add_if(state.disabled, "opacity-50 cursor-not-allowed")
}

fn radio_group(state: RadioGroupState) -> ClassList {
    ClassList::new()
        .add("grid gap-2")
        .add_if(state.orientation == Orientation::Horizontal, "grid-flow-col")
}

fn switch(state: ToggleState) -> ClassList {
    ClassList::new()
        .add("peer inline-flex h-6 w-11 shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent")
        .add("transition-colors")
        .add(FOCUS_RING)
        .add("focus-visible:ring-offset-background")
        .add("disabled:cursor-not-allowed disabled:opacity-50")
        .add_either(state.checked, "bg-primary", "bg-input")
        .add_if(state.disabled, "opacity-50 cursor-not-allowed")
}

fn select(state: SelectState) -> ClassList {
    ClassList::new()
        .add("flex w-full items-center justify-between rounded-md border border-input bg-background px-3 py-2")
        .add("text-sm ring-offset-background placeholder:text-muted-foreground")
        .add("focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2")
        .add("disabled:cursor-not-allowed disabled:opacity-50")
        .add(field_size(state.size))
        .add_if(state.disabled, "opacity-50 cursor-not-allowed")
}

fn select_value(state: SelectValueState) -> ClassList {
    ClassList::new().add_if(!state.has_value, "text-muted-foreground")
}

fn toast(state: ToastState) -> ClassList {
    let variant = match state.variant {
        ToastVariant::Default => "border bg-background text-foreground",
        ToastVariant::Success => {
            "border-green-500 bg-green-50 text-green-900 dark:bg-green-900 dark:text-green-50"
        }
        ToastVariant::Error => "border-destructive bg-destructive/10 text-destructive",
        ToastVariant::Warning => {
            "border-yellow-500 bg-yellow-50 text-yellow-900 dark:bg-yellow-900 dark:text-yellow-50"
        }
        ToastVariant::Info => {
            "border-blue-500 bg-blue-50 text-blue-900 dark:bg-blue-900 dark:text-blue-50"
        }
    };

    ClassList::new()
        .add("pointer-events-auto flex items-start gap-4 rounded-lg border p-4 shadow-lg transition-all")
        .add(variant)
}

fn toaster(state: ToasterState) -> ClassList {
    let position = match state.position {
        ToastPosition::TopLeft => "top-0 left-0 flex-col",
        ToastPosition::TopCenter => "top-0 left-1/2 -translate-x-1/2 flex-col items-center",
        ToastPosition::TopRight => "top-0 right-0 flex-col items-end",
        ToastPosition::BottomLeft => "bottom-0 left-0 flex-col-reverse",
        ToastPosition::BottomCenter => {
            "bottom-0 left-1/2 -translate-x-1/2 flex-col-reverse items-center"
        }
        ToastPosition::BottomRight => "bottom-0 right-0 flex-col-reverse items-end",
    };

    ClassList::new()
        .add("fixed z-[100] flex pointer-events-none p-4")
        .add(position)
}

fn sheet(state: SidedState) -> ClassList {
    let side = match state.side {
        Side::Top => "inset-x-0 top-0 border-b data-[state=closed]:slide-out-to-top data-[state=open]:slide-in-from-top",
        Side::Bottom => "inset-x-0 bottom-0 border-t data-[state=closed]:slide-out-to-bottom data-[state=open]:slide-in-from-bottom",
        Side::Left => "inset-y-0 left-0 h-full w-3/4 border-r data-[state=closed]:slide-out-to-left data-[state=open]:slide-in-from-left sm:max-w-sm",
        Side::Right => "inset-y-0 right-0 h-full w-3/4 border-l data-[state=closed]:slide-out-to-right data-[state=open]:slide-in-from-right sm:max-w-sm",
    };

    ClassList::new()
        .add("fixed z-50 gap-4 bg-background p-6 shadow-lg transition ease-in-out")
        .add("data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:duration-300 data-[state=open]:duration-500")
        .add(side)
}

fn alert(state: AlertState) -> ClassList {
    let variant = match state.variant {
        AlertVariant::Default => "bg-background text-foreground",
        AlertVariant::Info => "border-blue-200 bg-blue-50 text-blue-900 [&>svg]:text-blue-600",
        AlertVariant::Success => {
            "border-green-200 bg-green-50 text-green-900 [&>svg]:text-green-600"
        }
        AlertVariant::Warning => {
            "border-yellow-200 bg-yellow-50 text-yellow-900 [&>svg]:text-yellow-600"
        }
        AlertVariant::Destructive => {
            "border-destructive/50 text-destructive bg-destructive/10 [&>svg]:text-destructive"
        }
    };

    ClassList::new()
        .add("relative w-full rounded-lg border p-4")
        .add("[&>svg~*]:pl-7 [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground")
        .add(variant)
}

// ============================================================================
// Fixed classes
// ============================================================================

const FADE: &str = "data-[state=open]:animate-in data-[state=closed]:animate-out \
                    data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";
const ZOOM: &str = "data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95";
const OVERLAY: &str = "fixed inset-0 z-50 bg-black/80";
const CLOSE_BUTTON: &str = "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background \
                            transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 \
                            focus:ring-ring focus:ring-offset-2";
const REVERSED_FOOTER: &str = "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2";
const MUTED_SMALL: &str = "text-sm text-muted-foreground";

/// Classes for components whose look does not depend on state.
fn fixed(component: Component) -> String {
    match component {
        Component::Label => {
            "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70"
                .to_string()
        }

        Component::CardHeader => "flex flex-col space-y-1.5 p-6".to_string(),
        Component::CardTitle => "text-2xl font-semibold leading-none tracking-tight".to_string(),
        Component::CardDescription => MUTED_SMALL.to_string(),
        Component::CardContent => "p-6 pt-0".to_string(),
        Component::CardFooter => "flex items-center p-6 pt-0".to_string(),

        Component::Dialog => "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg \
                              translate-x-[-50%] translate-y-[-50%] gap-4 \
                              border bg-background p-6 shadow-lg duration-200 sm:rounded-lg"
            .to_string(),
        Component::DialogOverlay | Component::SheetOverlay => format!("{OVERLAY} {FADE}"),
        Component::DialogHeader => "flex flex-col space-y-1.5 text-center sm:text-left".to_string(),
        Component::DialogTitle => "text-lg font-semibold leading-none tracking-tight".to_string(),
        Component::DialogDescription | Component::SheetDescription => MUTED_SMALL.to_string(),
        Component::DialogFooter | Component::SheetFooter => REVERSED_FOOTER.to_string(),
        Component::DialogClose => format!("{CLOSE_BUTTON} disabled:pointer-events-none"),

        Component::RadioIndicator => "flex items-center justify-center".to_string(),

        Component::SelectContent => format!(
            "relative z-50 max-h-96 min-w-[8rem] overflow-hidden rounded-md border bg-popover \
             text-popover-foreground shadow-md {FADE} {ZOOM} \
             data-[side=bottom]:slide-in-from-top-2 data-[side=left]:slide-in-from-right-2 \
             data-[side=right]:slide-in-from-left-2 data-[side=top]:slide-in-from-bottom-2"
        ),
        Component::SelectItem => "relative flex w-full cursor-default select-none items-center \
                                  rounded-sm py-1.5 pl-8 pr-2 text-sm outline-none \
                                  focus:bg-accent focus:text-accent-foreground \
                                  data-[disabled]:pointer-events-none data-[disabled]:opacity-50"
            .to_string(),
        Component::SelectTriggerIcon => "h-4 w-4 opacity-50".to_string(),

        Component::ToastTitle => "text-sm font-semibold".to_string(),
        Component::ToastDescription => "text-sm opacity-90".to_string(),
        Component::ToastAction => format!(
            "inline-flex items-center justify-center rounded-md text-sm font-medium \
             h-8 px-3 ring-offset-background transition-colors hover:bg-secondary {FOCUS_RING}"
        ),
        Component::ToastDismiss => "inline-flex items-center justify-center rounded-md \
                                    h-6 w-6 shrink-0 opacity-70 transition-opacity \
                                    hover:opacity-100 focus-visible:outline-none \
                                    focus-visible:ring-2 focus-visible:ring-ring"
            .to_string(),

        Component::Tooltip => "z-50 overflow-hidden rounded-md border bg-popover px-3 py-1.5 \
                               text-sm text-popover-foreground shadow-md \
                               animate-in fade-in-0 zoom-in-95 \
                               data-[state=closed]:animate-out data-[state=closed]:fade-out-0 \
                               data-[state=closed]:zoom-out-95"
            .to_string(),
        Component::Popover => format!(
            "z-50 w-72 rounded-md border bg-popover p-4 text-popover-foreground shadow-md \
             outline-none {FADE} {ZOOM}"
        ),
        Component::Dropdown => format!(
            "z-50 min-w-[8rem] overflow-hidden rounded-md border bg-popover p-1 \
             text-popover-foreground shadow-md {FADE} {ZOOM}"
        ),
        Component::DropdownItem => "relative flex cursor-default select-none items-center \
                                    rounded-sm px-2 py-1.5 text-sm outline-none transition-colors \
                                    focus:bg-accent focus:text-accent-foreground \
                                    data-[disabled]:pointer-events-none data-[disabled]:opacity-50"
            .to_string(),

        Component::SheetHeader => "flex flex-col space-y-2 text-center sm:text-left".to_string(),
        Component::SheetTitle => "text-lg font-semibold text-foreground".to_string(),
        Component::SheetClose => CLOSE_BUTTON.to_string(),

        Component::AlertTitle => "mb-1 font-medium leading-none tracking-tight".to_string(),
        Component::AlertDescription => "text-sm [&_p]:leading-relaxed".to_string(),

        // Stateful components are formatted above.
        Component::Button
        | Component::Input
        | Component::Textarea
        | Component::Card
        | Component::Checkbox
        | Component::Radio
        | Component::RadioGroup
        | Component::Switch
        | Component::Select
        | Component::SelectValue
        | Component::Toast
        | Component::Toaster
        | Component::Sheet
        | Component::Alert => String::new(),
    }
}
