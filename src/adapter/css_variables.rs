use super::{parse_tag, StyleAdapter};
use crate::classes::ClassList;
use crate::component::Component;
use crate::state::{CardPadding, ComponentState};

/// BEM-named classes styled by a CSS custom-property stylesheet.
///
/// Blocks are the component name (`button`), modifiers follow `--`
/// (`button--primary`, `card--padding-md`) and sub-components are elements
/// after `__` (`dialog__overlay`). The stylesheet itself reads its colors
/// from the variables produced by [`generate_theme_css`](crate::theme::generate_theme_css).
#[derive(Debug, Clone, Copy, Default)]
pub struct CssVariablesAdapter;

impl StyleAdapter for CssVariablesAdapter {
    fn name(&self) -> &str {
        "css-variables"
    }

    fn description(&self) -> Option<&str> {
        Some("CSS custom properties with BEM class names")
    }

    fn classes(&self, component: &str, state: &ComponentState) -> String {
        let Some(component) = parse_tag(component) else {
            return String::new();
        };

        let list = match component {
            Component::Button => {
                let s = state.button();
                ClassList::new()
                    .add("button")
                    .add(format!("button--{}", s.variant.as_str()))
                    .add(format!("button--{}", s.size.as_str()))
                    .add_if(s.disabled, "button--disabled")
                    .add_if(s.loading, "button--loading")
            }
            Component::Input => {
                let s = state.input();
                field("input", s.size.as_str(), s.error, s.disabled, s.readonly)
            }
            Component::Textarea => {
                let s = state.textarea();
                field("textarea", s.size.as_str(), s.error, s.disabled, s.readonly)
            }
            Component::Card => {
                let s = state.card();
                ClassList::new().add("card").add_if(
                    s.padding != CardPadding::None,
                    format!("card--padding-{}", s.padding.as_str()),
                )
            }
            Component::Dialog => open("dialog", state.dialog().is_open),
            Component::Popover => open("popover", state.popover().is_open),
            Component::Dropdown => open("dropdown", state.dropdown().is_open),
            Component::Checkbox => {
                let s = state.checkbox();
                ClassList::new()
                    .add("checkbox")
                    .add_if(s.checked, "checkbox--checked")
                    .add_if(s.indeterminate, "checkbox--indeterminate")
                    .add_if(s.disabled, "checkbox--disabled")
            }
            Component::Radio => {
                let s = state.radio();
                ClassList::new()
                    .add("radio")
                    .add_if(s.checked, "radio--checked")
                    .add_if(s.disabled, "radio--disabled")
            }
            Component::Switch => {
                let s = state.switch();
                ClassList::new()
                    .add("switch")
                    .add_if(s.checked, "switch--checked")
                    .add_if(s.disabled, "switch--disabled")
            }
            Component::RadioGroup => ClassList::new().add("radio-group").add(format!(
                "radio-group--{}",
                state.radio_group().orientation.as_str()
            )),
            Component::Select => {
                let s = state.select();
                ClassList::new()
                    .add("select")
                    .add(format!("select--{}", s.size.as_str()))
                    .add_if(s.is_open, "select--open")
                    .add_if(s.disabled, "select--disabled")
            }
            Component::SelectValue => ClassList::new()
                .add("select__value")
                .add_if(!state.select_value().has_value, "select__value--placeholder"),
            Component::Toast => ClassList::new()
                .add("toast")
                .add(format!("toast--{}", state.toast().variant.as_str())),
            Component::Toaster => ClassList::new()
                .add("toaster")
                .add(format!("toaster--{}", state.toaster().position.as_str())),
            Component::Tooltip => {
                let s = state.tooltip();
                open("tooltip", s.is_open).add(format!("tooltip--{}", s.side.as_str()))
            }
            Component::Sheet => {
                let s = state.sheet();
                open("sheet", s.is_open).add(format!("sheet--{}", s.side.as_str()))
            }
            Component::Alert => ClassList::new()
                .add("alert")
                .add(format!("alert--{}", state.alert().variant.as_str())),
            Component::Label => ClassList::new().add("label"),
            other => ClassList::new().add(element(other)),
        };
        list.join()
    }
}

fn field(block: &'static str, size: &str, error: bool, disabled: bool, readonly: bool) -> ClassList {
    ClassList::new()
        .add(block)
        .add(format!("{block}--{size}"))
        .add_if(error, format!("{block}--error"))
        .add_if(disabled, format!("{block}--disabled"))
        .add_if(readonly, format!("{block}--readonly"))
}

fn open(block: &'static str, is_open: bool) -> ClassList {
    ClassList::new()
        .add(block)
        .add_if(is_open, format!("{block}--open"))
}

/// Turns a sub-component tag into its BEM element name.
///
/// The block is the leading component name and the rest of the tag is the
/// element: `dialog-overlay` becomes `dialog__overlay` and
/// `select-trigger-icon` becomes `select__trigger-icon`.
fn element(component: Component) -> String {
    let tag = component.as_str();
    match tag.split_once('-') {
        Some((block, element)) => format!("{block}__{element}"),
        None => tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Side;
    use crate::state::*;

    fn classes(component: &str, state: ComponentState) -> String {
        CssVariablesAdapter.classes(component, &state)
    }

    #[test]
    fn test_button() {
        let state = ComponentState::Button(ButtonState {
            variant: ButtonVariant::Destructive,
            size: Size::Lg,
            disabled: true,
            loading: true,
        });
        assert_eq!(
            classes("button", state),
            "button button--destructive button--lg button--disabled button--loading"
        );
    }

    #[test]
    fn test_input_flags_in_order() {
        let state = ComponentState::Input(InputState {
            size: Size::Sm,
            disabled: true,
            readonly: true,
            error: true,
        });
        assert_eq!(
            classes("input", state),
            "input input--sm input--error input--disabled input--readonly"
        );
    }

    #[test]
    fn test_card_padding() {
        assert_eq!(classes("card", ComponentState::Empty), "card card--padding-md");
        assert_eq!(
            classes(
                "card",
                ComponentState::Card(CardState {
                    padding: CardPadding::None
                })
            ),
            "card"
        );
    }

    #[test]
    fn test_open_modifiers() {
        let open_state = OpenState { is_open: true };
        assert_eq!(classes("dialog", ComponentState::Dialog(open_state)), "dialog dialog--open");
        assert_eq!(classes("dropdown", ComponentState::Dropdown(open_state)), "dropdown dropdown--open");
        assert_eq!(classes("popover", ComponentState::Empty), "popover");
    }

    #[test]
    fn test_checkbox_indeterminate() {
        let state = ComponentState::Checkbox(CheckboxState {
            indeterminate: true,
            ..Default::default()
        });
        assert_eq!(classes("checkbox", state), "checkbox checkbox--indeterminate");
    }

    #[test]
    fn test_sided_surfaces() {
        let state = ComponentState::Tooltip(SidedState {
            is_open: true,
            side: Side::Left,
        });
        assert_eq!(classes("tooltip", state), "tooltip tooltip--open tooltip--left");
        assert_eq!(classes("tooltip", ComponentState::Empty), "tooltip tooltip--top");
        assert_eq!(classes("sheet", ComponentState::Empty), "sheet sheet--right");
    }

    #[test]
    fn test_select_value_placeholder() {
        assert_eq!(
            classes("select-value", ComponentState::Empty),
            "select__value select__value--placeholder"
        );
        assert_eq!(
            classes(
                "select-value",
                ComponentState::SelectValue(SelectValueState { has_value: true })
            ),
            "select__value"
        );
    }

    #[test]
    fn test_block_modifiers() {
        assert_eq!(classes("toaster", ComponentState::Empty), "toaster toaster--bottom-right");
        assert_eq!(classes("radio-group", ComponentState::Empty), "radio-group radio-group--vertical");
        assert_eq!(classes("alert", ComponentState::Empty), "alert alert--default");
        assert_eq!(classes("toast", ComponentState::Empty), "toast toast--default");
    }

    #[test]
    fn test_elements() {
        assert_eq!(classes("dialog-overlay", ComponentState::Empty), "dialog__overlay");
        assert_eq!(classes("select-trigger-icon", ComponentState::Empty), "select__trigger-icon");
        assert_eq!(classes("card-footer", ComponentState::Empty), "card__footer");
        assert_eq!(classes("radio-indicator", ComponentState::Empty), "radio__indicator");
        assert_eq!(classes("dropdown-item", ComponentState::Empty), "dropdown__item");
        assert_eq!(classes("label", ComponentState::Empty), "label");
    }

    #[test]
    fn test_unknown_component() {
        assert_eq!(classes("nav-menu", ComponentState::Empty), "");
    }
}
