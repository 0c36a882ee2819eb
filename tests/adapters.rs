use proptest::prelude::*;
use soave_ui::adapter::{
    AdapterRegistry, CssVariablesAdapter, HeadlessAdapter, StyleAdapter, TailwindAdapter,
};
use soave_ui::state::{
    ButtonState, ButtonVariant, CheckboxState, ComponentState, InputState, SidedState, Size,
};
use soave_ui::{merge_classes, Component, Side};

fn size() -> impl Strategy<Value = Size> {
    prop_oneof![Just(Size::Sm), Just(Size::Md), Just(Size::Lg)]
}

fn variant() -> impl Strategy<Value = ButtonVariant> {
    prop_oneof![
        Just(ButtonVariant::Primary),
        Just(ButtonVariant::Secondary),
        Just(ButtonVariant::Ghost),
        Just(ButtonVariant::Outline),
        Just(ButtonVariant::Destructive),
    ]
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Top), Just(Side::Right), Just(Side::Bottom), Just(Side::Left)]
}

fn state() -> impl Strategy<Value = ComponentState> {
    prop_oneof![
        Just(ComponentState::Empty),
        (variant(), size(), any::<bool>(), any::<bool>()).prop_map(|(variant, size, disabled, loading)| {
            ComponentState::Button(ButtonState {
                variant,
                size,
                disabled,
                loading,
            })
        }),
        (size(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(size, disabled, readonly, error)| {
                ComponentState::Input(InputState {
                    size,
                    disabled,
                    readonly,
                    error,
                })
            }
        ),
        (size(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(size, checked, disabled, indeterminate)| {
                ComponentState::Checkbox(CheckboxState {
                    size,
                    checked,
                    disabled,
                    indeterminate,
                })
            }
        ),
        (any::<bool>(), side()).prop_map(|(is_open, side)| ComponentState::Sheet(SidedState { is_open, side })),
    ]
}

fn component() -> impl Strategy<Value = Component> {
    prop::sample::select(Component::ALL)
}

fn builtins() -> Vec<Box<dyn StyleAdapter>> {
    vec![
        Box::new(TailwindAdapter),
        Box::new(CssVariablesAdapter),
        Box::new(HeadlessAdapter),
    ]
}

proptest! {
    #[test]
    fn every_adapter_is_total_and_pure(component in component(), state in state()) {
        for adapter in builtins() {
            let first = adapter.classes(component.as_str(), &state);
            let second = adapter.classes(component.as_str(), &state);
            prop_assert_eq!(&first, &second);
            prop_assert!(!first.starts_with(' ') && !first.ends_with(' '));
        }
    }

    #[test]
    fn headless_is_always_empty(component in component(), state in state()) {
        prop_assert_eq!(HeadlessAdapter.classes(component.as_str(), &state), "");
    }

    #[test]
    fn unknown_tags_yield_empty(tag in "[a-z]{1,8}-x[a-z]{0,4}", state in state()) {
        for adapter in builtins() {
            prop_assert_eq!(adapter.classes(&tag, &state), "");
        }
    }

    #[test]
    fn tailwind_output_is_already_merged(component in component(), state in state()) {
        let classes = TailwindAdapter.classes(component.as_str(), &state);
        prop_assert_eq!(merge_classes(&classes), classes);
    }
}

#[test]
fn test_stateful_tags_are_non_empty() {
    let registry = AdapterRegistry::with_builtins();
    for name in ["tailwind", "css-variables"] {
        let adapter = registry.get(name).unwrap();
        for tag in ["button", "input", "card", "dialog", "toast", "sheet", "alert"] {
            assert!(
                !adapter.classes(tag, &ComponentState::Empty).is_empty(),
                "{name} produced nothing for {tag}"
            );
        }
    }
}

#[test]
fn test_mismatched_state_uses_component_default() {
    let adapter = CssVariablesAdapter;
    let mismatched = ComponentState::Checkbox(CheckboxState {
        checked: true,
        ..Default::default()
    });
    assert_eq!(
        adapter.classes("button", &mismatched),
        adapter.classes("button", &ComponentState::Button(ButtonState::default()))
    );
}
