use leptos::prelude::*;

/// Checkbox with a derived third state.
///
/// The `indeterminate` flag only exists as a DOM property, not an attribute,
/// so it is pushed onto the input element through a node ref whenever the
/// signal changes.
#[component]
pub fn TriStateCheckbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Fully-checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Partially-checked state; ignored while `checked` is true
    #[prop(optional, into)]
    indeterminate: Signal<bool>,
    /// Change event handler, receives the new checked value
    #[prop(optional, into)]
    on_change: Option<Callback<bool>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let flag = indeterminate.get();
        if let Some(input) = input_ref.get() {
            input.set_indeterminate(flag);
        }
    });

    let checkbox_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__checkbox-wrapper" class:form__checkbox-wrapper--disabled=disabled>
            <input
                node_ref=input_ref
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
