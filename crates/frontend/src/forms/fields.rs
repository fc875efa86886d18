//! Reusable controlled inputs with a label, optional leading icon, and an
//! inline error slot.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(optional, strip_option)] input_type: Option<&'static str>,
    #[prop(optional, strip_option)] placeholder: Option<&'static str>,
    #[prop(optional, strip_option)] icon_name: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <div class="form-field__control">
                {icon_name.map(|name| view! { <span class="form-field__icon">{icon(name)}</span> })}
                <input
                    type=input_type.unwrap_or("text")
                    placeholder=placeholder.unwrap_or_default()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(optional, strip_option)] placeholder: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <div class="form-field__control">
                <textarea
                    placeholder=placeholder.unwrap_or_default()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                ></textarea>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    /// Shown as the first option when the draft value is empty.
    #[prop(optional, strip_option)]
    placeholder: Option<&'static str>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <div class="form-field__control">
                <select
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    {placeholder.map(|text| view! { <option value="">{text}</option> })}
                    {options.into_iter().map(|(option_value, option_label)| view! {
                        <option value=option_value>{option_label}</option>
                    }).collect_view()}
                </select>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    label: &'static str,
    #[prop(optional, strip_option)] placeholder: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <div class="form-field__control form-field__control--trailing">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder.unwrap_or_default()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="form-field__toggle"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { icon("eye-off") } else { icon("eye") }}
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
