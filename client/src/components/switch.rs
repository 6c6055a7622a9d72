//! Labeled on/off switch for generation options.

use leptos::prelude::*;

#[component]
pub fn Switch(label: &'static str, #[prop(into)] value: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="switch">
            <button
                type="button"
                role="switch"
                class="switch__track"
                class:switch__track--on=move || value.get()
                aria-checked=move || if value.get() { "true" } else { "false" }
                on:click=move |_| on_change.run(!value.get_untracked())
            >
                <span class="switch__thumb"></span>
            </button>
            <span class="switch__label">{label}</span>
        </label>
    }
}
