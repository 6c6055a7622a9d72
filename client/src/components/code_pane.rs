//! Titled editor pane used for both the SVG input and the generated output.

use leptos::prelude::*;

/// A code pane with a toolbar slot. When `on_input` is absent the text area
/// is read-only.
#[component]
pub fn CodePane(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let readonly = on_input.is_none();
    view! {
        <section class="code-pane" class:code-pane--loading=move || loading.get()>
            <header class="code-pane__header">
                <h2 class="code-pane__title">{title}</h2>
                <div class="code-pane__actions">{children()}</div>
            </header>
            <textarea
                class="code-pane__editor"
                spellcheck="false"
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </section>
    }
}
