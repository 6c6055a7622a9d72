//! SVG to JSX converter page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the `RwSignal<ConverterState>` provided by `App`. Every UI
//! event is turned into an [`Action`] and fed through [`reduce`]; the side
//! effects the reducer asks for (REST conversion, clipboard, download) run
//! here, and REST responses come back in as `ConversionFinished` actions.

use leptos::prelude::*;
use wire::OptionFlag;

use crate::components::code_pane::CodePane;
use crate::components::snackbar::Snackbar;
use crate::components::switch::Switch;
use crate::state::converter::{Action, ConverterState, SideEffect, reduce};

/// Converter page: SVG input with option switches on the left, generated
/// component with name field, copy and download on the right.
#[component]
pub fn ConverterPage() -> impl IntoView {
    let state = expect_context::<RwSignal<ConverterState>>();

    // Convert the initial sample once the page is live in the browser.
    Effect::new(move || dispatch(state, Action::Init));

    let input = Signal::derive(move || state.with(|s| s.input.clone()));
    let output = Signal::derive(move || state.with(|s| s.output.clone()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let draft_name = move || state.with(|s| s.draft_name.clone());

    let on_input = Callback::new(move |text: String| dispatch(state, Action::InputChanged(text)));
    let on_dismiss = Callback::new(move |id: u64| dispatch(state, Action::DismissNotice(id)));

    let switches = OptionFlag::ALL
        .into_iter()
        .map(|flag| {
            let value = Signal::derive(move || state.with(|s| s.options.flag(flag)));
            let on_change = Callback::new(move |on: bool| dispatch(state, Action::OptionToggled(flag, on)));
            view! { <Switch label=flag.label() value=value on_change=on_change/> }
        })
        .collect_view();

    view! {
        <main class="converter">
            <div class="converter__panes">
                <CodePane title="SVG" value=input on_input=on_input>
                    {switches}
                </CodePane>
                <CodePane title="JSX" value=output loading=loading>
                    <form
                        class="converter__name"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            dispatch(state, Action::CommitName);
                        }
                    >
                        <input
                            type="text"
                            placeholder="Component Name"
                            prop:value=draft_name
                            on:input=move |ev| dispatch(state, Action::DraftNameChanged(event_target_value(&ev)))
                            on:blur=move |_| dispatch(state, Action::CommitName)
                        />
                    </form>
                    <button
                        type="button"
                        class="icon-button"
                        title="Copy to clipboard"
                        aria-label="Copy to clipboard"
                        on:click=move |_| dispatch(state, Action::Copy)
                    >
                        "Copy"
                    </button>
                    <button
                        type="button"
                        class="icon-button"
                        title="Download File"
                        aria-label="Download File"
                        on:click=move |_| dispatch(state, Action::Export)
                    >
                        "Download"
                    </button>
                </CodePane>
            </div>
            <Snackbar notice=notice on_dismiss=on_dismiss/>
        </main>
    }
}

/// Apply `action` to the page state and run the resulting side effects.
fn dispatch(state: RwSignal<ConverterState>, action: Action) {
    // The page may have been unmounted while a request was in flight.
    let Some(current) = state.try_get_untracked() else {
        return;
    };
    let previous_notice = current.notice.as_ref().map(|n| n.id);

    let transition = reduce(&current, action);
    let notice = transition.state.notice.as_ref().map(|n| n.id);
    state.set(transition.state);

    if let Some(id) = notice.filter(|id| Some(*id) != previous_notice) {
        schedule_dismiss(state, id);
    }
    for effect in transition.effects {
        run_effect(state, effect);
    }
}

fn run_effect(state: RwSignal<ConverterState>, effect: SideEffect) {
    match effect {
        SideEffect::Convert { generation, request } => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::convert_svg(&request).await;
                if let Err(e) = &result {
                    log_warning(&format!("svg-to-jsx conversion failed: {e}"));
                }
                dispatch(state, Action::ConversionFinished { generation, result });
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (state, generation, request);
        }
        SideEffect::CopyToClipboard(text) => {
            if !crate::util::clipboard::copy_text(&text) {
                log_warning("clipboard unavailable");
            }
        }
        SideEffect::SaveFile { filename, contents } => {
            if let Err(e) = crate::util::download::save_text(&filename, &contents) {
                log_warning(&format!("download failed: {e}"));
            }
        }
    }
}

fn schedule_dismiss(state: RwSignal<ConverterState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let timeout = std::time::Duration::from_millis(u64::from(crate::components::snackbar::NOTICE_TIMEOUT_MS));
        gloo_timers::future::sleep(timeout).await;
        dispatch(state, Action::DismissNotice(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, id);
}

fn log_warning(message: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("{message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}
