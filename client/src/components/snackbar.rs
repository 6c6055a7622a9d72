//! Transient notice shown at the bottom of the page.
//!
//! DESIGN
//! ======
//! The snackbar only renders; the page schedules auto-dismissal so the timer
//! can be tied to a specific notice id.

use leptos::prelude::*;

use crate::state::converter::{Notice, NoticeKind};

/// How long a notice stays visible.
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

#[component]
pub fn Snackbar(#[prop(into)] notice: Signal<Option<Notice>>, on_dismiss: Callback<u64>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let id = n.id;
            let kind_class = match n.kind {
                NoticeKind::Success => "snackbar snackbar--success",
                NoticeKind::Error => "snackbar snackbar--error",
            };
            view! {
                <div class=kind_class role="status" on:click=move |_| on_dismiss.run(id)>
                    {n.message}
                </div>
            }
        })
    }
}
