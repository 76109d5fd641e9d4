//! Alert banner for screen-level notices. Messages must be safe to render and
//! never include tokens.

use leptos::prelude::*;

/// Renders an informational banner.
#[component]
pub fn Alert(message: String) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border border-slate-200 bg-slate-50 px-4 py-3 text-sm text-slate-700"
            role="status"
        >
            {message}
        </div>
    }
}
