//! Profile screen showing the stored session's user fields. Rendered behind the
//! route guard, which also handles the redirect after signing out here. The
//! token itself is never displayed.

use crate::{
    components::{AppShell, ButtonVariant},
    features::auth::state::use_auth,
};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;

    let row = move |label: &'static str, value: Signal<String>| {
        view! {
            <div class="flex justify-between border-b border-slate-100 py-3 text-sm">
                <dt class="text-slate-500">{label}</dt>
                <dd class="font-medium text-slate-900">{move || value.get()}</dd>
            </div>
        }
    };
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "Not provided".to_string());

    view! {
        <AppShell>
            <div class="mx-auto max-w-lg rounded-xl border border-slate-200 bg-white p-6">
                <h1 class="text-2xl font-semibold">"Profile"</h1>
                <dl class="mt-4">
                    {row("Name", Signal::derive(move || or_dash(session.with(|s| s.name.clone()))))}
                    {row("Email", Signal::derive(move || or_dash(session.with(|s| s.email.clone()))))}
                    {row(
                        "User ID",
                        Signal::derive(move || or_dash(session.with(|s| s.id.map(|id| id.to_string())))),
                    )}
                </dl>
                <div class="mt-6">
                    <button
                        type="button"
                        class=ButtonVariant::Secondary.class()
                        on:click=move |_| auth.sign_out()
                    >
                        "Sign Out"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
