//! Landing screen for signed-in users. Rendered behind the route guard.

use crate::{components::AppShell, features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = Signal::derive(move || {
        auth.session.with(|session| match session.display_name() {
            Some(name) => format!("Welcome back, {name}!"),
            None => "Welcome back!".to_string(),
        })
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-lg space-y-4">
                <h1 class="text-2xl font-semibold">{move || greeting.get()}</h1>
                <A href=paths::PROFILE {..} class="text-sm text-slate-600 underline">
                    "View your profile"
                </A>
            </div>
        </AppShell>
    }
}
