//! Minimal 404 page for unknown routes.

use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <h1 class="text-7xl font-black text-slate-200 select-none">"404"</h1>
                <p class="mt-2 text-xl font-semibold">"Page not found"</p>
                <A
                    href=paths::HOME
                    {..}
                    class="mt-6 rounded-md bg-black px-5 py-2.5 text-sm font-medium text-white hover:bg-slate-800"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
