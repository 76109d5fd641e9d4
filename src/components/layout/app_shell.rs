//! Shared layout wrapper with the header navigation and content container.
//! Navigation is client-side only; the API must enforce access control.

use crate::{app_lib, features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_LINK: &str = "block rounded px-3 py-2 text-sm text-slate-900 hover:bg-slate-100";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;

    view! {
        <div class="flex min-h-screen flex-col bg-slate-50">
            <header class="border-b border-slate-200 bg-white">
                <div class="mx-auto flex max-w-screen-lg items-center justify-between p-4">
                    <A href=paths::HOME {..} class="text-lg font-semibold tracking-tight">
                        "Tweeter"
                    </A>
                    <nav class="flex items-center gap-2">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <Show
                                        when=on_login
                                        fallback=|| {
                                            view! {
                                                <A href=paths::LOGIN {..} class=NAV_LINK>
                                                    "Sign In"
                                                </A>
                                            }
                                        }
                                    >
                                        <A href=paths::SIGNUP {..} class=NAV_LINK>
                                            "Sign Up"
                                        </A>
                                    </Show>
                                }
                            }
                        >
                            <A href=paths::PROFILE {..} class=NAV_LINK>
                                "Profile"
                            </A>
                            // The guard takes protected pages back to the login screen.
                            <button type="button" class=NAV_LINK on:click=move |_| auth.sign_out()>
                                "Sign Out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-slate-400">
                {format!("Tweeter v{} ({})", app_lib::PKG_VERSION, app_lib::GIT_COMMIT_HASH)}
            </footer>
        </div>
    }
}
