use crate::{
    components::ButtonVariant,
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the signed-in state for auth routes (login/signup). Signing out here
/// flips `visible` so the page falls back to its form.
#[component]
pub fn AlreadySignedInPanel(visible: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let user_label = Signal::derive(move || {
        auth.session
            .with(|session| session.display_name().map(str::to_string))
            .unwrap_or_else(|| "your account".to_string())
    });

    view! {
        <div class="space-y-6 text-center">
            <p class="text-slate-500">
                "You are currently signed in as "
                <span class="font-medium text-slate-900">{move || user_label.get()}</span>
                "."
            </p>
            <div class="flex flex-col gap-3">
                <A href=paths::HOME {..} class=ButtonVariant::Primary.class()>
                    "Go to Home"
                </A>
                <button
                    type="button"
                    class=ButtonVariant::Secondary.class()
                    on:click=move |_| {
                        auth.sign_out();
                        visible.set(false);
                    }
                >
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
