//! Route guard for the protected area. Access control is UX-only; the API must
//! still reject requests without a valid token.

use crate::{features::auth::session::SessionRecord, routes::paths};

/// Outcome of evaluating the guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the nested protected routes.
    Allow,
    /// Navigate to `to`, replacing the current history entry when `replace`.
    Redirect { to: &'static str, replace: bool },
}

/// Evaluated on every render and navigation; there is no cached state.
pub fn evaluate(record: &SessionRecord) -> GuardDecision {
    if record.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect {
            to: paths::LOGIN,
            replace: true,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use view::RequireAuth;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{GuardDecision, evaluate};
    use crate::features::auth::state::use_auth;
    use leptos::prelude::*;
    use leptos_router::{NavigateOptions, components::Outlet, hooks::use_navigate};

    /// Renders the nested routes for signed-in users and bounces everyone else
    /// to the login screen without leaving the guarded page in history.
    #[component]
    pub fn RequireAuth() -> impl IntoView {
        let auth = use_auth();
        let navigate = use_navigate();
        let decision = Memo::new(move |_| evaluate(&auth.session.get()));

        Effect::new(move |_| {
            if let GuardDecision::Redirect { to, replace } = decision.get() {
                navigate(
                    to,
                    NavigateOptions {
                        replace,
                        ..Default::default()
                    },
                );
            }
        });

        view! {
            <Show when=move || decision.get() == GuardDecision::Allow>
                <Outlet />
            </Show>
        }
    }
}
