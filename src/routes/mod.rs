pub mod paths;

#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod profile;
#[cfg(target_arch = "wasm32")]
mod signup;
#[cfg(target_arch = "wasm32")]
mod verify_email;

#[cfg(target_arch = "wasm32")]
pub use view::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{
        home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
        signup::SignUpPage, verify_email::VerifyEmailPage,
    };
    use super::paths::Screen;
    use crate::features::auth::guards::RequireAuth;
    use leptos::prelude::*;
    use leptos_router::{
        StaticSegment,
        components::{ParentRoute, Route, Routes},
    };

    /// `/` and `/profile` sit under the guard; everything else is public.
    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment(Screen::Login.segment()) view=LoginPage />
                <Route path=StaticSegment(Screen::Signup.segment()) view=SignUpPage />
                <Route path=StaticSegment(Screen::VerifyEmail.segment()) view=VerifyEmailPage />
                <ParentRoute path=StaticSegment("") view=RequireAuth>
                    <Route path=StaticSegment(Screen::Home.segment()) view=HomePage />
                    <Route path=StaticSegment(Screen::Profile.segment()) view=ProfilePage />
                </ParentRoute>
            </Routes>
        }
    }
}
