//! Route table: path constants, the screen each path renders, and how the
//! guard applies to a navigation. `routes::AppRoutes` builds its router
//! segments from `Screen::segment`, so both read the same table.

use crate::features::auth::{
    guards::{self, GuardDecision},
    session::SessionRecord,
};

pub const HOME: &str = "/";
pub const PROFILE: &str = "/profile";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const VERIFY_EMAIL: &str = "/verify-email";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Profile,
    Login,
    Signup,
    VerifyEmail,
    NotFound,
}

impl Screen {
    /// Screens reachable by path; `NotFound` is the router fallback.
    pub const ROUTED: [Screen; 5] = [
        Screen::Home,
        Screen::Profile,
        Screen::Login,
        Screen::Signup,
        Screen::VerifyEmail,
    ];

    /// Absolute path of the screen. The fallback has none.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Screen::Home => Some(HOME),
            Screen::Profile => Some(PROFILE),
            Screen::Login => Some(LOGIN),
            Screen::Signup => Some(SIGNUP),
            Screen::VerifyEmail => Some(VERIFY_EMAIL),
            Screen::NotFound => None,
        }
    }

    /// Router segment: the path without its leading slash (`""` for home).
    pub fn segment(self) -> &'static str {
        self.path().map_or("", |path| path.trim_start_matches('/'))
    }

    /// Maps a location to its screen, ignoring query, fragment and a trailing
    /// slash.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let key = if trimmed.is_empty() { HOME } else { trimmed };
        Self::ROUTED
            .into_iter()
            .find(|screen| screen.path() == Some(key))
            .unwrap_or(Screen::NotFound)
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Screen::Home | Screen::Profile)
    }
}

/// What a navigation to a path produces for the given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Screen),
    Redirect { to: &'static str, replace: bool },
}

/// Route table and guard applied together to one location. The browser router
/// reaches the same outcome through `AppRoutes` and `RequireAuth`; this form
/// needs no DOM, which is how navigation is tested.
pub fn resolve(path: &str, session: &SessionRecord) -> Resolution {
    let screen = Screen::from_path(path);
    if screen.requires_auth() {
        if let GuardDecision::Redirect { to, replace } = guards::evaluate(session) {
            return Resolution::Redirect { to, replace };
        }
    }
    Resolution::Render(screen)
}
