//! Auth feature: the persisted session, the auth API client, form validation,
//! the submit flows and the route guard. View code lives in `routes`; this
//! module keeps session handling in one place and must never log tokens or
//! passwords.
//!
//! Flow Overview: a screen validates its form, the flow calls the auth client,
//! a successful response is written to the session store, and only then does
//! the screen navigate. The guard re-evaluates the stored session on every
//! navigation into the protected area.

pub mod client;
pub mod feedback;
pub mod flow;
pub mod forms;
pub mod guards;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod storage;
pub mod store;
pub mod types;
