//! Submit flows shared by the login and signup screens: validate, call the auth
//! API, store the session, and hand back where to navigate.
//!
//! The store write completes before the flow returns, so by the time the
//! screen navigates the route guard already sees the new session. The write
//! happens even if the screen that started the request is gone by then.

use crate::{
    features::auth::{
        client::{self, AuthError, AuthTransport},
        forms::{FormErrors, LoginForm, SignupForm},
        session::SessionRecord,
        store::SessionStore,
    },
    routes::paths,
};
use tracing::{info, warn};

/// Validates and submits the login form.
///
/// # Errors
///
/// Returns the field errors to display: validation failures (the API is not
/// called) or the auth error attached to its field.
pub async fn submit_login<T: AuthTransport>(
    transport: &T,
    store: &SessionStore,
    form: &LoginForm,
) -> Result<&'static str, FormErrors> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(errors);
    }

    let record = client::sign_in(transport, &form.email, &form.password)
        .await
        .map_err(auth_errors)?;
    info!("signed in");
    Ok(establish_session(store, record))
}

/// Validates and submits the signup form. The confirmation field is checked
/// here and never sent.
///
/// # Errors
///
/// Returns the field errors to display, as for `submit_login`.
pub async fn submit_signup<T: AuthTransport>(
    transport: &T,
    store: &SessionStore,
    form: &SignupForm,
) -> Result<&'static str, FormErrors> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(errors);
    }

    let record = client::sign_up(transport, &form.name, &form.email, &form.password)
        .await
        .map_err(auth_errors)?;
    info!("account created");
    Ok(establish_session(store, record))
}

/// Signs out locally; there is no server-side session to revoke.
pub fn sign_out(store: &SessionStore) -> &'static str {
    if let Err(err) = store.clear() {
        warn!("failed to persist sign-out: {err}");
    }
    info!("signed out");
    paths::LOGIN
}

fn establish_session(store: &SessionStore, record: SessionRecord) -> &'static str {
    if let Err(err) = store.write(record) {
        warn!("session will not survive a reload: {err}");
    }
    paths::HOME
}

fn auth_errors(err: AuthError) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.push(err.field(), err.to_string());
    errors
}
