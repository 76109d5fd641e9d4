//! Request payloads for the auth API. They carry plaintext passwords, so they
//! only exist for the duration of a request and must never be logged; neither
//! type implements `Debug`.

use serde::Serialize;

#[derive(Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Signup body. The confirmation field stays on the client.
#[derive(Serialize)]
pub struct SignUpRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
