//! Client for the external auth API. Both operations are stateless: they map
//! the HTTP exchange onto `Result<SessionRecord, AuthError>` and leave storing
//! the session and navigating to the calling screen. Nothing here retries.

use crate::{
    app_lib::{AppError, RawResponse},
    features::auth::{
        forms::FormField,
        session::SessionRecord,
        types::{SignInRequest, SignUpRequest},
    },
};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub const SIGNIN_PATH: &str = "/auth/signin";
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Status the API uses for both bad credentials and taken emails.
const STATUS_UNAUTHORIZED: u16 = 401;

/// Auth failures; `Display` is the message shown next to the form field.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("This email is already taken")]
    EmailTaken,
    #[error("Something went wrong sorry")]
    Unknown,
}

impl AuthError {
    /// Form field the message is attached to.
    pub fn field(self) -> FormField {
        match self {
            AuthError::InvalidCredentials | AuthError::EmailTaken => FormField::Email,
            AuthError::Unknown => FormField::Password,
        }
    }
}

/// Seam between the auth client and the network.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// Posts `body` as JSON to `path` and returns the raw exchange, whatever
    /// its status. `Err` means no response was received.
    async fn post_json<B: Serialize>(&self, path: &str, body: &B)
    -> Result<RawResponse, AppError>;
}

/// Browser transport backed by `gloo-net`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

#[cfg(target_arch = "wasm32")]
impl AuthTransport for HttpTransport {
    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, AppError> {
        crate::app_lib::api::post_json(path, body).await
    }
}

/// Signs in with email and password.
///
/// # Errors
///
/// `InvalidCredentials` on 401, `Unknown` on any other failure.
pub async fn sign_in<T: AuthTransport>(
    transport: &T,
    email: &str,
    password: &SecretString,
) -> Result<SessionRecord, AuthError> {
    let request = SignInRequest {
        email,
        password: password.expose_secret(),
    };
    let response = send(transport, SIGNIN_PATH, &request).await?;
    sign_in_outcome(&response)
}

/// Registers a new account and returns its session.
///
/// # Errors
///
/// `EmailTaken` on 401, `Unknown` on any other failure or an empty success body.
pub async fn sign_up<T: AuthTransport>(
    transport: &T,
    name: &str,
    email: &str,
    password: &SecretString,
) -> Result<SessionRecord, AuthError> {
    let request = SignUpRequest {
        name,
        email,
        password: password.expose_secret(),
    };
    let response = send(transport, SIGNUP_PATH, &request).await?;
    sign_up_outcome(&response)
}

async fn send<T: AuthTransport, B: Serialize>(
    transport: &T,
    path: &str,
    body: &B,
) -> Result<RawResponse, AuthError> {
    transport.post_json(path, body).await.map_err(|err| {
        warn!(path, "auth request failed: {err}");
        AuthError::Unknown
    })
}

/// Maps a sign-in exchange onto the session or an auth error.
pub fn sign_in_outcome(response: &RawResponse) -> Result<SessionRecord, AuthError> {
    if response.is_success() {
        return parse_session_body(&response.body);
    }
    debug!(status = response.status, "sign-in rejected");
    match response.status {
        STATUS_UNAUTHORIZED => Err(AuthError::InvalidCredentials),
        _ => Err(AuthError::Unknown),
    }
}

/// Maps a sign-up exchange onto the session or an auth error.
pub fn sign_up_outcome(response: &RawResponse) -> Result<SessionRecord, AuthError> {
    if response.is_success() {
        return parse_session_body(&response.body);
    }
    debug!(status = response.status, "sign-up rejected");
    match response.status {
        STATUS_UNAUTHORIZED => Err(AuthError::EmailTaken),
        _ => Err(AuthError::Unknown),
    }
}

/// Decodes a success body. Empty or falsy bodies and bodies without a token
/// are failures: storing them would produce a logged-out "session".
fn parse_session_body(body: &str) -> Result<SessionRecord, AuthError> {
    let value: Value = serde_json::from_str(body.trim()).map_err(|err| {
        debug!("auth response is not JSON: {err}");
        AuthError::Unknown
    })?;
    if is_falsy(&value) {
        debug!("auth response body is empty");
        return Err(AuthError::Unknown);
    }
    let record = SessionRecord::from_json_value(value).map_err(|err| {
        debug!("auth response is not a session: {err}");
        AuthError::Unknown
    })?;
    if record.is_authenticated() {
        Ok(record)
    } else {
        debug!("auth response carries no token");
        Err(AuthError::Unknown)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
