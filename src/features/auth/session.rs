//! Session record persisted for the signed-in user. The token is opaque to the
//! client: it is stored and compared against `None`, never inspected or logged.

use serde::{Deserialize, Serialize, de};
use serde_json::Value;
use std::fmt;

/// Authenticated user's session as returned by the auth API.
///
/// `token == None` is the canonical logged-out value; the profile fields carry
/// no meaning without a token. The token is always serialized (as `null` when
/// absent) so the logged-out record encodes as `{"token":null}`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SessionRecord {
    /// The logged-out record.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Decodes a record from parsed JSON. Only objects are accepted: the derived
    /// deserializer would otherwise read an array positionally as a record.
    ///
    /// # Errors
    ///
    /// Fails for anything that is not an object or whose fields are mistyped.
    pub fn from_json_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Err(de::Error::custom("session record must be a JSON object")),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        is_authenticated(self)
    }

    /// Profile fields without the token, kept under the secondary `User` key.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }

    /// Best available label for the user: name, then email.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

// Manual impl so the token never ends up in logs through `{:?}`.
impl fmt::Debug for SessionRecord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SessionRecord")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .finish()
    }
}

/// Derived auth flag; recomputed on every read and never persisted.
pub fn is_authenticated(record: &SessionRecord) -> bool {
    record.token.is_some()
}

/// Non-sensitive projection of a session record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
