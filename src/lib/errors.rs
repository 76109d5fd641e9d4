//! Transport-level errors raised while talking to the auth API. Auth flows map
//! these into `AuthError::Unknown`; the details only reach the logs.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request error: {0}")]
    Serialization(String),
}
