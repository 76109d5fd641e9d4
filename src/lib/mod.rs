//! Shared frontend utilities for API access, configuration, errors and build
//! metadata.
//!
//! Feature code reaches the network only through `api`, which resolves URLs
//! against `AppConfig` and bounds every request with an abort timeout.
//! Configuration values are public; callers must still avoid logging request
//! bodies, which carry passwords.

pub mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;

/// Short commit hash the bundle was built from, shown in the app footer.
pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

/// Crate version the bundle was built from.
pub const PKG_VERSION: &str = built_info::PKG_VERSION;

pub use api::RawResponse;
pub use errors::AppError;
