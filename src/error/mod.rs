//! Error types for the Gathering web client.
//!
//! Every flow in this crate ends in one of two ways: success, or a single generic failure path
//! (an alert on the login pages, a redirect to login on the my page). The variants below keep
//! the underlying cause around so it can be logged before it is collapsed into that path.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Main error type for the Gathering web client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The request could not be sent or its body could not be read.
    #[error("Failed to send request: {0}")]
    RequestError(String),
    /// The backend answered with a non-success status code.
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },
    /// The response body did not match the expected format.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    /// The callback exchange succeeded but carried no redirect target.
    #[error("Callback response did not include a redirect URL")]
    MissingRedirectUrl,
    /// No session token is present in the session store.
    #[error("No session token present")]
    Unauthenticated,
    /// A URL could not be parsed or resolved against the page origin.
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
}
