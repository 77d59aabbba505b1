// Error type shared by the config, api and run layers. The binary decides
// how each variant maps to an exit status.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    /// Neither a token nor a complete username/password pair was given.
    #[error("Either --token or both --username and --password (or env vars) must be provided.")]
    MissingCredentials,

    /// The description file could not be read as UTF-8 text.
    #[error("Error reading {}", path.display())]
    ReadDescription {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The login endpoint answered with a non-2xx status.
    #[error("Error obtaining token: {status} {body}")]
    Login { status: StatusCode, body: String },

    /// The login endpoint answered 2xx but without a usable token.
    #[error("Token not found in response.")]
    MissingToken,

    /// A 2xx response body that is not the JSON we expect.
    #[error("Unexpected response from {url}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The session token contains bytes that cannot go in a header.
    #[error("Token is not a valid Authorization header value")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),

    /// The update endpoint answered with a non-2xx status.
    #[error("Error updating overview: {status} {body}")]
    Update { status: StatusCode, body: String },

    #[error("Failed to reach the registry")]
    Transport(#[from] reqwest::Error),
}

impl HubError {
    /// Usage errors are reported the way clap reports its own.
    pub fn is_usage(&self) -> bool {
        matches!(self, HubError::MissingCredentials)
    }
}
