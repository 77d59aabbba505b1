// Resolved run configuration. Built once from the parsed command line and
// handed down to the driver. Only `TryFrom<Cli>` touches the process env.

use crate::cli::{Cli, PASSWORD_ENV, TOKEN_ENV, USERNAME_ENV};
use crate::error::HubError;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_NAMESPACE: &str = "pubnub";
pub const DEFAULT_REPOSITORY: &str = "pubnub-mcp-server";
pub const DEFAULT_FILE: &str = "README.md";
pub const DEFAULT_API_URL: &str = "https://hub.docker.com";

/// The remote repository whose description gets replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub namespace: String,
    pub repository: String,
}

impl Default for Target {
    fn default() -> Self {
        Target {
            namespace: DEFAULT_NAMESPACE.into(),
            repository: DEFAULT_REPOSITORY.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.repository)
    }
}

/// How we authenticate: a ready token, or a pair to exchange for one.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Token(String),
    Login { username: String, password: String },
}

impl Credentials {
    /// A token wins outright. Otherwise both halves of the login pair are
    /// needed. Empty strings count as missing.
    pub fn resolve(
        token: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, HubError> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        if let Some(token) = present(token) {
            return Ok(Credentials::Token(token));
        }
        match (present(username), present(password)) {
            (Some(username), Some(password)) => Ok(Credentials::Login { username, password }),
            _ => Err(HubError::MissingCredentials),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
            Credentials::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub target: Target,
    pub file: PathBuf,
    pub credentials: Credentials,
    pub api_url: String,
}

impl Config {
    /// Build from parsed flags. An empty credential flag stops clap from
    /// reading its env var, so `env` is consulted again for those.
    pub fn from_cli(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self, HubError> {
        let or_env = |flag: Option<String>, key: &str| match flag {
            Some(v) if !v.is_empty() => Some(v),
            _ => env(key),
        };
        let credentials = Credentials::resolve(
            or_env(cli.token, TOKEN_ENV),
            or_env(cli.username, USERNAME_ENV),
            or_env(cli.password, PASSWORD_ENV),
        )?;
        Ok(Config {
            target: Target {
                namespace: cli.namespace,
                repository: cli.repository,
            },
            file: cli.file,
            credentials,
            api_url: cli.api_url,
        })
    }
}

impl TryFrom<Cli> for Config {
    type Error = HubError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Config::from_cli(cli, |key| std::env::var(key).ok())
    }
}
