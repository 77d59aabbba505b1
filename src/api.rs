// API client module: a small blocking HTTP client for the two Docker Hub
// endpoints we need, the login exchange and the repository PATCH.

use crate::config::Target;
use crate::error::HubError;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking client bound to one Docker Hub API base URL.
#[derive(Clone, Debug)]
pub struct HubClient {
    client: Client,
    base_url: String,
}

/// Login request payload.
#[derive(Serialize, Debug)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// The login endpoint returns more than this, but only `token` matters.
#[derive(Deserialize, Debug)]
struct LoginResponse {
    token: Option<String>,
}

/// Partial update of a repository. Only the long description is sent.
#[derive(Serialize, Debug)]
struct RepositoryPatch<'a> {
    full_description: &'a str,
}

impl HubClient {
    /// Build a client for `base_url`, e.g. `https://hub.docker.com`.
    pub fn new(base_url: &str) -> Result<Self, HubError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(HubClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn login_url(&self) -> String {
        format!("{}/v2/users/login/", self.base_url)
    }

    pub fn repository_url(&self, target: &Target) -> String {
        format!(
            "{}/v2/repositories/{}/{}/",
            self.base_url, target.namespace, target.repository
        )
    }

    /// Exchange a username/password pair for a session token.
    pub fn login(&self, username: &str, password: &str) -> Result<String, HubError> {
        let url = self.login_url();
        tracing::debug!(%url, username, "requesting session token");
        let res = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()?;
        if !res.status().is_success() {
            let (status, body) = failure(res);
            return Err(HubError::Login { status, body });
        }
        let text = res.text()?;
        let resp: LoginResponse = serde_json::from_str(&text)
            .map_err(|source| HubError::MalformedResponse { url, source })?;
        resp.token
            .filter(|t| !t.is_empty())
            .ok_or(HubError::MissingToken)
    }

    /// Replace the full description of `target` with `description`.
    pub fn update_full_description(
        &self,
        target: &Target,
        token: &str,
        description: &str,
    ) -> Result<(), HubError> {
        let url = self.repository_url(target);
        let mut auth =
            HeaderValue::from_str(&format!("JWT {token}")).map_err(HubError::InvalidToken)?;
        auth.set_sensitive(true);

        tracing::debug!(%url, bytes = description.len(), "patching full_description");
        let res = self
            .client
            .patch(&url)
            .header(AUTHORIZATION, auth)
            .json(&RepositoryPatch {
                full_description: description,
            })
            .send()?;
        if !res.status().is_success() {
            let (status, body) = failure(res);
            return Err(HubError::Update { status, body });
        }
        Ok(())
    }
}

/// Status and body of an error response. An unreadable body is reported
/// as empty so the status still gets through.
fn failure(res: Response) -> (reqwest::StatusCode, String) {
    let status = res.status();
    let body = res.text().unwrap_or_default();
    (status, body)
}
