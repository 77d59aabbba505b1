// Command-line surface. Every option can also come from a DOCKERHUB_*
// environment variable; an explicit flag always wins.

use crate::config::{DEFAULT_API_URL, DEFAULT_FILE, DEFAULT_NAMESPACE, DEFAULT_REPOSITORY};
use clap::Parser;
use std::path::PathBuf;

pub const TOKEN_ENV: &str = "DOCKERHUB_TOKEN";
pub const USERNAME_ENV: &str = "DOCKERHUB_USERNAME";
pub const PASSWORD_ENV: &str = "DOCKERHUB_PASSWORD";

/// Update a Docker Hub repository overview with the contents of a README file.
#[derive(Debug, Parser)]
#[command(name = "dockerhub-overview", version)]
pub struct Cli {
    /// Docker Hub namespace.
    #[arg(long, env = "DOCKERHUB_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Docker Hub repository name.
    #[arg(long, env = "DOCKERHUB_REPOSITORY", default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Path to the README file to use as the overview.
    #[arg(long, env = "DOCKERHUB_OVERVIEW_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Docker Hub API token.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Docker Hub username, exchanged with the password for a token.
    #[arg(long, env = USERNAME_ENV)]
    pub username: Option<String>,

    /// Docker Hub password.
    #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Base URL of the Docker Hub API.
    #[arg(long, env = "DOCKERHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log every step to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable all log output.
    #[arg(short, long)]
    pub quiet: bool,
}
