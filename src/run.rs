// Driver: read the description, get a session token, push the update.
// Any failure ends the run; nothing is retried.

use crate::api::HubClient;
use crate::config::{Config, Credentials, Target};
use crate::error::HubError;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// What was updated, for the caller to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub target: Target,
    pub bytes: usize,
}

/// Run the whole update against `client`.
///
/// The file is read before any request goes out, so a bad path never
/// costs a login round trip.
pub fn run(client: &HubClient, config: &Config) -> Result<Report, HubError> {
    let description =
        std::fs::read_to_string(&config.file).map_err(|source| HubError::ReadDescription {
            path: config.file.clone(),
            source,
        })?;
    tracing::info!(file = %config.file.display(), bytes = description.len(), "read description");

    let spinner = spinner(ProgressDrawTarget::stderr());
    let token = match &config.credentials {
        Credentials::Token(token) => token.clone(),
        Credentials::Login { username, password } => {
            spinner.set_message("Logging in...");
            let token = client.login(username, password);
            if token.is_err() {
                spinner.finish_and_clear();
            }
            token?
        }
    };

    spinner.set_message(format!("Updating {}...", config.target));
    let updated = client.update_full_description(&config.target, &token, &description);
    spinner.finish_and_clear();
    updated?;

    tracing::info!(repo = %config.target, "overview updated");
    Ok(Report {
        target: config.target.clone(),
        bytes: description.len(),
    })
}

// The ticker thread only runs when the spinner is actually drawn, i.e.
// when stderr is a terminal.
fn spinner(target: ProgressDrawTarget) -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(None, target);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    if !spinner.is_hidden() {
        spinner.enable_steady_tick(Duration::from_millis(100));
    }
    spinner
}
