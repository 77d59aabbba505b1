// Library root
// ------------
// The binary (`main.rs`) parses the command line and hands a resolved
// `Config` to `run`. Everything else lives here so it can be tested
// without spawning the process.
//
// Module responsibilities:
// - `cli`: flag and environment-variable surface.
// - `config`: turns parsed flags into a `Config`, including credential
//   resolution.
// - `api`: blocking HTTP calls to the Docker Hub login and repository
//   endpoints.
// - `run`: the read-file, authenticate, update sequence.
// - `error`: the single error type every layer returns.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod run;

pub use api::HubClient;
pub use config::{Config, Credentials, Target};
pub use error::HubError;
pub use run::{run, Report};
