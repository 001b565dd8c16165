//! Configuration management for the top tracks client.
//!
//! Configuration comes from environment variables, optionally seeded from `.env`
//! files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`<data_local_dir>/toptracks/.env`)
//! 3. `.env` file found from the current directory upwards
//! 4. Application defaults (endpoint URLs only)
//!
//! Secrets are only read through [`credentials`], which hands back an explicit
//! [`Credentials`] value for the authenticator.

use std::{env, io::ErrorKind, path::PathBuf, time::Duration};

use crate::{error::ConfigError, types::Credentials};

pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";
pub const SPOTIFY_API_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const HTTP_TIMEOUT_SECS: &str = "TOPTRACKS_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Base URLs of the two Spotify services the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Web API root, e.g. `https://api.spotify.com/v1`
    pub api_url: String,
    /// Token endpoint for the client-credentials grant
    pub token_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

/// Loads environment variables from `.env` files.
///
/// First looks in the platform-specific local data directory, creating the
/// directory if needed:
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// Then searches for a `.env` file starting in the current directory and
/// walking up. Variables already present in the process environment are never
/// overwritten.
///
/// # Errors
///
/// A missing `.env` file is fine. This returns an error if the data directory
/// cannot be created or a `.env` file exists but cannot be parsed.
///
/// # Example
///
/// ```
/// use toptracks::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    }

    match dotenv::dotenv() {
        Ok(found) => {
            log::debug!("loaded environment from {}", found.display());
            Ok(())
        }
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ConfigError::EnvFile(e.to_string())),
    }
}

/// Location of the per-user `.env` file.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toptracks/.env");
    path
}

/// Reads the Spotify application credentials from the environment.
///
/// Uses `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`. Call this once per
/// authentication attempt and pass the result to the authenticator.
///
/// # Errors
///
/// Returns [`ConfigError::MissingVar`] naming the first variable that is unset
/// or blank.
pub fn credentials() -> Result<Credentials, ConfigError> {
    credentials_from(|name| env::var(name).ok())
}

/// Same as [`credentials`] but reads variables through `lookup`.
pub fn credentials_from<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let client_id = required(&lookup, SPOTIFY_CLIENT_ID)?;
    let client_secret = required(&lookup, SPOTIFY_CLIENT_SECRET)?;
    Ok(Credentials::new(client_id, client_secret))
}

/// Returns the endpoint URLs, honouring `SPOTIFY_API_URL` and
/// `SPOTIFY_API_TOKEN_URL` overrides.
pub fn endpoints() -> Endpoints {
    endpoints_from(|name| env::var(name).ok())
}

pub fn endpoints_from<F>(lookup: F) -> Endpoints
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Endpoints::default();
    Endpoints {
        api_url: optional(&lookup, SPOTIFY_API_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url),
        token_url: optional(&lookup, SPOTIFY_API_TOKEN_URL).unwrap_or(defaults.token_url),
    }
}

/// Request timeout from `TOPTRACKS_HTTP_TIMEOUT_SECS`.
///
/// `None` means no timeout beyond the transport's own default.
pub fn http_timeout() -> Result<Option<Duration>, ConfigError> {
    http_timeout_from(|name| env::var(name).ok())
}

pub fn http_timeout_from<F>(lookup: F) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match optional(&lookup, HTTP_TIMEOUT_SECS) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidVar {
                name: HTTP_TIMEOUT_SECS,
                reason: format!("expected a positive number of seconds, got '{}'", raw),
            }),
            Ok(secs) => Ok(Some(Duration::from_secs(secs))),
        },
        None => Ok(None),
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::MissingVar(name))
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
