//! Error types for each stage of an artist lookup.
//!
//! "Artist not found" is deliberately absent here: the resolver reports it as
//! `Ok(None)` because an unknown artist is an ordinary outcome, not a fault.

use reqwest::StatusCode;
use thiserror::Error;

/// Reading configuration from the environment failed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),

    #[error("environment variable {name} is invalid: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("cannot load .env file: {0}")]
    EnvFile(String),
}

/// The client-credentials exchange did not yield a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("authentication failed: {}", describe(.status, .reason))]
pub struct AuthError {
    pub status: Option<u16>,
    pub reason: String,
}

/// A search or top-tracks request failed or returned a body we could not read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("request failed: {}", describe(.status, .reason))]
pub struct TransportError {
    pub status: Option<u16>,
    pub reason: String,
}

/// Why a lookup halted.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("no artist name given")]
    EmptyQuery,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl AuthError {
    pub fn new(status: Option<u16>, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    pub fn from_status(status: StatusCode) -> Self {
        Self::new(Some(status.as_u16()), status_reason(status))
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.status().map(|s| s.as_u16()), err.to_string())
    }
}

impl TransportError {
    pub fn new(status: Option<u16>, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    pub fn from_status(status: StatusCode) -> Self {
        Self::new(Some(status.as_u16()), status_reason(status))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.status().map(|s| s.as_u16()), err.to_string())
    }
}

fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string()
}

fn describe(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("{} {}", code, reason),
        None => reason.to_string(),
    }
}
