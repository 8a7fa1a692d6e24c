use thiserror::Error;

use crate::mode::{GameMode, RelaxMode};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid mode combination: {mode} cannot be played as {relax}")]
    InvalidModeCombination { mode: GameMode, relax: RelaxMode },

    #[error("Unknown game mode: {0}")]
    UnknownGameMode(i64),

    #[error("Unknown game mode: {0}")]
    UnknownGameModeName(String),

    #[error("Unknown relax mode: {0}")]
    UnknownRelaxMode(String),

    #[error("Unknown server: {0}")]
    UnknownServer(String),

    #[error("Unknown map status: {0}")]
    UnknownMapStatus(String),

    #[error("Unknown mod: {0}")]
    UnknownMod(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Unexpected response from {url}: {message}")]
    UnexpectedResponse { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::StatusCode(code) => format!("HTTP {} error", code),
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                format!("Connection failed: {}", e)
            }
            _ => format!("HTTP error: {}", e),
        };
        Error::Http(message)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
