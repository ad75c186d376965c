// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only the outer layers (config files, content files, media fetching) can
//! fail. The navigation state machines never produce an [`Error`].

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The portfolio content file is missing required data or cannot be parsed.
    #[error("Content Error: {0}")]
    Content(String),

    /// A media item could not be downloaded.
    #[error("Fetch Error: {0}")]
    Fetch(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
