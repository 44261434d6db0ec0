//! Stdio server for the FRED tools.
//!
//! The `fred-mcp` binary loads [`config::Settings`], installs logging, builds a rate
//! limited [`fred::Fred`] client and then runs [`server::serve`] over stdin/stdout.
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod server;

use thiserror::Error;

pub use config::{ConfigError, Settings};

/// Failures that stop the server before or while serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The environment held an unusable value.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The logging stack could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
    /// The upstream client could not be built.
    #[error(transparent)]
    Client(#[from] fred::FredError),
    /// Reading requests or writing responses failed.
    #[error("stdio failure: {0}")]
    Io(#[from] std::io::Error),
}
