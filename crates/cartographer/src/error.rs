//! CLI error types.

use carto_config::ConfigError;
use carto_github::GitHubError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    GitHub(#[from] GitHubError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}
