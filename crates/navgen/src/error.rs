//! CLI error types.

use navgen_config::ConfigError;
use navgen_nav::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Nav(#[from] NavError),
}
