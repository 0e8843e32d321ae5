//! CLI error types.

use doxygraph_config::ConfigError;
use doxygraph_core::BatchError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Batch(#[from] BatchError),

    #[error("{0}")]
    Validation(String),
}
