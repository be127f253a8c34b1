//! CLI error types.

use mmd_rewrite::RewriteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Rewrite(#[from] RewriteError),
}
