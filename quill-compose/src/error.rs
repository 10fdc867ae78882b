//! Error types for quill-compose.

use std::path::PathBuf;

use thiserror::Error;

use quill_core::ConfigError;
use quill_renderer::RenderError;

/// All errors that can arise while composing and writing documents.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error from config loading or identity resolution.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ComposeError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ComposeError {
    ComposeError::Io {
        path: path.into(),
        source,
    }
}
