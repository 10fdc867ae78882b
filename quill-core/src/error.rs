//! Error types for quill-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from config loading and identity resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure reading the config file.
    #[error("cannot read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document is valid YAML but its root is not a mapping.
    #[error("config at {path} is not a YAML mapping")]
    NotAMapping { path: PathBuf },

    /// A required environment variable is unset.
    #[error("environment variable {name} not set")]
    EnvMissing { name: &'static str },

    /// The repository slug did not contain an owner and a repo separated by `/`.
    #[error("malformed repository slug {slug:?}; expected \"owner/repo\"")]
    MalformedSlug { slug: String },
}
