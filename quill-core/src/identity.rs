//! Repository identity — slug and name derived from the CI environment.
//!
//! The slug comes from the `GITHUB_REPOSITORY` variable GitHub Actions sets
//! on every run, e.g. `ventx/stackx-terraform-aws-network`. The repo name is
//! the part after the first `/`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the `owner/repo` slug.
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed `owner/repo` slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoSlug(pub String);

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoSlug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoSlug {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed repository name (the slug without its owner prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoName(pub String);

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// RepoIdentity
// ---------------------------------------------------------------------------

/// Slug plus derived name, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoIdentity {
    pub slug: RepoSlug,
    pub name: RepoName,
}

impl RepoIdentity {
    /// Parse an `owner/repo` slug.
    ///
    /// Splits on the first `/`; everything after it is the repo name. A slug
    /// with no `/`, or with an empty owner or name segment, is rejected as
    /// [`ConfigError::MalformedSlug`].
    pub fn from_slug(slug: &str) -> Result<Self, ConfigError> {
        let malformed = || ConfigError::MalformedSlug {
            slug: slug.to_owned(),
        };
        let (owner, name) = slug.split_once('/').ok_or_else(malformed)?;
        if owner.is_empty() || name.is_empty() {
            return Err(malformed());
        }
        Ok(RepoIdentity {
            slug: RepoSlug::from(slug),
            name: RepoName::from(name),
        })
    }

    /// Resolve the identity from `GITHUB_REPOSITORY`.
    ///
    /// Returns [`ConfigError::EnvMissing`] when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let slug = std::env::var(GITHUB_REPOSITORY).map_err(|_| ConfigError::EnvMissing {
            name: GITHUB_REPOSITORY,
        })?;
        Self::from_slug(&slug)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(RepoSlug::from("acme/widget-tool").to_string(), "acme/widget-tool");
        assert_eq!(RepoName::from("widget-tool").to_string(), "widget-tool");
    }

    #[test]
    fn slug_splits_into_name() {
        let id = RepoIdentity::from_slug("acme/widget-tool").expect("valid slug");
        assert_eq!(id.slug, RepoSlug::from("acme/widget-tool"));
        assert_eq!(id.name, RepoName::from("widget-tool"));
    }

    #[test]
    fn name_is_everything_after_the_first_slash() {
        let id = RepoIdentity::from_slug("acme/group/tool").expect("valid slug");
        assert_eq!(id.name, RepoName::from("group/tool"));
    }

    #[test]
    fn slug_without_slash_is_rejected() {
        let err = RepoIdentity::from_slug("acme").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedSlug { .. }));
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(RepoIdentity::from_slug("/widget-tool").is_err());
        assert!(RepoIdentity::from_slug("acme/").is_err());
        assert!(RepoIdentity::from_slug("/").is_err());
    }

    #[test]
    fn from_env_reads_and_reports_missing() {
        // Sequential set/remove in one test; this crate's other tests never
        // touch GITHUB_REPOSITORY.
        std::env::set_var(GITHUB_REPOSITORY, "acme/widget-tool");
        let id = RepoIdentity::from_env().expect("env set");
        assert_eq!(id.name, RepoName::from("widget-tool"));

        std::env::remove_var(GITHUB_REPOSITORY);
        let err = RepoIdentity::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::EnvMissing { .. }));
        assert!(err.to_string().contains("GITHUB_REPOSITORY"));
    }
}
