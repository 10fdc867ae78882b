//! # quill-core
//!
//! Config document loading and repository identity for the quill workspace.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use quill_core::{ReadmeConfig, RepoIdentity};
//!
//! fn load(config_path: &Path) {
//!     if let Ok(cfg) = ReadmeConfig::load(config_path) {
//!         if let Ok(identity) = RepoIdentity::from_env() {
//!             println!("{}: about set = {}", identity.slug, cfg.about.is_some());
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod identity;

pub use config::ReadmeConfig;
pub use error::ConfigError;
pub use identity::{RepoIdentity, RepoName, RepoSlug};
