//! # quill-compose
//!
//! Document composition and file writing: renders README fragments bottom-up
//! into parent documents, then writes the final files atomically.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use quill_compose::{pipeline, Section};
//! use quill_core::RepoIdentity;
//!
//! fn build(root: &Path, config: &Path, id: &RepoIdentity) {
//!     if let Ok(writes) = pipeline::run(root, config, None, id, Section::None, false) {
//!         println!("{} files", writes.len());
//!     }
//! }
//! ```

pub mod compose;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use compose::Section;
pub use error::ComposeError;
pub use writer::WriteResult;
