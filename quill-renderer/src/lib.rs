//! # quill-renderer
//!
//! Tera-based template engine that renders README fragments and governance
//! documents from config values and repository identity.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quill_core::{ReadmeConfig, RepoIdentity};
//! use quill_renderer::{context::AboutCtx, TemplateEngine};
//!
//! fn render_about(cfg: &ReadmeConfig, id: &RepoIdentity) {
//!     if let Ok(engine) = TemplateEngine::new(None) {
//!         let ctx = AboutCtx::new(cfg, id);
//!         if let Ok(out) = engine.render_fragment("readme/about.md.tera", &ctx) {
//!             println!("{} bytes", out.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use engine::{DocKind, TemplateEngine};
pub use error::RenderError;
