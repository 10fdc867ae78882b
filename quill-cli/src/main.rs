//! quill — render README.md and governance docs from templates + YAML config.
//!
//! # Usage
//!
//! ```text
//! quill [--helm | --terraform] [--config <path>] [--root <path>]
//!       [--templates <dir>] [--dry-run]
//! ```
//!
//! Requires `GITHUB_REPOSITORY` (`owner/repo`) in the environment, as set by
//! GitHub Actions. Writes `README.md` at the root and `CODE_OF_CONDUCT.md`,
//! `CONTRIBUTING.md`, `SECURITY.md` under `.github/`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use quill_compose::{pipeline, Section, WriteResult};
use quill_core::RepoIdentity;

#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Render a repository README and governance docs from templates",
    long_about = None,
)]
struct Cli {
    /// Include the Helm section in the README.
    #[arg(long)]
    helm: bool,

    /// Include the Terraform section in the README (ignored when --helm is set).
    #[arg(long)]
    terraform: bool,

    /// Path to the YAML config document.
    #[arg(long, default_value = "docs/README.yaml")]
    config: PathBuf,

    /// Repository root where output files are written.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory of .tera templates overriding the embedded defaults.
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Render everything but write nothing.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let identity = RepoIdentity::from_env().context("resolving repository identity")?;
    let section = Section::from_flags(cli.helm, cli.terraform);

    let writes = pipeline::run(
        &cli.root,
        &cli.config,
        cli.templates.as_deref(),
        &identity,
        section,
        cli.dry_run,
    )
    .with_context(|| format!("build failed for '{}'", identity.slug))?;

    print_results(&identity.slug.0, &writes, cli.dry_run);
    Ok(())
}

fn print_results(slug: &str, writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    println!("{prefix}✓ '{slug}' — {} documents", writes.len());
    for w in writes {
        match w {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
        }
    }
}
