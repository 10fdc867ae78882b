//! Single-pass build pipeline: config → fragments → documents → files.
//!
//! Execution is strictly sequential. Every stage returns a typed result;
//! only the binary decides to terminate the process. A failure at any point
//! aborts the run with no partial retry — documents already written stay on
//! disk, nothing after the failure is touched.

use std::path::Path;

use quill_core::{ReadmeConfig, RepoIdentity};
use quill_renderer::{DocKind, TemplateEngine};

use crate::compose::{compose_doc, compose_readme, Section};
use crate::error::ComposeError;
use crate::writer::{write_doc, WriteResult};

/// Build all four documents and write them under `root`.
///
/// `templates_dir` optionally overrides embedded templates. Returns one
/// [`WriteResult`] per document, in [`DocKind::all`] order.
pub fn run(
    root: &Path,
    config_path: &Path,
    templates_dir: Option<&Path>,
    identity: &RepoIdentity,
    section: Section,
    dry_run: bool,
) -> Result<Vec<WriteResult>, ComposeError> {
    tracing::info!("loading config: {}", config_path.display());
    let cfg = ReadmeConfig::load(config_path)?;

    let engine = TemplateEngine::new(templates_dir)?;

    let mut writes = Vec::with_capacity(DocKind::all().len());
    for kind in DocKind::all() {
        tracing::info!("building document: {}", kind.template_name());
        let content = match kind {
            DocKind::Readme => compose_readme(&engine, &cfg, identity, section)?,
            other => compose_doc(&engine, identity, *other)?,
        };
        let path = kind.output_path(root);
        writes.push(write_doc(&path, &content, dry_run)?);
    }
    Ok(writes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Captures the pipeline's log lines in test output; RUST_LOG applies.
    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn identity() -> RepoIdentity {
        RepoIdentity::from_slug("acme/widget-tool").expect("valid slug")
    }

    fn write_config(root: &Path, contents: &str) -> std::path::PathBuf {
        let docs = root.join("docs");
        fs::create_dir_all(&docs).unwrap();
        let path = docs.join("README.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    const CONFIG: &str = "about: A widget tool\nbuilwith: Rust\nusage: Run it\n";

    #[test]
    fn run_produces_four_nonempty_files() {
        init_logs();
        let root = TempDir::new().unwrap();
        let config = write_config(root.path(), CONFIG);

        let writes = run(root.path(), &config, None, &identity(), Section::None, false)
            .expect("pipeline run");
        assert_eq!(writes.len(), 4);
        for kind in DocKind::all() {
            let path = kind.output_path(root.path());
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("missing {}: {e}", path.display()));
            assert!(!content.is_empty(), "{} is empty", path.display());
        }
    }

    #[test]
    fn dry_run_writes_nothing() {
        init_logs();
        let root = TempDir::new().unwrap();
        let config = write_config(root.path(), CONFIG);

        let writes = run(root.path(), &config, None, &identity(), Section::None, true)
            .expect("pipeline dry run");
        assert_eq!(writes.len(), 4);
        assert!(writes
            .iter()
            .all(|w| matches!(w, WriteResult::WouldWrite { .. })));
        assert!(!root.path().join("README.md").exists());
        assert!(!root.path().join(".github").exists());
    }

    #[test]
    fn malformed_config_fails_before_any_file_is_created() {
        init_logs();
        let root = TempDir::new().unwrap();
        let config = write_config(root.path(), "about: [unclosed\n");

        let err = run(root.path(), &config, None, &identity(), Section::None, false)
            .expect_err("malformed YAML must fail");
        assert!(matches!(err, ComposeError::Config(_)));
        assert!(!root.path().join("README.md").exists());
        assert!(!root.path().join(".github").exists());
    }

    #[test]
    fn two_runs_with_identical_inputs_are_byte_identical() {
        init_logs();
        let root = TempDir::new().unwrap();
        let config = write_config(root.path(), CONFIG);
        let id = identity();

        run(root.path(), &config, None, &id, Section::Terraform, false).expect("first run");
        let first: Vec<Vec<u8>> = DocKind::all()
            .iter()
            .map(|k| fs::read(k.output_path(root.path())).unwrap())
            .collect();

        run(root.path(), &config, None, &id, Section::Terraform, false).expect("second run");
        let second: Vec<Vec<u8>> = DocKind::all()
            .iter()
            .map(|k| fs::read(k.output_path(root.path())).unwrap())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn helm_section_appears_only_with_helm() {
        init_logs();
        let root = TempDir::new().unwrap();
        let config = write_config(root.path(), CONFIG);
        let id = identity();

        run(root.path(), &config, None, &id, Section::Helm, false).expect("helm run");
        let readme = fs::read_to_string(root.path().join("README.md")).unwrap();
        assert!(readme.contains("helm upgrade --install"));
        assert!(!readme.contains("terraform init"));
    }
}
