//! Tera rendering engine — [`DocKind`] enum and [`TemplateEngine`].
//!
//! # Path mapping
//!
//! | Document      | Output path                  |
//! |---------------|------------------------------|
//! | Readme        | `README.md`                  |
//! | CodeOfConduct | `.github/CODE_OF_CONDUCT.md` |
//! | Contributing  | `.github/CONTRIBUTING.md`    |
//! | Security      | `.github/SECURITY.md`        |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::Tera;

use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("readme/about.md.tera", include_str!("templates/about.md.tera")),
    (
        "readme/acknowledgements.md.tera",
        include_str!("templates/acknowledgements.md.tera"),
    ),
    ("readme/builtwith.md.tera", include_str!("templates/builtwith.md.tera")),
    (
        "readme/contributing.md.tera",
        include_str!("templates/contributing.md.tera"),
    ),
    (
        "readme/gettingstarted.md.tera",
        include_str!("templates/gettingstarted.md.tera"),
    ),
    ("readme/usage.md.tera", include_str!("templates/usage.md.tera")),
    ("readme/header.md.tera", include_str!("templates/header.md.tera")),
    ("readme/roadmap.md.tera", include_str!("templates/roadmap.md.tera")),
    ("readme/security.md.tera", include_str!("templates/security.md.tera")),
    ("readme/support.md.tera", include_str!("templates/support.md.tera")),
    ("readme/license.md.tera", include_str!("templates/license.md.tera")),
    ("readme/ventx.md.tera", include_str!("templates/ventx.md.tera")),
    ("readme/footer.md.tera", include_str!("templates/footer.md.tera")),
    ("readme/helm.md.tera", include_str!("templates/helm.md.tera")),
    ("readme/terraform.md.tera", include_str!("templates/terraform.md.tera")),
    ("readme/readme.md.tera", include_str!("templates/readme.md.tera")),
    (
        "docs/code_of_conduct.md.tera",
        include_str!("templates/docs_code_of_conduct.md.tera"),
    ),
    (
        "docs/contributing.md.tera",
        include_str!("templates/docs_contributing.md.tera"),
    ),
    ("docs/security.md.tera", include_str!("templates/docs_security.md.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// DocKind
// ---------------------------------------------------------------------------

/// All documents the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    Readme,
    CodeOfConduct,
    Contributing,
    Security,
}

impl DocKind {
    /// All document variants in a stable order.
    pub fn all() -> &'static [DocKind] {
        &[
            DocKind::Readme,
            DocKind::CodeOfConduct,
            DocKind::Contributing,
            DocKind::Security,
        ]
    }

    /// Template to render for this document.
    pub fn template_name(&self) -> &'static str {
        match self {
            DocKind::Readme        => "readme/readme.md.tera",
            DocKind::CodeOfConduct => "docs/code_of_conduct.md.tera",
            DocKind::Contributing  => "docs/contributing.md.tera",
            DocKind::Security      => "docs/security.md.tera",
        }
    }

    /// Official output path for this document, relative to the repository root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        match self {
            DocKind::Readme => root.join("README.md"),
            DocKind::CodeOfConduct => root.join(".github").join("CODE_OF_CONDUCT.md"),
            DocKind::Contributing => root.join(".github").join("CONTRIBUTING.md"),
            DocKind::Security => root.join(".github").join("SECURITY.md"),
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering fragments with optional user overrides.
///
/// All templates are parsed once at construction into an immutable registry.
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults; names are normalised to lowercase relative paths.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the named template with the given context, capturing the output
    /// as an in-memory string.
    pub fn render_fragment<C: Serialize>(
        &self,
        name: &str,
        ctx: &C,
    ) -> Result<String, RenderError> {
        let tera_ctx = tera::Context::from_serialize(ctx)?;
        Ok(self.tera.render(name, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
