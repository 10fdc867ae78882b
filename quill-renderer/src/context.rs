//! Fragment contexts — one serializable payload per template fragment.
//!
//! Each context is built once per run from the config document and the
//! resolved repository identity, rendered, and discarded. Config-sourced
//! fields stay opaque [`serde_yaml::Value`]s; templates decide how (and
//! whether) to print them. Parent contexts carry already-rendered children
//! as plain strings.

use serde::Serialize;
use serde_yaml::Value;

use quill_core::{ReadmeConfig, RepoIdentity};

// ---------------------------------------------------------------------------
// Header fragments
// ---------------------------------------------------------------------------

/// Context for `readme/about.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct AboutCtx {
    pub about: Option<Value>,
    pub image_desc1: Option<Value>,
    pub image_desc2: Option<Value>,
    pub image_file1: Option<Value>,
    pub image_file2: Option<Value>,
    pub repo_slug: String,
}

impl AboutCtx {
    pub fn new(cfg: &ReadmeConfig, id: &RepoIdentity) -> Self {
        AboutCtx {
            about: cfg.about.clone(),
            image_desc1: cfg.image_desc1.clone(),
            image_desc2: cfg.image_desc2.clone(),
            image_file1: cfg.image_file1.clone(),
            image_file2: cfg.image_file2.clone(),
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `readme/builtwith.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltWithCtx {
    pub builtwith: Option<Value>,
}

impl BuiltWithCtx {
    pub fn new(cfg: &ReadmeConfig) -> Self {
        BuiltWithCtx {
            builtwith: cfg.builtwith.clone(),
        }
    }
}

/// Context for `readme/gettingstarted.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct GettingStartedCtx {
    pub prerequisites: Option<Value>,
    pub quickstart: Option<Value>,
    pub repo_slug: String,
}

impl GettingStartedCtx {
    pub fn new(cfg: &ReadmeConfig, id: &RepoIdentity) -> Self {
        GettingStartedCtx {
            prerequisites: cfg.prerequisites.clone(),
            quickstart: cfg.quickstart.clone(),
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `readme/usage.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct UsageCtx {
    pub usage: Option<Value>,
}

impl UsageCtx {
    pub fn new(cfg: &ReadmeConfig) -> Self {
        UsageCtx {
            usage: cfg.usage.clone(),
        }
    }
}

/// Context for `readme/header.md.tera` — carries rendered children.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderCtx {
    pub repo_slug: String,
    pub about: String,
    pub builtwith: String,
    pub getting_started: String,
    pub usage: String,
}

// ---------------------------------------------------------------------------
// Footer fragments
// ---------------------------------------------------------------------------

/// Context for `readme/contributing.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct ContributingCtx {
    pub repo_slug: String,
}

impl ContributingCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        ContributingCtx {
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `readme/acknowledgements.md.tera` (static content).
#[derive(Debug, Clone, Serialize, Default)]
pub struct AcknowledgementsCtx {}

/// Context for `readme/license.md.tera` (static content).
#[derive(Debug, Clone, Serialize, Default)]
pub struct LicenseCtx {}

/// Context for `readme/roadmap.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapCtx {
    pub repo_slug: String,
}

impl RoadmapCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        RoadmapCtx {
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `readme/security.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityCtx {
    pub repo_name: String,
}

impl SecurityCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        SecurityCtx {
            repo_name: id.name.0.clone(),
        }
    }
}

/// Context for `readme/support.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct SupportCtx {
    pub repo_slug: String,
}

impl SupportCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        SupportCtx {
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `readme/ventx.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct VentxCtx {
    pub repo_name: String,
    pub repo_slug: String,
}

impl VentxCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        VentxCtx {
            repo_name: id.name.0.clone(),
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `readme/footer.md.tera` — carries rendered children.
#[derive(Debug, Clone, Serialize)]
pub struct FooterCtx {
    pub contributing: String,
    pub acknowledgements: String,
    pub license: String,
    pub roadmap: String,
    pub security: String,
    pub support: String,
    pub ventx: String,
}

// ---------------------------------------------------------------------------
// Optional sections
// ---------------------------------------------------------------------------

/// Context for `readme/helm.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct HelmCtx {
    pub repo_name: String,
}

impl HelmCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        HelmCtx {
            repo_name: id.name.0.clone(),
        }
    }
}

/// Context for `readme/terraform.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct TerraformCtx {
    /// Emitted verbatim so a later terraform-docs pass can replace it.
    pub content: String,
    pub terraform: Option<Value>,
    pub resources: Option<Value>,
    pub features: Option<Value>,
}

impl TerraformCtx {
    pub fn new(cfg: &ReadmeConfig) -> Self {
        TerraformCtx {
            content: "{{ .Content }}".to_owned(),
            terraform: cfg.terraform.clone(),
            resources: cfg.resources.clone(),
            features: cfg.features.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level documents
// ---------------------------------------------------------------------------

/// Context for `readme/readme.md.tera` — the final composition.
///
/// At most one of `helm` / `terraform` is set; the composer guarantees
/// mutual exclusion.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeCtx {
    pub header: String,
    pub footer: String,
    pub helm: Option<String>,
    pub terraform: Option<String>,
}

/// Context for `docs/code_of_conduct.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct CodeOfConductCtx {
    pub repo_slug: String,
}

impl CodeOfConductCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        CodeOfConductCtx {
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `docs/contributing.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct DocsContributingCtx {
    pub repo_name: String,
    pub repo_slug: String,
}

impl DocsContributingCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        DocsContributingCtx {
            repo_name: id.name.0.clone(),
            repo_slug: id.slug.0.clone(),
        }
    }
}

/// Context for `docs/security.md.tera`.
#[derive(Debug, Clone, Serialize)]
pub struct DocsSecurityCtx {
    pub repo_name: String,
    pub repo_slug: String,
}

impl DocsSecurityCtx {
    pub fn new(id: &RepoIdentity) -> Self {
        DocsSecurityCtx {
            repo_name: id.name.0.clone(),
            repo_slug: id.slug.0.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn identity() -> RepoIdentity {
        RepoIdentity::from_slug("acme/widget-tool").expect("valid slug")
    }

    fn config() -> ReadmeConfig {
        ReadmeConfig {
            about: Some(Value::String("A widget tool".into())),
            builtwith: Some(Value::String("Rust".into())),
            features: Some(Value::Sequence(vec![Value::String("fast".into())])),
            ..Default::default()
        }
    }

    #[test]
    fn about_ctx_carries_slug_and_value() {
        let ctx = AboutCtx::new(&config(), &identity());
        assert_eq!(ctx.repo_slug, "acme/widget-tool");
        assert_eq!(ctx.about, Some(Value::String("A widget tool".into())));
        assert!(ctx.image_file1.is_none());
    }

    #[test]
    fn terraform_ctx_reemits_content_placeholder() {
        let ctx = TerraformCtx::new(&config());
        assert_eq!(ctx.content, "{{ .Content }}");
    }

    #[test]
    fn doc_ctxs_derive_name_from_slug() {
        let id = identity();
        assert_eq!(SecurityCtx::new(&id).repo_name, "widget-tool");
        assert_eq!(DocsContributingCtx::new(&id).repo_name, "widget-tool");
        assert_eq!(VentxCtx::new(&id).repo_slug, "acme/widget-tool");
    }
}
