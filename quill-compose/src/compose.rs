//! Bottom-up document composition.
//!
//! Fragments render to in-memory strings which become fields of their
//! parent's context: About/BuiltWith/GettingStarted/Usage feed the Header,
//! the seven footer fragments feed the Footer, and Header + Footer (plus at
//! most one optional section) feed the final README.

use quill_core::{ReadmeConfig, RepoIdentity};
use quill_renderer::context::{
    AboutCtx, AcknowledgementsCtx, BuiltWithCtx, CodeOfConductCtx, ContributingCtx,
    DocsContributingCtx, DocsSecurityCtx, FooterCtx, GettingStartedCtx, HeaderCtx, HelmCtx,
    LicenseCtx, ReadmeCtx, RoadmapCtx, SecurityCtx, SupportCtx, TerraformCtx, UsageCtx, VentxCtx,
};
use quill_renderer::{DocKind, TemplateEngine};

use crate::error::ComposeError;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// The optional README section selected by CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Neither flag set: README is Header + Footer only.
    None,
    Helm,
    Terraform,
}

impl Section {
    /// Resolve the two CLI flags. Helm is checked first, so setting both
    /// selects Helm only.
    pub fn from_flags(helm: bool, terraform: bool) -> Self {
        if helm {
            Section::Helm
        } else if terraform {
            Section::Terraform
        } else {
            Section::None
        }
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

fn compose_header(
    engine: &TemplateEngine,
    cfg: &ReadmeConfig,
    id: &RepoIdentity,
) -> Result<String, ComposeError> {
    let about = engine.render_fragment("readme/about.md.tera", &AboutCtx::new(cfg, id))?;
    let builtwith = engine.render_fragment("readme/builtwith.md.tera", &BuiltWithCtx::new(cfg))?;
    let getting_started = engine.render_fragment(
        "readme/gettingstarted.md.tera",
        &GettingStartedCtx::new(cfg, id),
    )?;
    let usage = engine.render_fragment("readme/usage.md.tera", &UsageCtx::new(cfg))?;

    let header = HeaderCtx {
        repo_slug: id.slug.0.clone(),
        about,
        builtwith,
        getting_started,
        usage,
    };
    Ok(engine.render_fragment("readme/header.md.tera", &header)?)
}

fn compose_footer(engine: &TemplateEngine, id: &RepoIdentity) -> Result<String, ComposeError> {
    let contributing =
        engine.render_fragment("readme/contributing.md.tera", &ContributingCtx::new(id))?;
    let acknowledgements = engine.render_fragment(
        "readme/acknowledgements.md.tera",
        &AcknowledgementsCtx::default(),
    )?;
    let license = engine.render_fragment("readme/license.md.tera", &LicenseCtx::default())?;
    let roadmap = engine.render_fragment("readme/roadmap.md.tera", &RoadmapCtx::new(id))?;
    let security = engine.render_fragment("readme/security.md.tera", &SecurityCtx::new(id))?;
    let support = engine.render_fragment("readme/support.md.tera", &SupportCtx::new(id))?;
    let ventx = engine.render_fragment("readme/ventx.md.tera", &VentxCtx::new(id))?;

    let footer = FooterCtx {
        contributing,
        acknowledgements,
        license,
        roadmap,
        security,
        support,
        ventx,
    };
    Ok(engine.render_fragment("readme/footer.md.tera", &footer)?)
}

/// Compose the full README: header, footer, and at most one optional section.
pub fn compose_readme(
    engine: &TemplateEngine,
    cfg: &ReadmeConfig,
    id: &RepoIdentity,
    section: Section,
) -> Result<String, ComposeError> {
    let header = compose_header(engine, cfg, id)?;
    let footer = compose_footer(engine, id)?;

    let (helm, terraform) = match section {
        Section::None => (None, None),
        Section::Helm => {
            tracing::debug!("rendering optional section: helm");
            let helm = engine.render_fragment("readme/helm.md.tera", &HelmCtx::new(id))?;
            (Some(helm), None)
        }
        Section::Terraform => {
            tracing::debug!("rendering optional section: terraform");
            let tf = engine.render_fragment("readme/terraform.md.tera", &TerraformCtx::new(cfg))?;
            (None, Some(tf))
        }
    };

    let readme = ReadmeCtx {
        header,
        footer,
        helm,
        terraform,
    };
    Ok(engine.render_fragment("readme/readme.md.tera", &readme)?)
}

/// Render one governance document from the repository identity alone.
///
/// `kind` must not be [`DocKind::Readme`]; the README goes through
/// [`compose_readme`].
pub fn compose_doc(
    engine: &TemplateEngine,
    id: &RepoIdentity,
    kind: DocKind,
) -> Result<String, ComposeError> {
    let name = kind.template_name();
    let out = match kind {
        DocKind::CodeOfConduct => engine.render_fragment(name, &CodeOfConductCtx::new(id))?,
        DocKind::Contributing => engine.render_fragment(name, &DocsContributingCtx::new(id))?,
        DocKind::Security => engine.render_fragment(name, &DocsSecurityCtx::new(id))?,
        DocKind::Readme => unreachable!("README is composed via compose_readme"),
    };
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
