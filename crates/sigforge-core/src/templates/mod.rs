//! Signature templates and the registry that dispatches to them.
//!
//! Every template is a unit struct implementing [`SignatureTemplate`]: static
//! [`TemplateInfo`] for the selection UI plus a pure `render` function. The
//! templates are siblings grouped by visual family:
//!
//! - [`classic`]: the first five layouts with inline icon links
//! - [`cards`]: boxed layouts with backgrounds, shadows or borders
//! - [`vivid`]: gradient, split-colour and decorative layouts
//! - [`corporate`]: structured icon rows for business use
//! - [`minimal`]: typographic layouts with little chrome
//!
//! ## Render contract
//!
//! - Input is never mutated and output is a self-contained, inline-styled table.
//! - The same input always yields byte-identical output.
//! - An optional block (profile image, logo, phone, website, job title,
//!   department, company, social group) appears only when its field is present
//!   and, for images and socials, its visibility flag is on. Absent blocks emit nothing.
//! - Rendering cannot fail. Only the registry lookup can
//!   ([`SignatureError::TemplateNotFound`]).

pub mod cards;
pub mod classic;
pub mod corporate;
pub mod minimal;
pub mod vivid;

pub(crate) mod parts;

use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{Result, SignatureError};
use crate::markup::{Escaping, RenderContext};
use crate::signature::SignatureData;

/// Selection metadata for a template. Carries no rendering behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    /// Stable identifier, unique within the registry.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Path of the gallery thumbnail image.
    pub thumbnail: &'static str,
}

/// A named, pure rendering strategy from [`SignatureData`] to an HTML fragment.
pub trait SignatureTemplate: Send + Sync {
    fn info(&self) -> &'static TemplateInfo;

    fn id(&self) -> &'static str {
        self.info().id
    }

    /// Render the signature fragment. Never fails for any combination of absent optional fields.
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::with_builtin_templates);

/// Ordered, immutable set of templates keyed by id.
pub struct Registry {
    templates: Vec<Box<dyn SignatureTemplate>>,
}

impl Registry {
    /// The process-wide registry of the 25 built-in templates.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Build a registry from templates; later duplicates of an id are dropped.
    pub fn new(templates: Vec<Box<dyn SignatureTemplate>>) -> Self {
        let mut unique: Vec<Box<dyn SignatureTemplate>> = Vec::with_capacity(templates.len());
        for template in templates {
            if unique.iter().any(|t| t.id() == template.id()) {
                tracing::warn!(id = template.id(), "duplicate template id ignored");
                continue;
            }
            unique.push(template);
        }
        Self { templates: unique }
    }

    fn with_builtin_templates() -> Self {
        Self::new(vec![
            Box::new(classic::ClassicHorizontal),
            Box::new(classic::ModernColored),
            Box::new(classic::Minimalist),
            Box::new(classic::CorporateBordered),
            Box::new(classic::BusinessCard),
            Box::new(vivid::ModernGradient),
            Box::new(cards::DarkMinimalist),
            Box::new(cards::ModernCard),
            Box::new(corporate::ModernProfessional),
            Box::new(vivid::CreativeColorful),
            Box::new(vivid::GeometricModern),
            Box::new(minimal::ElegantMinimalist),
            Box::new(cards::TechModern),
            Box::new(cards::BusinessCardModern),
            Box::new(vivid::ModernSplit),
            Box::new(corporate::CorporateSignature),
            Box::new(corporate::ModernPhoto),
            Box::new(minimal::ModernMinimalist),
            Box::new(vivid::CreativeSignature),
            Box::new(corporate::ModernHorizontal),
            Box::new(cards::ModernHighlight),
            Box::new(minimal::ModernSimple),
            Box::new(cards::ModernBordered),
            Box::new(minimal::ModernCompact),
            Box::new(minimal::ModernElegant),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&dyn SignatureTemplate> {
        self.templates
            .iter()
            .find(|template| template.id() == id)
            .map(|template| template.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SignatureTemplate> {
        self.templates.iter().map(|template| template.as_ref())
    }

    /// Metadata of every template, in registry order.
    pub fn infos(&self) -> Vec<&'static TemplateInfo> {
        self.iter().map(|template| template.info()).collect()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.iter().map(|template| template.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render with the template registered under `id`, interpolating values verbatim.
    pub fn render(&self, id: &str, data: &SignatureData) -> Result<String> {
        self.render_with(id, data, Escaping::Raw)
    }

    /// Render with the template registered under `id` and the given escaping.
    pub fn render_with(&self, id: &str, data: &SignatureData, escaping: Escaping) -> Result<String> {
        let template = self
            .get(id)
            .ok_or_else(|| SignatureError::TemplateNotFound(id.to_string()))?;
        let html = template.render(&RenderContext::new(data, escaping));
        tracing::debug!(template = id, bytes = html.len(), ?escaping, "rendered signature");
        Ok(html)
    }
}

/// Render `data` with the built-in template `template_id`.
pub fn render(template_id: &str, data: &SignatureData) -> Result<String> {
    Registry::builtin().render(template_id, data)
}

/// Render `data` with the built-in template `template_id` and the given escaping.
pub fn render_with(template_id: &str, data: &SignatureData, escaping: Escaping) -> Result<String> {
    Registry::builtin().render_with(template_id, data, escaping)
}
