//! Handlebars renderer for the document shells.
//!
//! Strict mode is on, so a shell referencing a variable the caller did not
//! provide fails with [`SignatureError::DocumentRender`] instead of printing
//! an empty string. Signature HTML is inserted with triple braces and is never
//! escaped; titles and gallery metadata are.

use handlebars::Handlebars;
use serde_json::{json, Value};

use super::embedded;
use super::{GalleryEntry, GALLERY_TITLE, SIGNATURE_TITLE};
use crate::error::{Result, SignatureError};

/// Renders standalone pages around signature fragments.
pub struct DocumentRenderer {
    hbs: Handlebars<'static>,
}

impl DocumentRenderer {
    /// Create a new renderer with strict mode enabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| SignatureError::DocumentRender(e.to_string()))
    }

    /// Wrap one signature in the standalone page shell.
    pub fn signature_document(&self, signature: &str) -> Result<String> {
        let data = json!({ "title": SIGNATURE_TITLE, "signature": signature });
        let html = self.render(embedded::SIGNATURE_DOCUMENT, &data)?;
        tracing::debug!(bytes = html.len(), "rendered signature document");
        Ok(html)
    }

    /// Render the gallery page for `entries`, all rendered for the person `name`.
    pub fn gallery_document(&self, name: &str, entries: &[GalleryEntry]) -> Result<String> {
        let data = json!({
            "title": GALLERY_TITLE,
            "name": name,
            "count": entries.len(),
            "templates": entries,
        });
        let html = self.render(embedded::GALLERY_DOCUMENT, &data)?;
        tracing::debug!(templates = entries.len(), bytes = html.len(), "rendered gallery document");
        Ok(html)
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SignatureData;
    use crate::templates::{self, Registry};

    #[test]
    fn test_signature_document_wraps_verbatim() {
        let renderer = DocumentRenderer::new();
        let signature = r#"<table style="color: #123456;"><tr><td>Ana & co</td></tr></table>"#;
        let html = renderer.signature_document(signature).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>Email Signature</title>"));
        assert!(html.contains(signature));
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = DocumentRenderer::new();
        let result = renderer.render("<title>{{title}}</title>", &json!({}));
        assert!(matches!(result, Err(SignatureError::DocumentRender(_))));
    }

    #[test]
    fn test_gallery_lists_every_template() {
        let registry = Registry::builtin();
        let data = SignatureData::new("Ana <Silva>", "ana@example.com");
        let entries: Vec<GalleryEntry> = registry
            .iter()
            .map(|template| {
                let html = templates::render(template.id(), &data).unwrap();
                GalleryEntry::new(template.info(), html)
            })
            .collect();

        let html = DocumentRenderer::new()
            .gallery_document(&data.name, &entries)
            .unwrap();
        assert!(html.contains("25 templates rendered for Ana &lt;Silva&gt;"));
        for template in registry.iter() {
            let info = template.info();
            assert!(html.contains(&format!(r#"id="{}""#, info.id)), "{}", info.id);
            assert!(html.contains(&format!(r#"href="{}.html""#, info.id)), "{}", info.id);
        }
    }

    #[test]
    fn test_gallery_embeds_signature_html_unescaped() {
        let template = Registry::builtin().get("minimalist").unwrap();
        let data = SignatureData::new("Ana", "ana@example.com");
        let signature = templates::render(template.id(), &data).unwrap();
        let entry = GalleryEntry::new(template.info(), signature.clone());
        let html = DocumentRenderer::new().gallery_document("Ana", &[entry]).unwrap();
        assert!(html.contains(&signature));
    }
}
