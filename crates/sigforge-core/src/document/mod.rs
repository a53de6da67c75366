//! Standalone HTML documents built around rendered signatures.
//!
//! Template render functions return bare fragments. Wrapping a fragment in a
//! full page happens only here, through the shells in [`embedded`] rendered by
//! [`renderer::DocumentRenderer`]:
//!
//! - a single signature page, ready to save and import into a mail client
//! - a gallery page listing every template with a live preview

pub mod embedded;
pub mod renderer;

use serde::Serialize;

use crate::templates::TemplateInfo;

/// Title of the single signature page.
pub const SIGNATURE_TITLE: &str = "Email Signature";

/// Title of the gallery page.
pub const GALLERY_TITLE: &str = "Signature Templates";

/// File name of the gallery page inside its output directory.
pub const GALLERY_INDEX_FILE: &str = "index.html";

/// One template in the gallery page.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    /// File the standalone page for this template is written to.
    pub file: String,
    /// The rendered signature.
    pub html: String,
}

impl GalleryEntry {
    pub fn new(info: &TemplateInfo, html: String) -> Self {
        Self {
            id: info.id,
            name: info.name,
            description: info.description,
            thumbnail: info.thumbnail,
            file: template_file_name(info.id),
            html,
        }
    }
}

/// Download name for a signature owned by `name`.
///
/// Lowercased, with each whitespace run replaced by `-`. An empty name gives `signature.html`.
pub fn download_file_name(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "signature.html".to_string()
    } else {
        format!("signature-{slug}.html")
    }
}

/// File name of the standalone page for one template in a gallery directory.
pub fn template_file_name(template_id: &str) -> String {
    format!("{template_id}.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Registry;

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("Ana Silva"), "signature-ana-silva.html");
        assert_eq!(download_file_name("  Ana   Maria\tSilva "), "signature-ana-maria-silva.html");
        assert_eq!(download_file_name("ANA"), "signature-ana.html");
        assert_eq!(download_file_name("   "), "signature.html");
    }

    #[test]
    fn test_gallery_entry_from_info() {
        let template = Registry::builtin().get("modern-card").unwrap();
        let entry = GalleryEntry::new(template.info(), "<table></table>".into());
        assert_eq!(entry.id, "modern-card");
        assert_eq!(entry.file, "modern-card.html");
        assert_eq!(entry.html, "<table></table>");
    }
}
