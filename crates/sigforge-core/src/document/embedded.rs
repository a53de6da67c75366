//! Compile-time embedded document shells.
//!
//! Shells live in `crates/sigforge-core/templates/documents/`; paths are relative to this
//! source file (`src/document/embedded.rs`).
//! Variables referenced by each shell must match what [`super::renderer::DocumentRenderer`]
//! passes in; the renderer runs in strict mode and fails on a missing one.

// -------------------------------------------------------
// Single signature
// -------------------------------------------------------

/// Minimal standalone page around one signature. Variables: `title`, `signature` (raw HTML).
pub const SIGNATURE_DOCUMENT: &str = include_str!("../../templates/documents/signature.html.hbs");

// -------------------------------------------------------
// Template gallery
// -------------------------------------------------------

/// Overview page of every template. Variables: `title`, `name`, `count`, and `templates`,
/// each with `id`, `name`, `description`, `thumbnail`, `file` and `html` (raw HTML).
pub const GALLERY_DOCUMENT: &str = include_str!("../../templates/documents/gallery.html.hbs");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_shell_inserts_raw_html() {
        assert!(SIGNATURE_DOCUMENT.starts_with("<!DOCTYPE html>"));
        assert!(SIGNATURE_DOCUMENT.contains("{{{signature}}}"));
        assert!(SIGNATURE_DOCUMENT.contains("{{title}}"));
    }

    #[test]
    fn test_gallery_shell_iterates_templates() {
        assert!(GALLERY_DOCUMENT.contains("{{#each templates}}"));
        assert!(GALLERY_DOCUMENT.contains("{{{html}}}"));
        assert!(GALLERY_DOCUMENT.contains("{{/each}}"));
    }
}
