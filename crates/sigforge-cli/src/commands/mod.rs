//! CLI command implementations for sigforge.
//!
//! Each module corresponds to a subcommand (`sigforge <command>`).

pub mod gallery;
pub mod init;
pub mod render;
pub mod templates;

use std::path::Path;

use anyhow::{Context, Result};

use sigforge_core::{Registry, SignatureData, SignatureForm};

/// Load the form file and validate it into a signature record.
pub(crate) fn load_signature(form_path: &Path) -> Result<SignatureData> {
    let form = SignatureForm::load(form_path)
        .with_context(|| format!("failed to load form from {}", form_path.display()))?;
    let data = form
        .validate()
        .with_context(|| format!("invalid form in {}", form_path.display()))?;
    Ok(data)
}

/// Fail with the list of valid ids when `id` is not a registered template.
pub(crate) fn ensure_template(id: &str) -> Result<()> {
    if Registry::builtin().get(id).is_none() {
        anyhow::bail!(
            "unknown template: {id} (available: {})",
            Registry::builtin().ids().join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_signature_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signature.json");
        std::fs::write(&path, r#"{"name": "Ana Silva", "email": "ana@example.com"}"#).unwrap();
        let data = load_signature(&path).unwrap();
        assert_eq!(data.name, "Ana Silva");
        assert_eq!(data.template_id, "classic-horizontal");
    }

    #[test]
    fn test_load_signature_rejects_default_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signature.json");
        SignatureForm::default().save(&path).unwrap();
        let err = load_signature(&path).unwrap_err();
        assert!(err.to_string().contains("invalid form"));
    }

    #[test]
    fn test_load_signature_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_signature(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_ensure_template() {
        assert!(ensure_template("modern-elegant").is_ok());
        let err = ensure_template("nope").unwrap_err();
        assert!(err.to_string().contains("classic-horizontal"));
    }
}
