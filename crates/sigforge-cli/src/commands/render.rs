use std::path::{Path, PathBuf};

use anyhow::Result;

use sigforge_core::document::download_file_name;
use sigforge_core::document::renderer::DocumentRenderer;
use sigforge_core::Escaping;

use crate::output;

/// Render the signature from the form file.
///
/// Prints the HTML to stdout unless `output_path` is given. With `document`,
/// the fragment is wrapped in a standalone page and, without an explicit
/// output path, saved as `signature-<name>.html` in the current directory.
pub async fn run(
    form_path: &Path,
    template: Option<&str>,
    document: bool,
    escape: bool,
    output_path: Option<&Path>,
) -> Result<()> {
    let data = super::load_signature(form_path)?;
    let template_id = template.unwrap_or(data.template_id.as_str());
    super::ensure_template(template_id)?;

    let escaping = if escape { Escaping::Html } else { Escaping::Raw };
    let mut html = sigforge_core::render_with(template_id, &data, escaping)?;
    if document {
        html = DocumentRenderer::new().signature_document(&html)?;
    }

    let Some(target) = output_target(output_path, document, &data.name) else {
        println!("{html}");
        return Ok(());
    };
    let output_path = target.as_path();

    output::print_header("sigforge render");
    output::print_key_value("Template", template_id);
    output::print_key_value("Escaping", if escape { "html" } else { "raw" });

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output_path, &html).await?;

    output::print_success(&format!("Signature written to {}", output_path.display()));
    output::print_key_value("Size", &format!("{} bytes", html.len()));

    Ok(())
}

/// Where the rendered HTML goes; `None` means stdout.
fn output_target(output_path: Option<&Path>, document: bool, name: &str) -> Option<PathBuf> {
    match output_path {
        Some(path) => Some(path.to_path_buf()),
        None if document => Some(PathBuf::from(download_file_name(name))),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigforge_core::SignatureForm;

    fn write_form(dir: &Path) -> PathBuf {
        let path = dir.join("signature.json");
        let form = SignatureForm {
            name: "Ana Silva".into(),
            email: "ana@example.com".into(),
            job_title: "<b>Designer</b>".into(),
            template_id: "modern-card".into(),
            ..Default::default()
        };
        form.save(&path).unwrap();
        path
    }

    #[test]
    fn test_output_target() {
        assert_eq!(output_target(None, false, "Ana Silva"), None);
        assert_eq!(
            output_target(None, true, "Ana Silva"),
            Some(PathBuf::from("signature-ana-silva.html"))
        );
        assert_eq!(
            output_target(Some(Path::new("out/sig.html")), true, "Ana Silva"),
            Some(PathBuf::from("out/sig.html"))
        );
    }

    #[tokio::test]
    async fn test_render_document_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = write_form(dir.path());
        let out = dir.path().join("nested/sig.html");

        run(&form_path, None, true, false, Some(&out)).await.unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Email Signature</title>"));
        assert!(html.contains("Ana Silva"));
        assert!(html.contains("mailto:ana@example.com"));
        assert!(html.contains("<b>Designer</b>"));
    }

    #[tokio::test]
    async fn test_render_fragment_with_template_override_and_escaping() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = write_form(dir.path());
        let out = dir.path().join("sig.html");

        run(&form_path, Some("minimalist"), false, true, Some(&out)).await.unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<table"));
        assert!(html.contains("&lt;b&gt;Designer&lt;/b&gt;"));
        assert_eq!(
            html,
            sigforge_core::render_with(
                "minimalist",
                &SignatureForm::load(&form_path).unwrap().validate().unwrap(),
                Escaping::Html,
            )
            .unwrap()
        );
    }

    #[tokio::test]
    async fn test_render_unknown_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = write_form(dir.path());
        let out = dir.path().join("sig.html");

        let err = run(&form_path, Some("nope"), false, false, Some(&out)).await.unwrap_err();
        assert!(err.to_string().contains("unknown template: nope"));
        assert!(!out.exists());
    }
}
