use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinSet;

use sigforge_core::document::renderer::DocumentRenderer;
use sigforge_core::document::{GalleryEntry, GALLERY_INDEX_FILE};
use sigforge_core::{Escaping, Registry};

use crate::output;

/// Render every built-in template into `out_dir`.
///
/// Templates render concurrently on the blocking pool. Each one is written as a
/// standalone page, then `index.html` lists them all in registry order.
pub async fn run(form_path: &Path, out_dir: &Path, escape: bool) -> Result<()> {
    output::print_header(&format!("sigforge gallery: {}", out_dir.display()));

    let data = Arc::new(super::load_signature(form_path)?);
    let registry = Registry::builtin();
    let escaping = if escape { Escaping::Html } else { Escaping::Raw };

    output::print_step(1, 3, &format!("Rendering {} templates...", registry.len()));
    let mut tasks = JoinSet::new();
    for (index, template) in registry.iter().enumerate() {
        let id = template.id();
        let data = Arc::clone(&data);
        tasks.spawn_blocking(move || {
            sigforge_core::render_with(id, &data, escaping).map(|html| (index, html))
        });
    }

    let ids = registry.ids();
    let progress = ProgressBar::new(registry.len() as u64);
    progress.set_style(ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")?);

    let mut rendered: Vec<Option<String>> = vec![None; registry.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, html) = joined??;
        progress.set_message(ids[index]);
        progress.inc(1);
        rendered[index] = Some(html);
    }
    progress.finish_and_clear();

    output::print_step(2, 3, "Writing template pages...");
    tokio::fs::create_dir_all(out_dir).await?;
    let renderer = DocumentRenderer::new();
    let mut entries = Vec::with_capacity(registry.len());
    let mut writes = JoinSet::new();
    for (template, html) in registry.iter().zip(rendered) {
        let Some(html) = html else {
            anyhow::bail!("template {} produced no output", template.id());
        };
        let entry = GalleryEntry::new(template.info(), html);
        let page = renderer.signature_document(&entry.html)?;
        let path = out_dir.join(&entry.file);
        writes.spawn(async move {
            tokio::fs::write(&path, page).await?;
            tracing::debug!(path = %path.display(), "wrote template page");
            Ok::<_, std::io::Error>(())
        });
        entries.push(entry);
    }
    while let Some(written) = writes.join_next().await {
        written??;
    }

    output::print_step(3, 3, "Writing index page...");
    let index = renderer.gallery_document(&data.name, &entries)?;
    let index_path = out_dir.join(GALLERY_INDEX_FILE);
    tokio::fs::write(&index_path, index).await?;

    output::print_success(&format!("Gallery of {} templates written", entries.len()));
    output::print_key_value("Index", &index_path.display().to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigforge_core::SignatureForm;

    #[tokio::test]
    async fn test_gallery_writes_every_template_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = dir.path().join("signature.json");
        SignatureForm {
            name: "Ana Silva".into(),
            email: "ana@example.com".into(),
            ..Default::default()
        }
        .save(&form_path)
        .unwrap();
        let out_dir = dir.path().join("gallery");

        run(&form_path, &out_dir, false).await.unwrap();

        let registry = Registry::builtin();
        for id in registry.ids() {
            let page = std::fs::read_to_string(out_dir.join(format!("{id}.html"))).unwrap();
            assert!(page.starts_with("<!DOCTYPE html>"), "{id}");
            assert!(page.contains("mailto:ana@example.com"), "{id}");
        }
        let pages = std::fs::read_dir(&out_dir).unwrap().count();
        assert_eq!(pages, registry.len() + 1);

        let index = std::fs::read_to_string(out_dir.join(GALLERY_INDEX_FILE)).unwrap();
        let positions: Vec<usize> = registry
            .ids()
            .iter()
            .map(|id| index.find(&format!(r#"id="{id}""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn test_gallery_fails_on_invalid_form() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = dir.path().join("signature.json");
        SignatureForm::default().save(&form_path).unwrap();
        let out_dir = dir.path().join("gallery");

        assert!(run(&form_path, &out_dir, false).await.is_err());
        assert!(!out_dir.exists());
    }
}
