use std::path::Path;

use anyhow::Result;
use dialoguer::Select;

use sigforge_core::signature::{font_family_by_label, DEFAULT_FONT_FAMILY, FONT_FAMILIES};
use sigforge_core::{Registry, SignatureForm};

use crate::output;

/// Write a default signature form file.
///
/// The template is taken from `--template` or chosen interactively; the font
/// family from `--font`, a prompt in interactive mode, or the default. An
/// existing form file is only replaced with `--force`.
pub async fn run(
    form_path: &Path,
    template: Option<&str>,
    font: Option<&str>,
    force: bool,
) -> Result<()> {
    output::print_header(&format!("sigforge init: {}", form_path.display()));

    if form_path.exists() {
        if !force {
            anyhow::bail!(
                "form file already exists at {} (use --force to overwrite)",
                form_path.display()
            );
        }
        output::print_warning(&format!("Overwriting {}", form_path.display()));
    }

    // Select template (interactive if not provided)
    let template_id = match template {
        Some(id) => {
            super::ensure_template(id)?;
            id.to_string()
        }
        None => {
            let infos = Registry::builtin().infos();
            let descriptions: Vec<String> = infos
                .iter()
                .map(|info| format!("{}: {}", info.name, info.description))
                .collect();

            let selection = Select::new()
                .with_prompt("Select signature template")
                .items(&descriptions)
                .default(0)
                .interact()?;

            infos[selection].id.to_string()
        }
    };

    // Select font (interactive only alongside the template prompt)
    let labels: Vec<&str> = FONT_FAMILIES.iter().map(|(_, name)| *name).collect();
    let font_family = match font {
        Some(label) => match font_family_by_label(label) {
            Some(stack) => stack,
            None => anyhow::bail!("unknown font: {label} (available: {})", labels.join(", ")),
        },
        None if template.is_none() => {
            let selection = Select::new()
                .with_prompt("Select font family")
                .items(&labels)
                .default(0)
                .interact()?;
            FONT_FAMILIES[selection].0
        }
        None => DEFAULT_FONT_FAMILY,
    };

    let form = SignatureForm {
        template_id: template_id.clone(),
        font_family: font_family.to_string(),
        ..Default::default()
    };
    form.save(form_path)?;

    output::print_success(&format!(
        "Form written with the {template_id} template"
    ));
    println!();
    println!("  Next steps:");
    println!("    fill in name and email in {}", form_path.display());
    println!("    sigforge render");
    println!("    sigforge gallery");
    println!();

    Ok(())
}
