//! Terminal output for the sigforge CLI.
//!
//! Status lines go to stdout styled with [`console`]. `render` skips them
//! entirely when the signature itself is printed to stdout.

use console::style;

use sigforge_core::TemplateInfo;

/// Command banner, e.g. `sigforge gallery: out/`, underlined to its width.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.chars().count())).dim());
}

/// A file was written or a form saved.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Non-fatal notice, such as an existing form being overwritten by `init --force`.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Gallery phase marker: `[2/3] Writing template pages...`.
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Indented detail line under a command, e.g. the template id or output size.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// One `templates` listing entry: id and display name, description beneath.
///
/// The default template is tagged so `init` users know what an empty
/// `templateId` resolves to.
pub fn print_template(info: &TemplateInfo, is_default: bool) {
    let marker = if is_default {
        format!(" {}", style("(default)").green())
    } else {
        String::new()
    };
    let id = format!("{:<22}", info.id);
    println!("  {} {}{marker}", style(id).bold(), info.name);
    println!("  {:<22} {}", "", style(info.description).dim());
}
