use anyhow::Result;

use sigforge_core::signature::DEFAULT_TEMPLATE_ID;
use sigforge_core::Registry;

use crate::output;

/// List every built-in template in registry order.
///
/// With `json`, prints the metadata array (`id`, `name`, `description`, `thumbnail`) instead.
pub async fn run(json: bool) -> Result<()> {
    let registry = Registry::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&registry.infos())?);
        return Ok(());
    }

    output::print_header(&format!("sigforge templates ({})", registry.len()));
    for info in registry.infos() {
        output::print_template(info, info.id == DEFAULT_TEMPLATE_ID);
    }
    println!();

    Ok(())
}
