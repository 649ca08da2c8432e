//! The `assessquiz validate` command.

use anyhow::Result;

use assessquiz_core::parser::validate_catalog;

use super::CatalogSource;

pub fn execute(source: &CatalogSource) -> Result<()> {
    let (_, catalog) = source.load()?;

    let name = if catalog.name.is_empty() {
        "(unnamed)"
    } else {
        catalog.name.as_str()
    };
    println!(
        "Catalog: {} ({} cases, {} items, {} answer-key entries)",
        name,
        catalog.cases.len(),
        catalog.items.len(),
        catalog.solutions.len()
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .case_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
