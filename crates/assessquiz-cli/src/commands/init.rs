//! The `assessquiz init` command.

use std::path::Path;

use anyhow::Result;

use assessquiz_core::dataset::builtin_catalog;
use assessquiz_core::parser::catalog_to_toml;

pub fn execute() -> Result<()> {
    // Create assessquiz.toml
    if Path::new("assessquiz.toml").exists() {
        println!("assessquiz.toml already exists, skipping.");
    } else {
        std::fs::write("assessquiz.toml", SAMPLE_CONFIG)?;
        println!("Created assessquiz.toml");
    }

    // Write the built-in dataset as an editable catalog
    std::fs::create_dir_all("catalogs")?;
    let example_path = Path::new("catalogs/example.toml");
    if example_path.exists() {
        println!("catalogs/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, catalog_to_toml(&builtin_catalog())?)?;
        println!("Created catalogs/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit catalogs/example.toml to add cases and answer keys");
    println!("  2. Run: assessquiz validate");
    println!("  3. Run: assessquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# assessquiz configuration

# Catalog file or directory. Remove to use the built-in dataset.
# ${VAR} references are expanded; ASSESSQUIZ_CATALOG overrides this value.
catalog = "catalogs"

output_dir = "./assessquiz-results"

[scoring]
missing_must_have_penalty = 15.0
extra_item_penalty = 5.0
decimals = 1
"#;
