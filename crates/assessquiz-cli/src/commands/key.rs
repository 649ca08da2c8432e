//! The `assessquiz key` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use assessquiz_core::traits::ReferenceData;

use super::CatalogSource;

pub fn execute(source: &CatalogSource, case_id: &str) -> Result<()> {
    let (_, catalog) = source.load()?;
    let case = catalog.require_case(case_id)?;

    println!("{}", case.title);

    let key = catalog.answer_key(case_id);
    if key.is_empty() {
        println!("No answer key for this case.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Item", "Category", "Weight", "Must-have", "Rationale"]);

    for s in &key {
        let (name, category) = catalog
            .find_item(&s.item_id)
            .map_or((s.item_id.as_str(), ""), |i| {
                (i.name.as_str(), i.category.as_str())
            });
        table.add_row(vec![
            Cell::new(name),
            Cell::new(category),
            Cell::new(s.priority_weight),
            Cell::new(if s.must_have { "yes" } else { "" }),
            Cell::new(&s.rationale),
        ]);
    }

    let total: u64 = key.iter().map(|s| u64::from(s.priority_weight)).sum();
    println!("{table}");
    println!("Total weight: {total}");

    Ok(())
}
