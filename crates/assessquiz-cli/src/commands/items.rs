//! The `assessquiz items` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::CatalogSource;

pub fn execute(source: &CatalogSource) -> Result<()> {
    let (_, catalog) = source.load()?;

    let mut table = Table::new();
    table.set_header(vec!["Category", "ID", "Item"]);

    for group in catalog.items_by_category() {
        for (i, item) in group.items.iter().enumerate() {
            let category = if i == 0 { group.category } else { "" };
            table.add_row(vec![
                Cell::new(category),
                Cell::new(&item.id),
                Cell::new(&item.name),
            ]);
        }
    }

    println!("{table}");
    println!("{} items", catalog.items.len());

    Ok(())
}
