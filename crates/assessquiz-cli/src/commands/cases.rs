//! The `assessquiz cases` command.

use anyhow::Result;

use assessquiz_core::traits::ReferenceData;

use super::CatalogSource;

pub fn execute(source: &CatalogSource) -> Result<()> {
    let (_, catalog) = source.load()?;

    if !catalog.name.is_empty() {
        println!("{}\n", catalog.name);
    }

    for case in catalog.cases() {
        let weight: u64 = catalog
            .answer_key(&case.id)
            .iter()
            .map(|s| u64::from(s.priority_weight))
            .sum();
        println!("{}  {}", case.id, case.title);
        if !case.description.is_empty() {
            println!("    {}", case.description);
        }
        println!("    answer key weight: {weight}");
    }

    if catalog.cases().is_empty() {
        println!("No cases in catalog.");
    }

    Ok(())
}
