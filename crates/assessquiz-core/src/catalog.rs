//! The reference data store: an immutable catalog of cases, items, and
//! answer keys.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{AssessmentItem, Case, CaseSolution};
use crate::traits::ReferenceData;

/// A complete set of reference data for one quiz.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Description of this catalog.
    #[serde(default)]
    pub description: String,
    /// Clinical cases.
    #[serde(default)]
    pub cases: Vec<Case>,
    /// Selectable assessment items.
    #[serde(default)]
    pub items: Vec<AssessmentItem>,
    /// Answer-key entries for all cases.
    #[serde(default)]
    pub solutions: Vec<CaseSolution>,
}

/// Items sharing one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a AssessmentItem>,
}

impl Catalog {
    /// Group items by category. Groups appear in order of first occurrence,
    /// items keep their catalog order.
    pub fn items_by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    category: &item.category,
                    items: vec![item],
                }),
            }
        }
        groups
    }

    /// Resolve a case identifier or fail with [`CatalogError::UnknownCase`].
    pub fn require_case(&self, case_id: &str) -> Result<&Case, CatalogError> {
        self.find_case(case_id)
            .ok_or_else(|| CatalogError::UnknownCase(case_id.to_string()))
    }

    /// Resolve an item identifier or fail with [`CatalogError::UnknownItem`].
    pub fn require_item(&self, item_id: &str) -> Result<&AssessmentItem, CatalogError> {
        self.find_item(item_id)
            .ok_or_else(|| CatalogError::UnknownItem(item_id.to_string()))
    }

    /// Append every case, item, and solution of `other`.
    pub fn merge(&mut self, other: Catalog) {
        if self.name.is_empty() {
            self.name = other.name;
        }
        if self.description.is_empty() {
            self.description = other.description;
        }
        self.cases.extend(other.cases);
        self.items.extend(other.items);
        self.solutions.extend(other.solutions);
    }
}

impl ReferenceData for Catalog {
    fn cases(&self) -> &[Case] {
        &self.cases
    }

    fn items(&self) -> &[AssessmentItem] {
        &self.items
    }

    fn solutions(&self) -> &[CaseSolution] {
        &self.solutions
    }
}
