//! Core trait definitions for reference data access.
//!
//! The scoring engine and the session manager only see reference data
//! through this trait, so they never know how cases are stored or loaded.

use crate::model::{AssessmentItem, Case, CaseSolution};

// ---------------------------------------------------------------------------
// Reference data trait
// ---------------------------------------------------------------------------

/// Read-only access to cases, assessment items, and answer keys.
pub trait ReferenceData {
    /// All cases, in catalog order.
    fn cases(&self) -> &[Case];

    /// All assessment items, in catalog order.
    fn items(&self) -> &[AssessmentItem];

    /// All answer-key entries for every case.
    fn solutions(&self) -> &[CaseSolution];

    /// Look up a case by identifier.
    fn find_case(&self, case_id: &str) -> Option<&Case> {
        self.cases().iter().find(|c| c.id == case_id)
    }

    /// Look up an assessment item by identifier.
    fn find_item(&self, item_id: &str) -> Option<&AssessmentItem> {
        self.items().iter().find(|i| i.id == item_id)
    }

    /// Answer-key entries for one case, in declaration order.
    ///
    /// An unknown case has an empty answer key.
    fn answer_key(&self, case_id: &str) -> Vec<&CaseSolution> {
        self.solutions()
            .iter()
            .filter(|s| s.case_id == case_id)
            .collect()
    }
}
