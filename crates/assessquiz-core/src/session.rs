//! Selection state for one quiz round.
//!
//! A session tracks the active case, the toggled item identifiers, and
//! whether the round has been submitted. Every method is total: degenerate
//! requests (toggling after submit, submitting without a case) are ignored.

use serde::{Deserialize, Serialize};

use crate::model::Selection;
use crate::scoring::{ScoringEngine, ScoringResult};
use crate::traits::ReferenceData;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No case chosen yet.
    NoCase,
    /// A case is active and the selection can change.
    Selecting,
    /// The selection is frozen and can be scored.
    Submitted,
}

/// Mutable state of a single user's round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    active_case: Option<String>,
    selection: Selection,
    submitted: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `case_id` the active case, clearing the selection and the
    /// submitted flag. The identifier is not checked against any catalog.
    pub fn select_case(&mut self, case_id: impl Into<String>) {
        let case_id = case_id.into();
        tracing::debug!(case_id = %case_id, "case selected");
        self.active_case = Some(case_id);
        self.selection.clear();
        self.submitted = false;
    }

    /// Flip membership of `item_id` in the selection.
    ///
    /// Returns `false` without touching the selection once submitted.
    pub fn toggle_item(&mut self, item_id: &str) -> bool {
        if self.submitted {
            tracing::debug!(item_id, "toggle ignored: selection is frozen");
            return false;
        }
        let selected = self.selection.toggle(item_id);
        tracing::debug!(item_id, selected, "item toggled");
        true
    }

    /// Freeze the selection. Ignored when no case is active.
    pub fn submit(&mut self) {
        if self.active_case.is_none() {
            tracing::debug!("submit ignored: no active case");
            return;
        }
        tracing::debug!(selected = self.selection.len(), "selection submitted");
        self.submitted = true;
    }

    /// Clear the selection and the submitted flag, keeping the active case.
    pub fn reset(&mut self) {
        tracing::debug!("session reset");
        self.selection.clear();
        self.submitted = false;
    }

    pub fn phase(&self) -> Phase {
        match (&self.active_case, self.submitted) {
            (None, _) => Phase::NoCase,
            (Some(_), false) => Phase::Selecting,
            (Some(_), true) => Phase::Submitted,
        }
    }

    pub fn active_case(&self) -> Option<&str> {
        self.active_case.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Score the current round. Absent unless a case is active and the
    /// selection has been submitted.
    pub fn result(
        &self,
        data: &dyn ReferenceData,
        engine: &ScoringEngine,
    ) -> Option<ScoringResult> {
        if !self.submitted {
            return None;
        }
        engine.score_active(self.active_case(), data, &self.selection)
    }
}
