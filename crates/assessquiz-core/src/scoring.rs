//! Weighted scoring of a selection against a case's answer key.
//!
//! Score = clamp(earned / total * 100 - penalties, 0, 100), rounded half away
//! from zero. Penalties are a fixed amount per missed must-have item and per
//! selected item that is not in the answer key.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::model::{AssessmentItem, CaseSolution, Selection};
use crate::traits::ReferenceData;

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 100.0;

/// Penalty constants and rounding precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Deducted once per must-have answer-key entry left unselected.
    #[serde(default = "default_must_have_penalty")]
    pub missing_must_have_penalty: f64,
    /// Deducted once per selected item absent from the answer key.
    #[serde(default = "default_extra_penalty")]
    pub extra_item_penalty: f64,
    /// Decimal places kept in the final score.
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

fn default_must_have_penalty() -> f64 {
    15.0
}

fn default_extra_penalty() -> f64 {
    5.0
}

fn default_decimals() -> u32 {
    1
}

impl ScoringConfig {
    /// Largest accepted `decimals`; finer rounding is below f64 precision.
    pub const MAX_DECIMALS: u32 = 10;

    /// Reject settings that would break the `[0, MAX_SCORE]` bound.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("missing_must_have_penalty", self.missing_must_have_penalty),
            ("extra_item_penalty", self.extra_item_penalty),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "scoring.{name} must be a non-negative number, got {value}"
            );
        }
        ensure!(
            self.decimals <= Self::MAX_DECIMALS,
            "scoring.decimals must be at most {}, got {}",
            Self::MAX_DECIMALS,
            self.decimals
        );
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            missing_must_have_penalty: default_must_have_penalty(),
            extra_item_penalty: default_extra_penalty(),
            decimals: default_decimals(),
        }
    }
}

/// How the final score was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of weights of selected answer-key entries.
    pub earned_weight: u64,
    /// Sum of weights of all answer-key entries.
    pub total_weight: u64,
    /// `earned / total * 100`, or 0 for an empty answer key. Unrounded.
    pub base_score: f64,
    /// Total deducted for missed must-have entries.
    pub must_have_penalty: f64,
    /// Total deducted for extra items.
    pub extra_penalty: f64,
}

/// The outcome of scoring one submitted selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Final score in `[0, MAX_SCORE]`, rounded.
    pub score: f64,
    /// Always `MAX_SCORE`.
    pub max_score: f64,
    /// Identical to `score` on the 0-100 scale.
    pub percentage: f64,
    /// Answer-key entries the user selected.
    pub correct_items: Vec<CaseSolution>,
    /// Answer-key entries the user did not select.
    pub missing_items: Vec<CaseSolution>,
    /// The subset of `missing_items` flagged must-have.
    pub missing_must_haves: Vec<CaseSolution>,
    /// Selected items that are not in the answer key.
    pub extra_items: Vec<AssessmentItem>,
    pub breakdown: ScoreBreakdown,
}

/// Pure scoring function holder. Holds only configuration, never state.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `selection` against the answer key of one case.
    ///
    /// `key` is the case's answer key in declaration order; `items` is the
    /// full catalog, used to resolve extra selections for display. Extra
    /// identifiers with no catalog entry are dropped.
    pub fn score(
        &self,
        key: &[&CaseSolution],
        items: &[AssessmentItem],
        selection: &Selection,
    ) -> ScoringResult {
        let mut correct_items = Vec::new();
        let mut missing_items = Vec::new();
        let mut missing_must_haves = Vec::new();
        let mut total_weight = 0u64;
        let mut earned_weight = 0u64;

        for solution in key {
            let weight = u64::from(solution.priority_weight);
            total_weight += weight;
            if selection.contains(&solution.item_id) {
                earned_weight += weight;
                correct_items.push((*solution).clone());
            } else {
                if solution.must_have {
                    missing_must_haves.push((*solution).clone());
                }
                missing_items.push((*solution).clone());
            }
        }

        // One entry per selected id (first catalog match), listed in catalog order
        let mut extras: Vec<(usize, &AssessmentItem)> = selection
            .iter()
            .filter(|id| !key.iter().any(|s| s.item_id == *id))
            .filter_map(|id| {
                items
                    .iter()
                    .position(|item| item.id == id)
                    .map(|pos| (pos, &items[pos]))
            })
            .collect();
        extras.sort_by_key(|(pos, _)| *pos);
        let extra_items: Vec<AssessmentItem> =
            extras.into_iter().map(|(_, item)| item.clone()).collect();

        let base_score = if total_weight > 0 {
            earned_weight as f64 / total_weight as f64 * MAX_SCORE
        } else {
            0.0
        };

        let must_have_penalty =
            missing_must_haves.len() as f64 * self.config.missing_must_have_penalty;
        let extra_penalty = extra_items.len() as f64 * self.config.extra_item_penalty;

        let clamped = (base_score - must_have_penalty - extra_penalty).clamp(0.0, MAX_SCORE);
        let score = round_to(clamped, self.config.decimals);

        tracing::debug!(
            earned_weight,
            total_weight,
            base_score,
            must_have_penalty,
            extra_penalty,
            score,
            "selection scored"
        );

        ScoringResult {
            score,
            max_score: MAX_SCORE,
            percentage: score,
            correct_items,
            missing_items,
            missing_must_haves,
            extra_items,
            breakdown: ScoreBreakdown {
                earned_weight,
                total_weight,
                base_score,
                must_have_penalty,
                extra_penalty,
            },
        }
    }

    /// Score the selection for the active case, if any.
    ///
    /// Returns `None` when no case is active. A case unknown to `data` has an
    /// empty answer key and therefore scores 0.
    pub fn score_active(
        &self,
        active_case: Option<&str>,
        data: &dyn ReferenceData,
        selection: &Selection,
    ) -> Option<ScoringResult> {
        let case_id = active_case?;
        let key = data.answer_key(case_id);
        Some(self.score(&key, data.items(), selection))
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(ScoringConfig::MAX_DECIMALS) as i32);
    (value * factor).round() / factor
}
