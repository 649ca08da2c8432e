//! Score report types with JSON persistence and markdown output.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{CaseSolution, Selection};
use crate::scoring::ScoringResult;
use crate::traits::ReferenceData;

/// A scored round, with everything needed to explain the number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The case that was played.
    pub case: CaseSummary,
    /// Item identifiers the user submitted.
    pub selected: Selection,
    /// The scoring outcome.
    pub result: ScoringResult,
    /// The full answer key, heaviest entries first.
    pub answer_key: Vec<AnswerKeyRow>,
}

/// Summary of a case (without the answer key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// One line of the answer-key explanation table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerKeyRow {
    pub item_id: String,
    /// Display name, or the identifier when the item is not in the catalog.
    pub item_name: String,
    pub category: String,
    pub priority_weight: u32,
    pub must_have: bool,
    pub rationale: String,
    /// Whether the user picked this item.
    pub selected: bool,
}

impl ScoreReport {
    /// Assemble a report for `case_id` from a scored selection.
    pub fn build(
        data: &dyn ReferenceData,
        case_id: &str,
        selected: &Selection,
        result: ScoringResult,
    ) -> Self {
        let case = match data.find_case(case_id) {
            Some(c) => CaseSummary {
                id: c.id.clone(),
                title: c.title.clone(),
                description: c.description.clone(),
            },
            None => CaseSummary {
                id: case_id.to_string(),
                title: case_id.to_string(),
                description: String::new(),
            },
        };

        let row = |s: &CaseSolution, picked: bool| {
            let item = data.find_item(&s.item_id);
            AnswerKeyRow {
                item_id: s.item_id.clone(),
                item_name: item.map_or_else(|| s.item_id.clone(), |i| i.name.clone()),
                category: item.map(|i| i.category.clone()).unwrap_or_default(),
                priority_weight: s.priority_weight,
                must_have: s.must_have,
                rationale: s.rationale.clone(),
                selected: picked,
            }
        };

        let mut answer_key: Vec<AnswerKeyRow> = result
            .correct_items
            .iter()
            .map(|s| row(s, true))
            .chain(result.missing_items.iter().map(|s| row(s, false)))
            .collect();
        answer_key.sort_by(|a, b| b.priority_weight.cmp(&a.priority_weight));

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            case,
            selected: selected.clone(),
            result,
            answer_key,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let r = &self.result;

        md.push_str(&format!("## {}\n\n", self.case.title));
        md.push_str(&format!("**Score:** {:.1} / {:.0}\n\n", r.score, r.max_score));
        md.push_str(&format!(
            "Base {:.1} ({} of {} weight), must-have penalty -{:.0}, extra penalty -{:.0}\n\n",
            r.breakdown.base_score,
            r.breakdown.earned_weight,
            r.breakdown.total_weight,
            r.breakdown.must_have_penalty,
            r.breakdown.extra_penalty
        ));

        md.push_str("### Missed must-haves\n\n");
        if r.missing_must_haves.is_empty() {
            md.push_str("None.\n\n");
        } else {
            for s in &r.missing_must_haves {
                let name = self
                    .answer_key
                    .iter()
                    .find(|row| row.item_id == s.item_id)
                    .map_or(s.item_id.as_str(), |row| row.item_name.as_str());
                md.push_str(&format!("- **{}**: {}\n", name, s.rationale));
            }
            md.push('\n');
        }

        md.push_str("### Unnecessary selections\n\n");
        if r.extra_items.is_empty() {
            md.push_str("None.\n\n");
        } else {
            for item in &r.extra_items {
                md.push_str(&format!("- {}\n", item.name));
            }
            md.push('\n');
        }

        md.push_str("### Answer key\n\n");
        md.push_str("| Item | Weight | Must-have | Selected | Rationale |\n");
        md.push_str("|------|--------|-----------|----------|-----------|\n");
        for row in &self.answer_key {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                row.item_name,
                row.priority_weight,
                if row.must_have { "yes" } else { "" },
                if row.selected { "yes" } else { "" },
                row.rationale
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builtin_catalog;
    use crate::scoring::ScoringEngine;

    fn make_report(case_id: &str, selected: &[&str]) -> ScoreReport {
        let catalog = builtin_catalog();
        let selection: Selection = selected.iter().copied().collect();
        let result = ScoringEngine::default()
            .score_active(Some(case_id), &catalog, &selection)
            .unwrap();
        ScoreReport::build(&catalog, case_id, &selection, result)
    }

    #[test]
    fn answer_key_sorted_by_weight() {
        let report = make_report("case-1", &["eval-4", "eval-5"]);
        assert_eq!(report.answer_key.len(), 7);
        let weights: Vec<u32> = report.answer_key.iter().map(|r| r.priority_weight).collect();
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
        // Stable: selected eval-4 precedes unselected weight-5 entries
        assert_eq!(report.answer_key[0].item_id, "eval-4");
        assert!(report.answer_key[0].selected);
        assert_eq!(report.answer_key[0].item_name, "ROM（股関節）");
    }

    #[test]
    fn unknown_case_uses_identifier_as_title() {
        let report = make_report("case-x", &[]);
        assert_eq!(report.case.title, "case-x");
        assert!(report.answer_key.is_empty());
        assert_eq!(report.result.score, 0.0);
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report(
            "case-2",
            &["eval-25", "eval-11", "eval-12", "eval-21", "eval-1"],
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = ScoreReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.case.id, "case-2");
        // 18 / 28 * 100 = 64.28..., minus one extra
        assert_eq!(loaded.result.score, 59.3);
        assert_eq!(loaded.result.extra_items, report.result.extra_items);
        assert_eq!(loaded.selected, report.selected);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ScoreReport::load_json(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn markdown_output() {
        let report = make_report("case-1", &["eval-4", "eval-8", "eval-1"]);
        let md = report.to_markdown();
        assert!(md.contains("症例A"));
        assert!(md.contains("NRS/VAS（疼痛）"));
        assert!(md.contains("術後疼痛の管理"));
        assert!(md.contains("- 身長・体重"));
        assert!(md.contains("| Item | Weight |"));
    }

    #[test]
    fn markdown_reports_clean_round() {
        let report = make_report(
            "case-1",
            &["eval-4", "eval-5", "eval-8", "eval-13", "eval-14", "eval-19", "eval-21"],
        );
        let md = report.to_markdown();
        assert!(md.contains("**Score:** 100.0 / 100"));
        assert_eq!(md.matches("None.").count(), 2);
    }
}
