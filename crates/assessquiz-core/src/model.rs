//! Core data model types for assessquiz.
//!
//! These are the fundamental types the whole quiz uses to represent
//! clinical cases, assessment items, answer keys, and a user's selection.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A clinical scenario presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Unique identifier for this case.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Free-text description of the patient.
    #[serde(default)]
    pub description: String,
}

/// One selectable evaluation procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentItem {
    /// Unique identifier for this item.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Grouping key. Opaque free text, not an enum.
    pub category: String,
}

/// A single answer-key entry tying one assessment item to one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSolution {
    /// The case this entry belongs to.
    pub case_id: String,
    /// The assessment item considered appropriate for the case.
    pub item_id: String,
    /// Relative importance of the item.
    pub priority_weight: u32,
    /// Whether omitting this item incurs a fixed penalty.
    #[serde(default)]
    pub must_have: bool,
    /// Explanation shown alongside the score.
    #[serde(default)]
    pub rationale: String,
}

/// The set of assessment item identifiers the user has toggled on.
///
/// Only membership matters; iteration is in identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.0.contains(item_id)
    }

    /// Add an identifier. Returns `false` if it was already present.
    pub fn insert(&mut self, item_id: impl Into<String>) -> bool {
        self.0.insert(item_id.into())
    }

    /// Remove an identifier. Returns `false` if it was not present.
    pub fn remove(&mut self, item_id: &str) -> bool {
        self.0.remove(item_id)
    }

    /// Flip membership of `item_id`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, item_id: &str) -> bool {
        if self.0.remove(item_id) {
            false
        } else {
            self.0.insert(item_id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.iter().collect();
        write!(f, "{}", ids.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut sel = Selection::new();
        assert!(sel.toggle("eval-4"));
        assert!(sel.contains("eval-4"));
        assert!(!sel.toggle("eval-4"));
        assert!(sel.is_empty());
    }

    #[test]
    fn selection_is_a_set() {
        let sel: Selection = ["eval-8", "eval-4", "eval-8"].into_iter().collect();
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.to_string(), "eval-4,eval-8");
    }

    #[test]
    fn solution_defaults_from_toml() {
        let s: CaseSolution = toml::from_str(
            r#"
case_id = "case-1"
item_id = "eval-5"
priority_weight = 3
"#,
        )
        .unwrap();
        assert!(!s.must_have);
        assert!(s.rationale.is_empty());
    }

    #[test]
    fn selection_serializes_as_list() {
        let sel: Selection = ["eval-13", "eval-4"].into_iter().collect();
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(json, r#"["eval-13","eval-4"]"#);
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sel);
    }
}
