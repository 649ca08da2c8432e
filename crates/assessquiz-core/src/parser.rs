//! TOML catalog parser.
//!
//! Loads catalogs from TOML files and directories, writes them back out,
//! and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{AssessmentItem, Case, CaseSolution};

/// On-disk layout of a catalog file.
#[derive(Debug, Deserialize, Serialize)]
struct TomlCatalogFile {
    #[serde(default)]
    catalog: TomlCatalogHeader,
    #[serde(default)]
    cases: Vec<Case>,
    #[serde(default)]
    items: Vec<AssessmentItem>,
    #[serde(default)]
    solutions: Vec<CaseSolution>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlCatalogHeader {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    tracing::debug!(
        "parsed {}: {} cases, {} items, {} solutions",
        source_path.display(),
        parsed.cases.len(),
        parsed.items.len(),
        parsed.solutions.len()
    );

    Ok(Catalog {
        name: parsed.catalog.name,
        description: parsed.catalog.description,
        cases: parsed.cases,
        items: parsed.items,
        solutions: parsed.solutions,
    })
}

/// Serialize a `Catalog` in the same layout `parse_catalog_str` reads.
pub fn catalog_to_toml(catalog: &Catalog) -> Result<String> {
    let file = TomlCatalogFile {
        catalog: TomlCatalogHeader {
            name: catalog.name.clone(),
            description: catalog.description.clone(),
        },
        cases: catalog.cases.clone(),
        items: catalog.items.clone(),
        solutions: catalog.solutions.clone(),
    };
    toml::to_string_pretty(&file).context("failed to serialize catalog")
}

/// Recursively load all `.toml` catalog files from a directory.
///
/// Files are visited in path order; unparsable files are skipped.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        paths.push(entry?.path());
    }
    paths.sort();

    for path in paths {
        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// Load a catalog from a file, or merge every catalog under a directory.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.is_dir() {
        return parse_catalog(path);
    }

    let mut merged = Catalog::default();
    let catalogs = load_catalog_directory(path)?;
    if catalogs.is_empty() {
        anyhow::bail!("no catalog files found in {}", path.display());
    }
    for catalog in catalogs {
        merged.merge(catalog);
    }
    Ok(merged)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The case ID (if applicable).
    pub case_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut case_ids = HashSet::new();
    for case in &catalog.cases {
        if !case_ids.insert(case.id.as_str()) {
            warnings.push(ValidationWarning {
                case_id: Some(case.id.clone()),
                message: format!("duplicate case ID: {}", case.id),
            });
        }
    }

    let mut item_ids = HashSet::new();
    for item in &catalog.items {
        if !item_ids.insert(item.id.as_str()) {
            warnings.push(ValidationWarning {
                case_id: None,
                message: format!("duplicate item ID: {}", item.id),
            });
        }
    }

    // Answer-key entries must reference known cases and items, once per case
    let mut keyed = HashSet::new();
    for s in &catalog.solutions {
        if !case_ids.contains(s.case_id.as_str()) {
            warnings.push(ValidationWarning {
                case_id: Some(s.case_id.clone()),
                message: format!("solution references unknown case: {}", s.case_id),
            });
        }
        if !item_ids.contains(s.item_id.as_str()) {
            warnings.push(ValidationWarning {
                case_id: Some(s.case_id.clone()),
                message: format!("solution references unknown item: {}", s.item_id),
            });
        }
        if !keyed.insert((s.case_id.as_str(), s.item_id.as_str())) {
            warnings.push(ValidationWarning {
                case_id: Some(s.case_id.clone()),
                message: format!("duplicate answer-key entry for item: {}", s.item_id),
            });
        }
        if s.priority_weight == 0 {
            warnings.push(ValidationWarning {
                case_id: Some(s.case_id.clone()),
                message: format!("priority_weight is 0 for item: {}", s.item_id),
            });
        }
    }

    for case in &catalog.cases {
        if !catalog.solutions.iter().any(|s| s.case_id == case.id) {
            warnings.push(ValidationWarning {
                case_id: Some(case.id.clone()),
                message: "answer key is empty; this case always scores 0".into(),
            });
        }
    }

    warnings
}
