//! Quiz configuration.
//!
//! Loaded from an explicit path, `./assessquiz.toml`, or
//! `~/.config/assessquiz/config.toml`, falling back to defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Environment variable that overrides the catalog path.
pub const CATALOG_ENV: &str = "ASSESSQUIZ_CATALOG";

/// Top-level assessquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Catalog file or directory. `None` means the built-in dataset.
    /// `${VAR}` references are expanded from the environment.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Penalties and rounding.
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Default directory for written reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./assessquiz-results")
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            scoring: ScoringConfig::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
///
/// `ASSESSQUIZ_CATALOG`, when set, replaces the configured catalog path.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("assessquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };
    config.scoring.validate()?;

    if let Ok(catalog) = std::env::var(CATALOG_ENV) {
        if !catalog.is_empty() {
            config.catalog = Some(PathBuf::from(catalog));
        }
    }

    config.catalog = config
        .catalog
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("assessquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_ASSESSQUIZ_TEST_VAR", "ortho");
        assert_eq!(resolve_env_vars("${_ASSESSQUIZ_TEST_VAR}"), "ortho");
        assert_eq!(
            resolve_env_vars("catalogs/${_ASSESSQUIZ_TEST_VAR}.toml"),
            "catalogs/ortho.toml"
        );
        std::env::remove_var("_ASSESSQUIZ_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_unterminated() {
        assert_eq!(resolve_env_vars("a/${OPEN"), "a/${OPEN");
    }

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("./assessquiz-results"));
    }

    #[test]
    fn parse_partial_scoring_table() {
        let toml_str = r#"
catalog = "catalogs/ortho.toml"

[scoring]
extra_item_penalty = 2.5
"#;
        let config: QuizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("catalogs/ortho.toml")));
        assert_eq!(config.scoring.missing_must_have_penalty, 15.0);
        assert_eq!(config.scoring.extra_item_penalty, 2.5);
        assert_eq!(config.scoring.decimals, 1);
    }

    #[test]
    fn explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_scoring_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for body in [
            "[scoring]\nextra_item_penalty = nan\n",
            "[scoring]\nmissing_must_have_penalty = -15.0\n",
            "[scoring]\ndecimals = 4000000000\n",
        ] {
            let path = dir.path().join("quiz.toml");
            std::fs::write(&path, body).unwrap();
            let err = load_config_from(Some(&path)).unwrap_err();
            assert!(format!("{err:#}").contains("scoring."), "{body}");
        }
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "output_dir = \"out\"\n[scoring]\ndecimals = 2\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.scoring.decimals, 2);
    }
}
