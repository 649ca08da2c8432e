pub mod cases;
pub mod init;
pub mod items;
pub mod key;
pub mod play;
pub mod report;
pub mod score;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use assessquiz_core::catalog::Catalog;
use assessquiz_core::config::{load_config_from, QuizConfig};
use assessquiz_core::dataset::builtin_catalog;
use assessquiz_core::parser::load_catalog;

/// Where a command gets its configuration and reference data from.
pub struct CatalogSource {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl CatalogSource {
    /// Load the configuration, then the catalog it points at.
    ///
    /// `--catalog` wins over the configured path; with neither, the
    /// built-in dataset is used.
    pub fn load(&self) -> Result<(QuizConfig, Catalog)> {
        let config = load_config_from(self.config.as_deref())?;
        let path = self.catalog.clone().or_else(|| config.catalog.clone());

        let catalog = match path {
            Some(path) => {
                tracing::info!("loading catalog from {}", path.display());
                load_catalog(&path)?
            }
            None => builtin_catalog(),
        };

        Ok((config, catalog))
    }
}
