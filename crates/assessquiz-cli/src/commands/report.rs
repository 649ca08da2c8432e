//! The `assessquiz report` command.

use std::path::PathBuf;

use anyhow::Result;

use assessquiz_core::report::ScoreReport;

use super::score::emit;

pub fn execute(input: PathBuf, format: &str, output: Option<PathBuf>) -> Result<()> {
    let report = ScoreReport::load_json(&input)?;
    tracing::debug!(id = %report.id, case_id = %report.case.id, "report loaded");
    emit(&report, format, output)
}
