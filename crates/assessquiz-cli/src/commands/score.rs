//! The `assessquiz score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use assessquiz_core::report::ScoreReport;
use assessquiz_core::scoring::ScoringEngine;
use assessquiz_core::session::QuizSession;
use assessquiz_report::html::{generate_html, write_html_report};

use super::CatalogSource;

pub fn execute(
    source: &CatalogSource,
    case_id: &str,
    select: &[String],
    format: &str,
    output: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let (config, catalog) = source.load()?;

    catalog.require_case(case_id)?;
    for id in select {
        catalog.require_item(id)?;
    }

    let mut session = QuizSession::new();
    session.select_case(case_id);
    for id in select {
        // Repeated ids on the command line select once
        if !session.selection().contains(id) {
            session.toggle_item(id);
        }
    }
    session.submit();

    let engine = ScoringEngine::new(config.scoring);
    let result = session
        .result(&catalog, &engine)
        .context("round was not scored")?;
    let report = ScoreReport::build(&catalog, case_id, session.selection(), result);

    if save {
        let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
        let path = config
            .output_dir
            .join(format!("{case_id}-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Results saved to: {}", path.display());
    }

    emit(&report, format, output)
}

/// Render `report` in `format` to `output`, or to stdout when absent.
pub fn emit(report: &ScoreReport, format: &str, output: Option<PathBuf>) -> Result<()> {
    let rendered = match format {
        "json" => {
            if let Some(path) = &output {
                report.save_json(path)?;
                eprintln!("Results saved to: {}", path.display());
                return Ok(());
            }
            serde_json::to_string_pretty(report)?
        }
        "html" => {
            if let Some(path) = &output {
                write_html_report(report, path)?;
                eprintln!("HTML report: {}", path.display());
                return Ok(());
            }
            generate_html(report)
        }
        "markdown" | "md" => report.to_markdown(),
        "text" => format_text(report),
        other => anyhow::bail!("unknown format: {other} (expected text, json, markdown, html)"),
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Report written to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Plain-text rendering of a scored round.
pub fn format_text(report: &ScoreReport) -> String {
    let r = &report.result;
    let mut out = String::new();

    out.push_str(&format!("{}\n", report.case.title));
    out.push_str(&format!("Score: {:.1} / {:.0}\n", r.score, r.max_score));
    out.push_str(&format!(
        "  base {:.1} ({} of {} weight), must-have penalty -{:.0}, extra penalty -{:.0}\n",
        r.breakdown.base_score,
        r.breakdown.earned_weight,
        r.breakdown.total_weight,
        r.breakdown.must_have_penalty,
        r.breakdown.extra_penalty
    ));

    if !r.missing_must_haves.is_empty() {
        out.push_str("\nMissed must-haves:\n");
        for row in report
            .answer_key
            .iter()
            .filter(|row| row.must_have && !row.selected)
        {
            out.push_str(&format!("  {}: {}\n", row.item_name, row.rationale));
        }
    }

    if !r.extra_items.is_empty() {
        out.push_str("\nUnnecessary selections:\n");
        for item in &r.extra_items {
            out.push_str(&format!("  {} ({})\n", item.name, item.category));
        }
    }

    out.push_str("\nAnswer key:\n");
    for row in &report.answer_key {
        let mark = if row.selected { "x" } else { " " };
        let must = if row.must_have { " *" } else { "" };
        out.push_str(&format!(
            "  [{mark}] {} ({}){must}: {}\n",
            row.item_name, row.priority_weight, row.rationale
        ));
    }

    out
}
