//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use assessquiz_core::report::ScoreReport;

use crate::style::category_style;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn category_badge(category: &str) -> String {
    let style = category_style(category);
    format!(
        "<span class=\"badge\" style=\"background: {}\">{} {}</span>",
        style.color,
        style.icon,
        html_escape(category)
    )
}

/// Generate an HTML report from a score report.
pub fn generate_html(report: &ScoreReport) -> String {
    let result = &report.result;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>assessquiz: {}</title>\n",
        html_escape(&report.case.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.case.title)));
    html.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        html_escape(&report.case.description)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} items selected | {}</p>\n",
        report.selected.len(),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score
    html.push_str("<section class=\"score\">\n");
    html.push_str("<h2>Score</h2>\n");
    html.push_str(&format!(
        "<div class=\"score-large\">{:.1}</div>\n<p>/ {:.0}</p>\n",
        result.score, result.max_score
    ));
    html.push_str(&generate_score_bar(result.score, result.max_score));
    html.push_str(&format!(
        "<p class=\"meta\">Base {:.1} ({} / {} weight) − must-have penalty {:.0} − extra penalty {:.0}</p>\n",
        result.breakdown.base_score,
        result.breakdown.earned_weight,
        result.breakdown.total_weight,
        result.breakdown.must_have_penalty,
        result.breakdown.extra_penalty,
    ));
    html.push_str("</section>\n");

    // Feedback cards
    html.push_str("<section class=\"feedback\">\n");
    html.push_str("<div class=\"card\">\n<h3>⚠️ Missed must-haves</h3>\n");
    if result.missing_must_haves.is_empty() {
        html.push_str("<p class=\"ok\">None</p>\n");
    } else {
        html.push_str("<ul>\n");
        for s in &result.missing_must_haves {
            let name = report
                .answer_key
                .iter()
                .find(|row| row.item_id == s.item_id)
                .map_or(s.item_id.as_str(), |row| row.item_name.as_str());
            html.push_str(&format!(
                "<li><strong>{}</strong><br><small>{}</small></li>\n",
                html_escape(name),
                html_escape(&s.rationale)
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"card\">\n<h3>🚫 Unnecessary selections</h3>\n");
    if result.extra_items.is_empty() {
        html.push_str("<p class=\"ok\">None</p>\n");
    } else {
        html.push_str("<ul>\n");
        for item in &result.extra_items {
            html.push_str(&format!(
                "<li>{} {}</li>\n",
                html_escape(&item.name),
                category_badge(&item.category)
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n</section>\n");

    // Answer key
    html.push_str("<section class=\"answer-key\">\n");
    html.push_str("<h2>Answer key</h2>\n");
    html.push_str("<table id=\"answer-key\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Item</th><th onclick=\"sortTable(1)\">Category</th><th onclick=\"sortTable(2)\">Weight</th><th>Rationale</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for row in &report.answer_key {
        let class = if row.selected { "selected" } else { "missed" };
        let must = if row.must_have {
            " <span class=\"badge must\">必須</span>"
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            html_escape(&row.item_name),
            must,
            category_badge(&row.category),
            row.priority_weight,
            html_escape(&row.rationale)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &ScoreReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_score_bar(score: f64, max_score: f64) -> String {
    let bar_height = 24;
    let max_width = 400;

    let fraction = if max_score > 0.0 {
        (score / max_score).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let width = (fraction * max_width as f64) as usize;

    let color = if fraction >= 0.8 {
        "#22c55e"
    } else if fraction >= 0.5 {
        "#eab308"
    } else {
        "#ef4444"
    };

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        max_width, bar_height
    );
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"var(--border)\" rx=\"4\"/>\n",
        max_width, bar_height
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
        width, bar_height, color
    ));
    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --hit: #e8f5e9; --miss: transparent; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --hit: #064e3b; --miss: transparent; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Hiragino Sans', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta, .description { color: #6b7280; }
.score-large { font-size: 4rem; font-weight: bold; }
.feedback { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; }
.ok { color: #16a34a; }
.badge { display: inline-block; padding: 0.1rem 0.5rem; border-radius: 999px; color: #fff; font-size: 0.8rem; }
.badge.must { background: #dc2626; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.selected { background: var(--hit); }
.missed { background: var(--miss); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('answer-key');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    return asc ? va.localeCompare(vb, undefined, { numeric: true }) : vb.localeCompare(va, undefined, { numeric: true });
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use assessquiz_core::dataset::builtin_catalog;
    use assessquiz_core::model::Selection;
    use assessquiz_core::scoring::ScoringEngine;

    fn make_test_report(selected: &[&str]) -> ScoreReport {
        let catalog = builtin_catalog();
        let selection: Selection = selected.iter().copied().collect();
        let result = ScoringEngine::default()
            .score_active(Some("case-1"), &catalog, &selection)
            .unwrap();
        ScoreReport::build(&catalog, "case-1", &selection, result)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_test_report(&["eval-4", "eval-8", "eval-1"]);
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("症例A"));
        assert!(html.contains("術後疼痛の管理"));
        assert!(html.contains("身長・体重"));
        assert!(html.contains("📏"));
        assert!(html.contains("必須"));
    }

    #[test]
    fn html_report_clean_round() {
        let report = make_test_report(&["eval-4", "eval-8", "eval-13", "eval-14"]);
        let html = generate_html(&report);
        assert!(html.contains("65.5"));
        assert_eq!(html.matches("<p class=\"ok\">None</p>").count(), 2);
    }

    #[test]
    fn html_escapes_text() {
        assert_eq!(html_escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#x27;");
    }

    #[test]
    fn score_bar_width_tracks_score() {
        assert!(generate_score_bar(50.0, 100.0).contains("width=\"200\""));
        assert!(generate_score_bar(0.0, 0.0).contains("width=\"0\""));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report(&[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
