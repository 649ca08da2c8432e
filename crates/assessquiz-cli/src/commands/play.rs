//! The `assessquiz play` command.
//!
//! A line-oriented round: each input line is one command driving a
//! `QuizSession`.

use std::io::{BufRead, Write};

use anyhow::Result;

use assessquiz_core::catalog::Catalog;
use assessquiz_core::report::ScoreReport;
use assessquiz_core::scoring::ScoringEngine;
use assessquiz_core::session::{Phase, QuizSession};
use assessquiz_core::traits::ReferenceData;

use super::score::format_text;
use super::CatalogSource;

const HELP: &str = "\
Commands:
  case ID     start a case (clears the selection)
  toggle ID   select or deselect an item
  submit      freeze the selection and show the score
  reset       clear the selection and start over
  show        show the current case and selection
  help        show this help
  quit        leave";

pub fn execute(source: &CatalogSource, case_id: Option<String>) -> Result<()> {
    let (config, catalog) = source.load()?;
    if let Some(id) = &case_id {
        catalog.require_case(id)?;
    }

    let engine = ScoringEngine::new(config.scoring);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(
        &catalog,
        &engine,
        case_id,
        stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Drive one session from `input` until it ends or `quit` is read.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    engine: &ScoringEngine,
    case_id: Option<String>,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut session = QuizSession::new();

    match case_id {
        Some(id) => {
            session.select_case(id);
            show(catalog, &session, out)?;
        }
        None => {
            writeln!(out, "Cases:")?;
            for case in catalog.cases() {
                writeln!(out, "  {}  {}", case.id, case.title)?;
            }
            writeln!(out, "Type `case ID` to start, `help` for commands.")?;
        }
    }

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match (command, arg) {
            ("case", Some(id)) => match catalog.require_case(id) {
                Ok(_) => {
                    session.select_case(id);
                    show(catalog, &session, out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            ("toggle", Some(id)) => {
                if session.phase() == Phase::NoCase {
                    writeln!(out, "Pick a case first.")?;
                    continue;
                }
                let item = match catalog.require_item(id) {
                    Ok(item) => item,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        continue;
                    }
                };
                if !session.toggle_item(id) {
                    writeln!(out, "Selection is frozen; `reset` to change it.")?;
                } else if session.selection().contains(id) {
                    writeln!(out, "+ {}", item.name)?;
                } else {
                    writeln!(out, "- {}", item.name)?;
                }
            }
            ("submit", None) => {
                session.submit();
                match (session.active_case(), session.result(catalog, engine)) {
                    (Some(case_id), Some(result)) => {
                        let report =
                            ScoreReport::build(catalog, case_id, session.selection(), result);
                        write!(out, "{}", format_text(&report))?;
                    }
                    _ => writeln!(out, "Pick a case first.")?,
                }
            }
            ("reset", None) => {
                session.reset();
                writeln!(out, "Selection cleared.")?;
            }
            ("show", None) => show(catalog, &session, out)?,
            ("help", None) => writeln!(out, "{HELP}")?,
            ("quit" | "exit", None) => break,
            _ => writeln!(out, "Unknown command: {line}. Type `help` for commands.")?,
        }
    }

    Ok(())
}

fn show<W: Write>(catalog: &Catalog, session: &QuizSession, out: &mut W) -> Result<()> {
    let Some(case_id) = session.active_case() else {
        writeln!(out, "No case selected.")?;
        return Ok(());
    };

    if let Some(case) = catalog.find_case(case_id) {
        writeln!(out, "{}", case.title)?;
        writeln!(out, "{}", case.description)?;
    }

    let names: Vec<&str> = session
        .selection()
        .iter()
        .map(|id| catalog.find_item(id).map_or(id, |i| i.name.as_str()))
        .collect();
    if names.is_empty() {
        writeln!(out, "Selected: (none)")?;
    } else {
        writeln!(out, "Selected: {}", names.join(", "))?;
    }
    if session.is_submitted() {
        writeln!(out, "(submitted)")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessquiz_core::dataset::builtin_catalog;

    fn play(case_id: Option<&str>, script: &str) -> String {
        let catalog = builtin_catalog();
        let engine = ScoringEngine::default();
        let mut out = Vec::new();
        run(
            &catalog,
            &engine,
            case_id.map(String::from),
            script.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn must_haves_round() {
        let out = play(
            Some("case-1"),
            "toggle eval-4\ntoggle eval-8\ntoggle eval-13\ntoggle eval-14\nsubmit\n",
        );
        assert!(out.contains("Score: 65.5 / 100"));
    }

    #[test]
    fn toggle_twice_deselects() {
        let out = play(Some("case-1"), "toggle eval-4\ntoggle eval-4\nsubmit\n");
        assert!(out.contains("- ROM（股関節）"));
        assert!(out.contains("Score: 0.0 / 100"));
    }

    #[test]
    fn frozen_after_submit() {
        let out = play(Some("case-1"), "submit\ntoggle eval-4\nreset\ntoggle eval-4\n");
        assert!(out.contains("Selection is frozen"));
        assert!(out.contains("+ ROM（股関節）"));
    }

    #[test]
    fn submit_without_case() {
        let out = play(None, "submit\ntoggle eval-4\n");
        assert!(out.contains("症例A"));
        assert_eq!(out.matches("Pick a case first.").count(), 2);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let out = play(None, "case case-9\ncase case-2\ntoggle eval-99\nshow\n");
        assert!(out.contains("unknown case: case-9"));
        assert!(out.contains("unknown assessment item: eval-99"));
        assert!(out.contains("Selected: (none)"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = play(Some("case-1"), "quit\nsubmit\n");
        assert!(!out.contains("Score:"));
    }

    #[test]
    fn switching_case_clears_selection() {
        let out = play(Some("case-1"), "toggle eval-4\ncase case-2\nsubmit\n");
        assert!(out.contains("症例B"));
        assert!(out.contains("Score: 0.0 / 100"));
    }
}
