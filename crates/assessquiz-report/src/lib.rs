//! assessquiz-report: Presentation of score reports.
//!
//! Renders a [`ScoreReport`](assessquiz_core::report::ScoreReport) as a
//! self-contained HTML page and maps item categories to display styles.

pub mod html;
pub mod style;
