//! assessquiz-core: Reference data, selection state, and scoring.
//!
//! This crate defines the data model, the catalog of cases and answer keys,
//! the per-round selection state, and the weighted scoring engine that the
//! rest of assessquiz builds on.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod session;
pub mod traits;
