//! Core contracts and analysis for schemascan.
//!
//! This crate defines the schema snapshot types, the rule engine that turns a
//! table snapshot into findings, and the report builder and renderer shared by
//! the metadata sources and the CLI.

pub mod engine;
pub mod error;
pub mod finding;
pub mod render;
pub mod report;
pub mod schema;
pub mod validation;

pub use engine::{RuleEngine, TEXT_ALLOWED_COLUMNS, TableAnalyzer};
pub use error::{Error, Result};
pub use finding::{Finding, FindingKind};
pub use render::{HtmlRenderer, Renderer, render_html};
pub use report::{Report, ReportBuilder, build_report};
pub use schema::{Column, Index, KeyRole, PRIMARY_INDEX_NAME, Table};
pub use validation::validate_table;
