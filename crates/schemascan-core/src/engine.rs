//! Rule engine mapping one table snapshot to findings.
//!
//! Column rules run per column in declaration order, each rule in a fixed
//! order, followed by the table-level primary key rule. Rules are
//! independent: every rule that matches emits its own finding.

use crate::finding::{Finding, FindingKind};
use crate::schema::{Column, Table};

/// Column names allowed to keep a TEXT-family type.
pub const TEXT_ALLOWED_COLUMNS: &[&str] = &["description", "content"];

/// Anything that can turn a table into an ordered list of findings.
pub trait TableAnalyzer {
    fn evaluate(&self, table: &Table) -> Vec<Finding>;
}

/// The built-in schema rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TableAnalyzer for RuleEngine {
    fn evaluate(&self, table: &Table) -> Vec<Finding> {
        let mut findings = Vec::new();

        for column in &table.columns {
            check_missing_index(table, column, &mut findings);
            check_unnecessary_text(table, column, &mut findings);
            check_nullable_without_default(table, column, &mut findings);
            check_missing_default_value(table, column, &mut findings);
        }

        check_missing_primary_key(table, &mut findings);

        findings
    }
}

fn check_missing_index(table: &Table, column: &Column, findings: &mut Vec<Finding>) {
    if !column.name.contains("id") || table.has_index_on(&column.name) {
        return;
    }

    let name = &column.name;
    findings.push(column_finding(
        FindingKind::MissingIndex,
        table,
        column,
        format!("Column '{name}' lacks an index."),
        format!("Add an index to '{name}' to improve query performance."),
        format!("ALTER TABLE {} ADD INDEX idx_{name} ({name});", table.name),
    ));
}

fn check_unnecessary_text(table: &Table, column: &Column, findings: &mut Vec<Finding>) {
    if !column.column_type.contains("text") || is_text_necessary(&column.name) {
        return;
    }

    findings.push(column_finding(
        FindingKind::UnnecessaryText,
        table,
        column,
        format!("Column '{}' uses TEXT type unnecessarily.", column.name),
        "Consider using VARCHAR(255) for shorter strings.".to_string(),
        format!(
            "ALTER TABLE {} MODIFY {} VARCHAR(255);",
            table.name, column.name
        ),
    ));
}

fn check_nullable_without_default(table: &Table, column: &Column, findings: &mut Vec<Finding>) {
    if !nullable_without_default(column) {
        return;
    }

    findings.push(column_finding(
        FindingKind::NullableWithoutDefault,
        table,
        column,
        nullable_issue(column),
        "Consider adding a NOT NULL constraint or a default value.".to_string(),
        format!(
            "ALTER TABLE {} MODIFY {} {} NOT NULL;",
            table.name, column.name, column.column_type
        ),
    ));
}

// Overlaps with the NOT NULL rule on purpose: both remediations are offered.
fn check_missing_default_value(table: &Table, column: &Column, findings: &mut Vec<Finding>) {
    if !nullable_without_default(column) || column.is_auto_increment {
        return;
    }

    findings.push(column_finding(
        FindingKind::MissingDefaultValue,
        table,
        column,
        nullable_issue(column),
        "Consider adding a default value.".to_string(),
        format!(
            "ALTER TABLE {} MODIFY {} {} DEFAULT 'default_value';",
            table.name, column.name, column.column_type
        ),
    ));
}

fn check_missing_primary_key(table: &Table, findings: &mut Vec<Finding>) {
    if table.has_primary_key() {
        return;
    }

    // `column_name` is a literal placeholder, not a resolved column.
    findings.push(Finding {
        kind: FindingKind::MissingPrimaryKey,
        table_name: table.name.clone(),
        column: None,
        issue: format!("Table '{}' does not have a primary key.", table.name),
        suggestion: "Consider adding a primary key.".to_string(),
        remediation_sql: format!("ALTER TABLE {} ADD PRIMARY KEY (column_name);", table.name),
    });
}

fn is_text_necessary(column: &str) -> bool {
    TEXT_ALLOWED_COLUMNS.contains(&column)
}

fn nullable_without_default(column: &Column) -> bool {
    column.nullable && column.default_value.is_none()
}

fn nullable_issue(column: &Column) -> String {
    format!("Column '{}' allows NULL values without a default.", column.name)
}

fn column_finding(
    kind: FindingKind,
    table: &Table,
    column: &Column,
    issue: String,
    suggestion: String,
    remediation_sql: String,
) -> Finding {
    Finding {
        kind,
        table_name: table.name.clone(),
        column: Some(column.name.clone()),
        issue,
        suggestion,
        remediation_sql,
    }
}
