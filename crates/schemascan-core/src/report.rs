use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::engine::TableAnalyzer;
use crate::error::{Error, Result};
use crate::finding::Finding;
use crate::schema::Table;
use crate::validation::validate_table;

/// Findings per table, in table discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub tables: IndexMap<String, Vec<Finding>>,
}

impl Report {
    /// Findings for one table, if the table was analyzed.
    pub fn findings(&self, table: &str) -> Option<&[Finding]> {
        self.tables.get(table).map(Vec::as_slice)
    }

    /// Iterate tables and their findings in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.tables
            .iter()
            .map(|(name, findings)| (name.as_str(), findings.as_slice()))
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn total_findings(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    /// Returns true when no table produced a finding.
    pub fn is_clean(&self) -> bool {
        self.tables.values().all(Vec::is_empty)
    }
}

/// Incremental report assembly.
///
/// Tables evaluated elsewhere (for example on separate threads) can be merged
/// with [`ReportBuilder::add_findings`]; each table name is accepted once.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    tables: IndexMap<String, Vec<Finding>>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and evaluate a table, returning the number of findings stored.
    pub fn add_table<A>(&mut self, analyzer: &A, table: &Table) -> Result<usize>
    where
        A: TableAnalyzer + ?Sized,
    {
        validate_table(table)?;
        if self.tables.contains_key(&table.name) {
            return Err(duplicate_table(&table.name));
        }

        let findings = analyzer.evaluate(table);
        let count = findings.len();
        self.add_findings(table.name.clone(), findings)?;
        Ok(count)
    }

    /// Store findings produced for a table.
    pub fn add_findings(
        &mut self,
        table_name: impl Into<String>,
        findings: Vec<Finding>,
    ) -> Result<()> {
        match self.tables.entry(table_name.into()) {
            Entry::Occupied(entry) => Err(duplicate_table(entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(findings);
                Ok(())
            }
        }
    }

    pub fn finish(self) -> Report {
        Report {
            tables: self.tables,
        }
    }
}

/// Analyze every table in order and fold the findings into a report.
pub fn build_report<A>(tables: &[Table], analyzer: &A) -> Result<Report>
where
    A: TableAnalyzer + ?Sized,
{
    let mut builder = ReportBuilder::new();
    for table in tables {
        builder.add_table(analyzer, table)?;
    }
    Ok(builder.finish())
}

fn duplicate_table(name: &str) -> Error {
    Error::MalformedMetadata(format!("duplicate table name: {name}"))
}
