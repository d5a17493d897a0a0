use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::Table;

/// Validate that a table snapshot is complete enough to analyze.
///
/// This checks:
/// - table, column and index names are present
/// - every column has a declared type
/// - column names are unique within the table
pub fn validate_table(table: &Table) -> Result<()> {
    if table.name.trim().is_empty() {
        return Err(Error::MalformedMetadata("table with empty name".to_string()));
    }

    let mut columns = BTreeSet::new();
    for column in &table.columns {
        if column.name.trim().is_empty() {
            return Err(Error::MalformedMetadata(format!(
                "column with empty name in table: {}",
                table.name
            )));
        }
        if column.column_type.trim().is_empty() {
            return Err(Error::MalformedMetadata(format!(
                "column without type: {}.{}",
                table.name, column.name
            )));
        }
        if !columns.insert(column.name.as_str()) {
            return Err(Error::MalformedMetadata(format!(
                "duplicate column name: {}.{}",
                table.name, column.name
            )));
        }
    }

    for index in &table.indexes {
        if index.name.trim().is_empty() || index.column_name.trim().is_empty() {
            return Err(Error::MalformedMetadata(format!(
                "incomplete index entry in table: {}",
                table.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, Index, KeyRole};

    fn column(name: &str, column_type: &str) -> Column {
        Column {
            name: name.to_string(),
            column_type: column_type.to_string(),
            nullable: false,
            key_role: KeyRole::None,
            default_value: None,
            is_auto_increment: false,
        }
    }

    fn table(columns: Vec<Column>, indexes: Vec<Index>) -> Table {
        Table {
            name: "users".to_string(),
            columns,
            indexes,
        }
    }

    #[test]
    fn accepts_complete_table() {
        let users = table(
            vec![column("id", "int"), column("email", "varchar(255)")],
            vec![Index {
                name: "PRIMARY".to_string(),
                column_name: "id".to_string(),
            }],
        );
        assert!(validate_table(&users).is_ok());
    }

    #[test]
    fn rejects_column_without_type() {
        let users = table(vec![column("email", "  ")], Vec::new());
        let err = validate_table(&users).unwrap_err();
        assert!(matches!(err, Error::MalformedMetadata(_)));
        assert!(err.to_string().contains("users.email"));
    }

    #[test]
    fn rejects_duplicate_columns() {
        let users = table(vec![column("id", "int"), column("id", "bigint")], Vec::new());
        let err = validate_table(&users).unwrap_err();
        assert!(err.to_string().contains("duplicate column name: users.id"));
    }

    #[test]
    fn rejects_index_without_column() {
        let users = table(
            vec![column("id", "int")],
            vec![Index {
                name: "idx_expr".to_string(),
                column_name: String::new(),
            }],
        );
        assert!(matches!(
            validate_table(&users),
            Err(Error::MalformedMetadata(_))
        ));
    }

    #[test]
    fn rejects_empty_table_name() {
        let mut users = table(Vec::new(), Vec::new());
        users.name = String::new();
        assert!(validate_table(&users).is_err());
    }
}
