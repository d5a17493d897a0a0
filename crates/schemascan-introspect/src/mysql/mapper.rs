use schemascan_core::{Column, Error, Index, KeyRole, Result};

use crate::options::IntrospectOptions;

use super::queries::{RawColumn, RawIndex, RawTable};

pub fn filter_tables(raw: Vec<RawTable>, opts: &IntrospectOptions) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(raw.len());

    for table in raw {
        let name = table
            .name
            .ok_or_else(|| Error::MalformedMetadata("table entry without name".to_string()))?;
        let is_view = table
            .table_type
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case("VIEW"));

        if is_view && !opts.include_views {
            continue;
        }
        if let Some(allowed) = &opts.tables
            && !allowed.iter().any(|item| item == &name)
        {
            continue;
        }

        names.push(name);
    }

    Ok(names)
}

pub fn map_columns(table: &str, raw: Vec<RawColumn>) -> Result<Vec<Column>> {
    raw.into_iter().map(|col| map_column(table, col)).collect()
}

pub fn map_column(table: &str, raw: RawColumn) -> Result<Column> {
    let name = raw.field.ok_or_else(|| {
        Error::MalformedMetadata(format!("column without name in table: {table}"))
    })?;
    let column_type = raw
        .column_type
        .ok_or_else(|| missing_field(table, &name, "Type"))?;
    let nullable = match raw.null.as_deref() {
        Some("YES") => true,
        Some("NO") => false,
        Some(other) => {
            return Err(Error::MalformedMetadata(format!(
                "unknown null flag '{other}' for column: {table}.{name}"
            )));
        }
        None => return Err(missing_field(table, &name, "Null")),
    };
    let key_role = key_role_from_flag(raw.key.as_deref()).ok_or_else(|| {
        Error::MalformedMetadata(format!(
            "unknown key flag '{}' for column: {table}.{name}",
            raw.key.as_deref().unwrap_or_default()
        ))
    })?;

    Ok(Column {
        name,
        column_type,
        nullable,
        key_role,
        default_value: raw.default,
        is_auto_increment: raw.extra.as_deref() == Some("auto_increment"),
    })
}

pub fn map_indexes(table: &str, raw: Vec<RawIndex>) -> Result<Vec<Index>> {
    raw.into_iter()
        .map(|idx| {
            let name = idx.key_name.ok_or_else(|| {
                Error::MalformedMetadata(format!("index without name in table: {table}"))
            })?;
            // Functional index parts report no column and are rejected as well.
            let column_name = idx.column_name.ok_or_else(|| {
                Error::MalformedMetadata(format!("index without column: {table}.{name}"))
            })?;
            Ok(Index { name, column_name })
        })
        .collect()
}

fn key_role_from_flag(flag: Option<&str>) -> Option<KeyRole> {
    match flag.unwrap_or_default() {
        "" => Some(KeyRole::None),
        "PRI" => Some(KeyRole::Primary),
        "UNI" => Some(KeyRole::Unique),
        "MUL" => Some(KeyRole::Multi),
        _ => None,
    }
}

fn missing_field(table: &str, column: &str, field: &str) -> Error {
    Error::MalformedMetadata(format!("missing {field} for column: {table}.{column}"))
}
