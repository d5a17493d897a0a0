use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use schemascan_core::{Error, Result};

pub struct RawTable {
    pub name: Option<String>,
    pub table_type: Option<String>,
}

pub async fn list_tables(pool: &MySqlPool) -> Result<Vec<RawTable>> {
    let rows = sqlx::query("SHOW FULL TABLES")
        .fetch_all(pool)
        .await
        .map_err(|err| map_sqlx_error("SHOW FULL TABLES", err))?;

    rows.iter()
        .map(|row| {
            Ok(RawTable {
                name: text(row, 0usize, "SHOW FULL TABLES")?,
                table_type: text(row, 1usize, "SHOW FULL TABLES")?,
            })
        })
        .collect()
}

pub struct RawColumn {
    pub field: Option<String>,
    pub column_type: Option<String>,
    pub null: Option<String>,
    pub key: Option<String>,
    pub default: Option<String>,
    pub extra: Option<String>,
}

pub async fn list_columns(pool: &MySqlPool, table: &str) -> Result<Vec<RawColumn>> {
    let sql = format!("SHOW COLUMNS FROM {}", quote_identifier(table));
    let rows = sqlx::query(&sql)
        .fetch_all(pool)
        .await
        .map_err(|err| map_sqlx_error(&sql, err))?;

    rows.iter()
        .map(|row| {
            Ok(RawColumn {
                field: text(row, "Field", &sql)?,
                column_type: text(row, "Type", &sql)?,
                null: text(row, "Null", &sql)?,
                key: text(row, "Key", &sql)?,
                default: text(row, "Default", &sql)?,
                extra: text(row, "Extra", &sql)?,
            })
        })
        .collect()
}

pub struct RawIndex {
    pub key_name: Option<String>,
    pub column_name: Option<String>,
}

pub async fn list_indexes(pool: &MySqlPool, table: &str) -> Result<Vec<RawIndex>> {
    let sql = format!("SHOW INDEXES FROM {}", quote_identifier(table));
    let rows = sqlx::query(&sql)
        .fetch_all(pool)
        .await
        .map_err(|err| map_sqlx_error(&sql, err))?;

    rows.iter()
        .map(|row| {
            Ok(RawIndex {
                key_name: text(row, "Key_name", &sql)?,
                column_name: text(row, "Column_name", &sql)?,
            })
        })
        .collect()
}

pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

// SHOW results report binary collations on some servers, so decode without the
// type compatibility check and let UTF-8 validation catch real problems.
fn text<I>(row: &MySqlRow, index: I, sql: &str) -> Result<Option<String>>
where
    I: sqlx::ColumnIndex<MySqlRow>,
{
    row.try_get_unchecked::<Option<String>, _>(index)
        .map_err(|err| map_sqlx_error(sql, err))
}

fn map_sqlx_error(sql: &str, err: sqlx::Error) -> Error {
    match err {
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnDecode { .. } => {
            Error::MalformedMetadata(format!("{sql}: {err}"))
        }
        other => Error::MetadataFetch(format!("{sql}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers_with_backticks() {
        assert_eq!(quote_identifier("users"), "`users`");
        assert_eq!(quote_identifier("odd`name"), "`odd``name`");
    }

    #[test]
    fn missing_result_columns_are_malformed_metadata() {
        let err = map_sqlx_error(
            "SHOW COLUMNS FROM `users`",
            sqlx::Error::ColumnNotFound("Extra".to_string()),
        );
        assert!(matches!(err, Error::MalformedMetadata(_)));
    }

    #[test]
    fn connection_failures_are_fetch_errors() {
        let err = map_sqlx_error("SHOW FULL TABLES", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, Error::MetadataFetch(_)));
        assert!(err.to_string().starts_with("metadata fetch error: SHOW FULL TABLES"));
    }
}
