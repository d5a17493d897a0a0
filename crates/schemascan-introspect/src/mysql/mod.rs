use sqlx::MySqlPool;

use schemascan_core::{Result, Table};

use crate::adapter::MetadataSource;
use crate::options::IntrospectOptions;

mod mapper;
mod queries;

/// Metadata source for MySQL and MariaDB databases.
#[derive(Debug, Clone)]
pub struct MySqlSource {
    pool: MySqlPool,
}

impl MySqlSource {
    /// Create a new source using a pre-configured pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MetadataSource for MySqlSource {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    async fn load_tables(&self, opts: &IntrospectOptions) -> Result<Vec<Table>> {
        introspect(&self.pool, opts).await
    }
}

/// Introspect MySQL with default options.
pub async fn introspect_mysql(pool: &MySqlPool) -> Result<Vec<Table>> {
    introspect_mysql_with_options(pool, IntrospectOptions::default()).await
}

/// Introspect MySQL with caller-provided options.
pub async fn introspect_mysql_with_options(
    pool: &MySqlPool,
    opts: IntrospectOptions,
) -> Result<Vec<Table>> {
    introspect(pool, &opts).await
}

/// Load every selected table in the server's discovery order.
pub async fn introspect(pool: &MySqlPool, opts: &IntrospectOptions) -> Result<Vec<Table>> {
    let names = mapper::filter_tables(queries::list_tables(pool).await?, opts)?;
    tracing::debug!(event = "tables_listed", count = names.len());

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let raw_columns = queries::list_columns(pool, &name).await?;
        let columns = mapper::map_columns(&name, raw_columns)?;

        let raw_indexes = queries::list_indexes(pool, &name).await?;
        let indexes = mapper::map_indexes(&name, raw_indexes)?;

        tracing::debug!(
            event = "table_loaded",
            table = %name,
            columns = columns.len(),
            indexes = indexes.len()
        );
        tables.push(Table {
            name,
            columns,
            indexes,
        });
    }

    Ok(tables)
}
