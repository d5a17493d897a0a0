use async_trait::async_trait;

use schemascan_core::{Result, Table};

use crate::options::IntrospectOptions;

/// Trait implemented by database adapters that can supply table metadata.
#[async_trait]
pub trait MetadataSource {
    /// Returns the engine identifier (e.g. `mysql`).
    fn engine(&self) -> &'static str;

    /// Load every selected table with its columns and indexes, in discovery order.
    async fn load_tables(&self, opts: &IntrospectOptions) -> Result<Vec<Table>>;
}
