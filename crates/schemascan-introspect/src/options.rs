/// Options that control which tables are loaded.
#[derive(Debug, Clone, Default)]
pub struct IntrospectOptions {
    /// Include views alongside base tables.
    pub include_views: bool,
    /// Restrict loading to these table names.
    pub tables: Option<Vec<String>>,
}
