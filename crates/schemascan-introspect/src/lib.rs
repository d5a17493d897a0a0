//! Metadata sources feeding the schemascan rule engine.

pub mod adapter;
pub mod mysql;
pub mod options;

pub use adapter::MetadataSource;
pub use mysql::{MySqlSource, introspect_mysql, introspect_mysql_with_options};
pub use options::IntrospectOptions;

pub use schemascan_core::Table;
