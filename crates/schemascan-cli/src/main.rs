mod config;
mod logging;

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use config::ScanConfig;
use logging::init_logging;
use schemascan_core::{Error as CoreError, HtmlRenderer, Renderer, ReportBuilder, RuleEngine};
use schemascan_introspect::{IntrospectOptions, MetadataSource, MySqlSource};
use sqlx::mysql::MySqlPoolOptions;
use thiserror::Error;
use uuid::Uuid;

const COMPLETION_MESSAGE: &str = "Database schema analysis completed.";

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported engine: {0}")]
    UnsupportedEngine(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "schemascan", version, about = "Schema improvement scanner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the database schema for optimizations.
    Scan,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match init_logging() {
        Ok(()) => match cli.command {
            Command::Scan => run_scan().await,
        },
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run_scan() -> Result<(), CliError> {
    let scan_id = Uuid::new_v4();
    let config = ScanConfig::from_env()?;

    tracing::info!(event = "scan_started", scan_id = %scan_id, engine = config.engine);
    let timer = Instant::now();

    let result = scan(&config).await;
    match &result {
        Ok(()) => tracing::info!(
            event = "scan_finished",
            scan_id = %scan_id,
            status = "success",
            duration_ms = timer.elapsed().as_millis()
        ),
        Err(err) => tracing::error!(event = "scan_failed", scan_id = %scan_id, error = %err),
    }
    result
}

async fn scan(config: &ScanConfig) -> Result<(), CliError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
        .map_err(connect_error)?;

    let source = MySqlSource::new(pool);
    let tables = source.load_tables(&IntrospectOptions::default()).await?;
    tracing::info!(event = "tables_discovered", engine = source.engine(), count = tables.len());

    let engine = RuleEngine::new();
    let mut builder = ReportBuilder::new();
    for table in &tables {
        let findings = builder.add_table(&engine, table)?;
        tracing::info!(event = "table_analyzed", table = %table.name, findings = findings);
    }
    let report = builder.finish();

    for (table, findings) in report.iter() {
        for finding in findings {
            tracing::debug!(
                event = "finding",
                table = table,
                kind = finding.kind.as_str(),
                column = finding.column.as_deref().unwrap_or_default()
            );
        }
    }
    tracing::info!(
        event = "report_built",
        tables = report.table_count(),
        findings = report.total_findings()
    );

    println!("{COMPLETION_MESSAGE}");
    println!("{}", HtmlRenderer.render(&report));

    Ok(())
}

fn connect_error(err: sqlx::Error) -> CliError {
    CliError::Core(CoreError::MetadataFetch(format!("connecting to database: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_are_metadata_fetch_errors() {
        let err = connect_error(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, CliError::Core(CoreError::MetadataFetch(_))));
        assert!(
            err.to_string()
                .starts_with("core error: metadata fetch error: connecting to database:")
        );
    }
}
