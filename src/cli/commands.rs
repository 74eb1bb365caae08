//! CLI command implementations
//!
//! Every command follows the same boot sequence: load config, fetch the
//! CSV source (with the single-level fallback), parse it into a table.
//! The table is built once per invocation and shared read-only from
//! there on.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::engine::{EngineOptions, QueryEngine};
use crate::generator::SqlGenerator;
use crate::loader::{CsvParser, Table};
use crate::observability::Logger;
use crate::source::SourceFetcher;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_line, read_requests, write_error, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the primary CSV source (required)
    pub csv_path: String,

    /// Alternate CSV source tried once when the primary fails
    #[serde(default)]
    pub fallback_csv_path: Option<String>,

    /// LIMIT applied by the SQL generator when a question does not ask
    /// for everything (default 100)
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Reject unknown column names instead of the forgiving fallbacks
    #[serde(default)]
    pub strict_columns: bool,
}

fn default_limit() -> usize {
    100
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.csv_path.trim().is_empty() {
            return Err(CliError::config_error("csv_path must not be empty"));
        }

        if self.default_limit == 0 {
            return Err(CliError::config_error("default_limit must be > 0"));
        }

        Ok(())
    }

    /// Build the source fetcher for this config
    pub fn fetcher(&self) -> SourceFetcher {
        let fetcher = SourceFetcher::new(&self.csv_path);
        match &self.fallback_csv_path {
            Some(path) => fetcher.with_fallback(path),
            None => fetcher,
        }
    }

    /// Engine options derived from this config
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            strict_columns: self.strict_columns,
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Ask { config, question } => ask(&config, &question),
        Command::Query { config, sql } => query(&config, sql.as_deref()),
        Command::Start { config } => start(&config),
        Command::Describe { config } => describe(&config),
    }
}

/// Fetch the CSV source and parse it into a table.
fn boot(config: &Config) -> CliResult<Table> {
    let raw = config.fetcher().fetch()?;
    let table = CsvParser::parse(&raw)?;

    Logger::info(
        "SOURCE_LOADED",
        &[
            ("columns", &table.width().to_string()),
            ("rows", &table.row_count().to_string()),
        ],
    );

    Ok(table)
}

/// Translate an English question to SQL, execute it, print the result
pub fn ask(config_path: &Path, question: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let table = boot(&config)?;

    let generator = SqlGenerator::new(config.default_limit);
    let engine = QueryEngine::with_options(config.engine_options());

    let sql = generator.generate(question, &table);
    let result = engine.execute(&sql, &table)?;

    write_response(json!({
        "question": question,
        "sql": sql,
        "result": result,
    }))?;

    Ok(())
}

/// Execute a single SQL statement and exit
pub fn query(config_path: &Path, sql: Option<&str>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let table = boot(&config)?;

    let engine = QueryEngine::with_options(config.engine_options());

    let sql = match sql {
        Some(text) => text.to_string(),
        None => read_line()?,
    };

    let result = engine.execute(&sql, &table)?;

    write_response(json!({
        "sql": sql,
        "result": result,
    }))?;

    Ok(())
}

/// Serve JSON requests from stdin until EOF
///
/// Requests are one JSON object per line:
/// `{"op": "ask" | "query", "text": "..."}`. Unknown ops are treated
/// as raw SQL. One JSON response is written per request.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let table = boot(&config)?;

    let generator = SqlGenerator::new(config.default_limit);
    let engine = QueryEngine::with_options(config.engine_options());

    for request_result in read_requests() {
        let request = match request_result {
            Ok(request) => request,
            Err(e) => {
                // I/O error reading - stop serving
                write_error(e.code_str(), e.message())?;
                break;
            }
        };

        let request_id = Uuid::new_v4();
        let op = request.get("op").and_then(|v| v.as_str()).unwrap_or("query");
        let text = request.get("text").and_then(|v| v.as_str()).unwrap_or("");

        let sql = match op {
            "ask" => generator.generate(text, &table),
            _ => text.to_string(),
        };

        match engine.execute(&sql, &table) {
            Ok(result) => {
                Logger::info(
                    "QUERY_COMPLETE",
                    &[
                        ("request_id", &request_id.to_string()),
                        ("rows", &result.row_count.to_string()),
                    ],
                );
                write_response(json!({
                    "request_id": request_id.to_string(),
                    "sql": sql,
                    "result": result,
                }))?;
            }
            Err(e) => {
                write_error(e.code().code(), e.message())?;
            }
        }
    }

    Ok(())
}

/// Print the loaded table's columns and row count
pub fn describe(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let table = boot(&config)?;

    let row_count = table.row_count();
    write_response(json!({
        "columns": table.headers,
        "row_count": row_count,
    }))?;

    Ok(())
}
