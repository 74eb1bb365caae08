//! CLI module for csvql
//!
//! Provides command-line interface for:
//! - ask: translate an English question to SQL and execute it
//! - query: execute a SQL SELECT statement directly
//! - start: serve JSON requests from stdin until EOF
//! - describe: print the loaded table's shape

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{ask, describe, query, run, run_command, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_line, read_request, read_requests, write_error, write_response};
