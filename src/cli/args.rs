//! CLI argument definitions using clap
//!
//! Commands:
//! - csvql ask --config <path> <question>
//! - csvql query --config <path> [sql]
//! - csvql start --config <path>
//! - csvql describe --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csvql - ask English questions of a CSV file
#[derive(Parser, Debug)]
#[command(name = "csvql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate an English question to SQL and execute it
    Ask {
        /// Path to configuration file
        #[arg(long, default_value = "./csvql.json")]
        config: PathBuf,

        /// The question to answer
        question: String,
    },

    /// Execute a SQL SELECT statement directly
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./csvql.json")]
        config: PathBuf,

        /// SQL text; read from stdin when omitted
        sql: Option<String>,
    },

    /// Serve JSON requests from stdin until EOF
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./csvql.json")]
        config: PathBuf,
    },

    /// Print the loaded table's columns and row count
    Describe {
        /// Path to configuration file
        #[arg(long, default_value = "./csvql.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
