//! Ask Pipeline Tests
//!
//! End-to-end behavior of the collaborators around the engine:
//! - Rule-based SQL generation from English questions
//! - Source fetching with the single-level fallback chain
//! - Question -> SQL -> result against a real table

use std::fs;

use csvql::engine::QueryEngine;
use csvql::generator::SqlGenerator;
use csvql::loader::{CsvParser, Table};
use csvql::source::{SourceError, SourceFetcher};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const SAMPLE_CSV: &str = "Year,Industry,Value\n\
                          2021,\"Agriculture, Forestry and Fishing\",10\n\
                          2020,Mining,2\n\
                          2019,Construction,33";

fn sample_table() -> Table {
    CsvParser::parse(SAMPLE_CSV).unwrap()
}

fn generator() -> SqlGenerator {
    SqlGenerator::new(100)
}

// =============================================================================
// Generator Rules
// =============================================================================

#[test]
fn test_plain_question_gets_default_template() {
    let sql = generator().generate("give me a quick look at this", &sample_table());
    assert_eq!(sql, "SELECT * FROM data LIMIT 100");
}

#[test]
fn test_top_n_controls_limit() {
    let sql = generator().generate("show the top 7 rows", &sample_table());
    assert_eq!(sql, "SELECT * FROM data LIMIT 7");
}

#[test]
fn test_everything_drops_limit() {
    let sql = generator().generate("show me everything in the file", &sample_table());
    assert_eq!(sql, "SELECT * FROM data");
}

#[test]
fn test_quoted_value_builds_where_clause() {
    let sql = generator().generate("rows whose industry is 'mining'", &sample_table());
    assert_eq!(sql, "SELECT * FROM data WHERE Industry = 'mining' LIMIT 100");
}

#[test]
fn test_sort_phrase_builds_order_by() {
    let sql = generator().generate("everything sorted by value, largest first", &sample_table());
    assert_eq!(sql, "SELECT * FROM data ORDER BY Value DESC");
}

// =============================================================================
// Question to Result
// =============================================================================

#[test]
fn test_question_to_rows() {
    let table = sample_table();
    let engine = QueryEngine::new();

    let sql = generator().generate("which rows have industry 'agriculture'?", &table);
    let result = engine.execute(&sql, &table).unwrap();

    assert_eq!(result.row_count, 1);
    assert_eq!(result.rows[0][0], "2021");
}

#[test]
fn test_question_to_sorted_rows() {
    let table = sample_table();
    let engine = QueryEngine::new();

    let sql = generator().generate("top 2 rows ranked by value, highest first", &table);
    let result = engine.execute(&sql, &table).unwrap();

    assert_eq!(result.row_count, 2);
    assert_eq!(result.rows[0][2], "33");
    assert_eq!(result.rows[1][2], "10");
}

/// Whatever the generator emits, the engine answers with a displayable
/// result; garbage questions cannot crash the pipeline.
#[test]
fn test_arbitrary_text_never_fails() {
    let table = sample_table();
    let engine = QueryEngine::new();

    for question in ["", "?????", "delete all my files", "' OR 1=1 --"] {
        let sql = generator().generate(question, &table);
        let result = engine.execute(&sql, &table).unwrap();
        assert_eq!(result.row_count, result.rows.len());
    }
}

// =============================================================================
// Source Fallback Chain
// =============================================================================

#[test]
fn test_primary_source_wins() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("primary.csv");
    let fallback = tmp.path().join("fallback.csv");
    fs::write(&primary, "p\n1").unwrap();
    fs::write(&fallback, "f\n2").unwrap();

    let text = SourceFetcher::new(&primary)
        .with_fallback(&fallback)
        .fetch()
        .unwrap();
    assert_eq!(text, "p\n1");
}

#[test]
fn test_fallback_fires_once_on_primary_failure() {
    let tmp = TempDir::new().unwrap();
    let fallback = tmp.path().join("fallback.csv");
    fs::write(&fallback, "f\n2").unwrap();

    let text = SourceFetcher::new(tmp.path().join("missing.csv"))
        .with_fallback(&fallback)
        .fetch()
        .unwrap();
    assert_eq!(text, "f\n2");
}

#[test]
fn test_exhausted_chain_reports_both_paths() {
    let tmp = TempDir::new().unwrap();
    let err = SourceFetcher::new(tmp.path().join("a.csv"))
        .with_fallback(tmp.path().join("b.csv"))
        .fetch()
        .unwrap_err();

    match err {
        SourceError::AllSourcesFailed {
            primary, fallback, ..
        } => {
            assert!(primary.ends_with("a.csv"));
            assert!(fallback.ends_with("b.csv"));
        }
        other => panic!("expected AllSourcesFailed, got {:?}", other),
    }
}

/// Fetched text flows straight into the loader and the engine.
#[test]
fn test_fetch_load_query_pipeline() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();

    let raw = SourceFetcher::new(&path).fetch().unwrap();
    let table = CsvParser::parse(&raw).unwrap();
    let result = QueryEngine::new()
        .execute("SELECT Industry FROM data WHERE Year = '2020'", &table)
        .unwrap();

    assert_eq!(result.rows, vec![vec!["Mining".to_string()]]);
}
