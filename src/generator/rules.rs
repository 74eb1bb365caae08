//! Template rules for question translation
//!
//! Rules are checked in a fixed order and compose into one statement:
//! a WHERE clause when the question names a column and a value, an
//! ORDER BY clause when it asks for sorting, and a LIMIT unless the
//! question asks for everything.

use regex::Regex;

use crate::loader::Table;

/// Rule-based English-to-SQL translator.
pub struct SqlGenerator {
    default_limit: usize,
    limit_re: Regex,
    quoted_re: Regex,
    all_re: Regex,
    desc_re: Regex,
    sort_re: Regex,
}

impl SqlGenerator {
    /// Creates a generator. `default_limit` caps results when the
    /// question does not ask for everything.
    pub fn new(default_limit: usize) -> Self {
        Self {
            default_limit,
            limit_re: Regex::new(r"\b(?:top|first|limit)\s+(\d+)\b").expect("valid limit pattern"),
            quoted_re: Regex::new(r#"'([^']+)'|"([^"]+)""#).expect("valid quote pattern"),
            all_re: Regex::new(r"\b(?:all|every|everything|entire)\b").expect("valid all pattern"),
            desc_re: Regex::new(r"\b(?:desc|descending|highest|largest|biggest|most)\b")
                .expect("valid desc pattern"),
            sort_re: Regex::new(r"\b(?:sort|sorted|order|ordered|rank|ranked)\s+by\b")
                .expect("valid sort pattern"),
        }
    }

    /// Generates a SELECT statement for the question.
    pub fn generate(&self, question: &str, table: &Table) -> String {
        let lower = question.to_lowercase();

        let mut sql = String::from("SELECT * FROM data");

        if let Some(clause) = self.where_clause(&lower, table) {
            sql.push_str(&clause);
        }
        if let Some(clause) = self.order_clause(&lower, table) {
            sql.push_str(&clause);
        }
        match self.requested_limit(&lower) {
            Some(n) => sql.push_str(&format!(" LIMIT {}", n)),
            None if self.all_re.is_match(&lower) => {}
            None => sql.push_str(&format!(" LIMIT {}", self.default_limit)),
        }

        sql
    }

    /// First header whose name appears in the question.
    fn mentioned_header<'a>(&self, lower: &str, table: &'a Table) -> Option<&'a str> {
        table
            .headers
            .iter()
            .map(String::as_str)
            .find(|h| !h.is_empty() && lower.contains(&h.to_lowercase()))
    }

    /// `WHERE <header> = '<value>'` when the question names a header
    /// and carries a quoted or `is`/`equals`-marked value.
    fn where_clause(&self, lower: &str, table: &Table) -> Option<String> {
        let column = self.mentioned_header(lower, table)?;
        let value = self.filter_value(lower)?;
        Some(format!(" WHERE {} = '{}'", column, value))
    }

    /// The filter literal: a quoted run wins, else the word following
    /// an `is` / `equals` / `contains` marker.
    fn filter_value(&self, lower: &str) -> Option<String> {
        if let Some(caps) = self.quoted_re.captures(lower) {
            let quoted = caps.get(1).or_else(|| caps.get(2));
            if let Some(m) = quoted {
                return Some(m.as_str().to_string());
            }
        }

        for marker in [" is ", " equals ", " contains "] {
            if let Some(pos) = lower.find(marker) {
                let tail = lower[pos + marker.len()..].trim();
                if let Some(word) = tail.split_whitespace().next() {
                    let word = word.trim_matches(|c: char| !c.is_alphanumeric());
                    if !word.is_empty() {
                        return Some(word.to_string());
                    }
                }
            }
        }

        None
    }

    /// `ORDER BY <header> [DESC]` when the question asks for sorting.
    /// The header mentioned after the sort phrase wins; any mentioned
    /// header is the fallback.
    fn order_clause(&self, lower: &str, table: &Table) -> Option<String> {
        let phrase = self.sort_re.find(lower)?;
        let tail = &lower[phrase.end()..];

        let column = table
            .headers
            .iter()
            .map(String::as_str)
            .find(|h| !h.is_empty() && tail.contains(&h.to_lowercase()))
            .or_else(|| self.mentioned_header(lower, table))?;

        let direction = if self.desc_re.is_match(lower) { " DESC" } else { "" };
        Some(format!(" ORDER BY {}{}", column, direction))
    }

    /// Explicit row count: "top 5", "first 10", "limit 20".
    fn requested_limit(&self, lower: &str) -> Option<usize> {
        let caps = self.limit_re.captures(lower)?;
        caps[1].parse().ok()
    }
}
