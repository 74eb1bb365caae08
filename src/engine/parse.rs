//! Query parsing
//!
//! The single stage that turns loose SELECT text into a `ParsedQuery`.
//! All "first match wins" decisions live here; the executor only walks
//! the tagged structure. Clause detection runs over a lower-cased copy
//! of the query, which also lower-cases literals. Cell comparisons fold
//! case anyway, so nothing observable is lost.

use regex::Regex;

/// Requested columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `*`: all columns in table order
    All,
    /// Comma-separated column tokens, in request order
    Columns(Vec<String>),
}

/// Comparison operator in a WHERE clause.
///
/// Both variants evaluate as a case-insensitive substring test. `Eq`
/// deliberately deviates from SQL equality; the original product
/// favored forgiving matches over strict semantics and that behavior
/// is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateOp {
    Eq,
    Like,
}

/// The single WHERE comparison. Compound predicates are not supported;
/// text after the first recognized operator is absorbed into the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub op: PredicateOp,
    /// Lower-cased, quote-stripped (`Eq`) or `%`-stripped (`Like`)
    pub value: String,
}

/// Sort direction, ascending unless `desc` was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// ORDER BY specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Decomposition of one query string. Internal to the engine; callers
/// only ever see the `ResultSet` built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub projection: Projection,
    pub predicate: Option<Predicate>,
    pub sort: Option<SortKey>,
    pub limit: Option<usize>,
}

/// Parses query text into `ParsedQuery` structures.
///
/// Regexes are compiled once here, not per query.
pub struct QueryParser {
    like_re: Regex,
    order_re: Regex,
    limit_re: Regex,
}

impl QueryParser {
    pub fn new() -> Self {
        Self {
            like_re: Regex::new(r"^(\S+)\s+like\s+'([^']*)'").expect("valid like pattern"),
            order_re: Regex::new(r"order\s+by\s+(\S+)(?:\s+(asc|desc))?").expect("valid order pattern"),
            limit_re: Regex::new(r"limit\s+(\d+)").expect("valid limit pattern"),
        }
    }

    /// Parses query text. Returns `None` when the text contains no
    /// `select` keyword; that is the engine's reject path, not an error.
    pub fn parse(&self, query_text: &str) -> Option<ParsedQuery> {
        let lower = query_text.to_lowercase();
        let select_pos = lower.find("select")?;

        Some(ParsedQuery {
            projection: Self::parse_projection(&lower, select_pos),
            predicate: self.parse_predicate(&lower),
            sort: self.parse_sort(&lower),
            limit: self.parse_limit(&lower),
        })
    }

    /// Text between `select` and `from` (or end of string when `from`
    /// is absent). `*` selects everything; otherwise tokens are split
    /// on commas and trimmed. Unresolvable tokens are kept: resolution
    /// policy belongs to the executor.
    fn parse_projection(lower: &str, select_pos: usize) -> Projection {
        let after_select = select_pos + "select".len();
        let end = lower[after_select..]
            .find("from")
            .map(|p| p + after_select)
            .unwrap_or(lower.len());

        let text = lower[after_select..end].trim();
        if text == "*" {
            return Projection::All;
        }

        Projection::Columns(text.split(',').map(|t| t.trim().to_string()).collect())
    }

    /// Text between `where` and the next `order by`/`limit`/end. The
    /// first `=` wins; otherwise a `col like '<pattern>'` shape is
    /// tried; anything else means the clause filters nothing.
    fn parse_predicate(&self, lower: &str) -> Option<Predicate> {
        let where_pos = lower.find("where")?;
        let clause_start = where_pos + "where".len();

        let clause_end = ["order by", "limit"]
            .iter()
            .filter_map(|kw| lower[clause_start..].find(kw).map(|p| p + clause_start))
            .min()
            .unwrap_or(lower.len());

        let clause = lower[clause_start..clause_end].trim();

        if let Some(eq_pos) = clause.find('=') {
            let column = clause[..eq_pos].trim().to_string();
            let value: String = clause[eq_pos + 1..]
                .trim()
                .chars()
                .filter(|c| *c != '\'' && *c != '"')
                .collect();
            return Some(Predicate {
                column,
                op: PredicateOp::Eq,
                value,
            });
        }

        if clause.contains("like") {
            if let Some(caps) = self.like_re.captures(clause) {
                return Some(Predicate {
                    column: caps[1].to_string(),
                    op: PredicateOp::Like,
                    value: caps[2].replace('%', ""),
                });
            }
        }

        None
    }

    fn parse_sort(&self, lower: &str) -> Option<SortKey> {
        let caps = self.order_re.captures(lower)?;
        let direction = match caps.get(2).map(|m| m.as_str()) {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Some(SortKey {
            column: caps[1].to_string(),
            direction,
        })
    }

    fn parse_limit(&self, lower: &str) -> Option<usize> {
        let caps = self.limit_re.captures(lower)?;
        caps[1].parse().ok()
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}
