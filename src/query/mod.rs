//! The wire format for filter and sort state.
//!
//! Filter rules flatten to a single expression compatible with the backend
//! query grammar: membership operators take the function form
//! (`contains(name,'foo')`), comparisons the infix form (`age ge '21'`), and
//! clauses join with `" and "` — implicit AND only, no OR, no grouping.
//! Parsing accepts the same grammar back, so filter state survives a round
//! trip through a URL or a persisted view.

mod parser;

use itertools::Itertools;
use tracing::debug;

use crate::error::QueryParseError;
use crate::table::{FilterRule, SortRule};

/// Flattens filter rules into one query expression.
pub fn to_query(rules: &[FilterRule]) -> String {
    rules.iter().map(clause).join(" and ")
}

/// Flattens sort rules into their query form: `"name desc,age asc"`.
pub fn sort_to_query(rules: &[SortRule]) -> String {
    rules
        .iter()
        .map(|rule| format!("{} {}", rule.column, rule.direction.token()))
        .join(",")
}

/// Parses a query expression leniently: segments matching neither grammar
/// form are dropped and the rest still parse.
pub fn parse(input: &str) -> Vec<FilterRule> {
    split_segments(input)
        .into_iter()
        .filter_map(|segment| match parser::parse_segment(segment) {
            Ok(rule) => Some(rule),
            Err(error) => {
                debug!(%segment, %error, "dropping malformed filter segment");
                None
            }
        })
        .collect()
}

/// Parses a query expression, failing on the first malformed segment.
pub fn parse_strict(input: &str) -> Result<Vec<FilterRule>, QueryParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_segments(input)
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            if segment.trim().is_empty() {
                Err(QueryParseError::EmptySegment { index })
            } else {
                parser::parse_segment(segment)
            }
        })
        .collect()
}

fn clause(rule: &FilterRule) -> String {
    let value = encode_value(&rule.value);
    if rule.operator.is_functional() {
        format!("{}({},'{}')", rule.operator.token(), rule.column, value)
    } else {
        format!("{} {} '{}'", rule.column, rule.operator.token(), value)
    }
}

/// Splits on the literal `" and "` joiner, case-insensitively. A quoted
/// value containing the joiner text cannot survive this; that is a known
/// limit of the grammar, not of this parser.
fn split_segments(input: &str) -> Vec<&str> {
    let lower = input.to_ascii_lowercase();
    let mut segments = Vec::new();
    let mut start = 0;
    while let Some(found) = lower[start..].find(" and ") {
        let at = start + found;
        segments.push(&input[start..at]);
        start = at + " and ".len();
    }
    segments.push(&input[start..]);
    segments
}

/// Quotes cannot appear inside a quoted value, so they travel
/// percent-encoded; `%` itself is escaped first to keep decoding
/// unambiguous.
pub(crate) fn encode_value(value: &str) -> String {
    value.replace('%', "%25").replace('\'', "%27")
}

pub(crate) fn decode_value(value: &str) -> String {
    value.replace("%27", "'").replace("%25", "%")
}
