//! Optional pure client-side rule execution for tables that never leave the
//! browser session: apply the same rule model locally instead of echoing it
//! to a backend. The engine itself never calls these.

use std::cmp::Ordering;

use super::column::RowData;
use super::rules::{FilterOperator, FilterRule, SortDirection, SortRule};
use crate::value::Value;

/// Keeps the rows every rule matches (implicit AND across rules).
pub fn filter_rows<'a, T: RowData>(rows: &'a [T], rules: &[FilterRule]) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| rules.iter().all(|rule| rule_matches(*row, rule)))
        .collect()
}

/// Stable multi-key sort; the first rule is the primary key, later rules
/// break ties in order.
pub fn sort_rows<T: RowData>(rows: &mut [T], rules: &[SortRule]) {
    rows.sort_by(|a, b| {
        for rule in rules {
            let ordering = a.cell(&rule.column).compare(&b.cell(&rule.column));
            let ordering = match rule.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

fn rule_matches<T: RowData>(row: &T, rule: &FilterRule) -> bool {
    let cell = row.cell(&rule.column);
    match rule.operator {
        FilterOperator::Contains => haystack(&cell).contains(&needle(rule)),
        FilterOperator::StartsWith => haystack(&cell).starts_with(&needle(rule)),
        FilterOperator::EndsWith => haystack(&cell).ends_with(&needle(rule)),
        FilterOperator::Eq => compare(&cell, &rule.value) == Ordering::Equal,
        FilterOperator::Ne => compare(&cell, &rule.value) != Ordering::Equal,
        FilterOperator::Gt => compare(&cell, &rule.value) == Ordering::Greater,
        FilterOperator::Lt => compare(&cell, &rule.value) == Ordering::Less,
        FilterOperator::Ge => compare(&cell, &rule.value) != Ordering::Less,
        FilterOperator::Le => compare(&cell, &rule.value) != Ordering::Greater,
    }
}

fn haystack(cell: &Value) -> String {
    cell.to_string().to_lowercase()
}

fn needle(rule: &FilterRule) -> String {
    rule.value.to_lowercase()
}

/// Numeric comparison when both the cell and the rule value parse as
/// numbers, case-insensitive text comparison otherwise.
fn compare(cell: &Value, rule_value: &str) -> Ordering {
    if let (Value::Number(a), Ok(b)) = (cell, rule_value.parse::<f64>()) {
        return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    }
    cell.to_string()
        .to_lowercase()
        .cmp(&rule_value.to_lowercase())
}
