//! Draft state for the sort and filter editors (the modal dialogs).
//!
//! A draft opens pre-populated with the engine's current rule list and only
//! touches the engine when applied; cancelling a draft is just dropping it.
//! Column eligibility is fixed at open time to the columns flagged
//! sortable/filterable.

use super::rules::{FilterOperator, FilterRule, SortDirection, SortRule};

/// Editable copy of the sort rule list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortDraft {
    rows: Vec<SortRule>,
    eligible: Vec<String>,
}

impl SortDraft {
    pub(super) fn new(current: &[SortRule], eligible: Vec<String>) -> Self {
        Self {
            rows: current.to_vec(),
            eligible,
        }
    }

    pub fn rows(&self) -> &[SortRule] {
        &self.rows
    }

    pub fn eligible_columns(&self) -> &[String] {
        &self.eligible
    }

    /// Adds a rule; rejected (returns false) for ineligible columns and for
    /// columns already present — one direction per column.
    pub fn add(&mut self, column: &str, direction: SortDirection) -> bool {
        if !self.eligible.iter().any(|id| id == column) {
            return false;
        }
        if self.rows.iter().any(|rule| rule.column == column) {
            return false;
        }
        self.rows.push(SortRule::new(column, direction));
        true
    }

    pub fn set_direction(&mut self, index: usize, direction: SortDirection) {
        if let Some(rule) = self.rows.get_mut(index) {
            rule.direction = direction;
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn into_rules(self) -> Vec<SortRule> {
        self.rows
    }
}

/// Editable copy of the filter rule list. Unlike sort, several rules may
/// target the same column (range filters need two clauses).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterDraft {
    rows: Vec<FilterRule>,
    eligible: Vec<String>,
}

impl FilterDraft {
    pub(super) fn new(current: &[FilterRule], eligible: Vec<String>) -> Self {
        Self {
            rows: current.to_vec(),
            eligible,
        }
    }

    pub fn rows(&self) -> &[FilterRule] {
        &self.rows
    }

    pub fn eligible_columns(&self) -> &[String] {
        &self.eligible
    }

    pub fn add(&mut self, column: &str, operator: FilterOperator, value: &str) -> bool {
        if !self.eligible.iter().any(|id| id == column) {
            return false;
        }
        self.rows.push(FilterRule::new(column, operator, value));
        true
    }

    pub fn update(&mut self, index: usize, operator: FilterOperator, value: &str) {
        if let Some(rule) = self.rows.get_mut(index) {
            rule.operator = operator;
            rule.value = value.to_string();
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn into_rules(self) -> Vec<FilterRule> {
        self.rows
    }
}
