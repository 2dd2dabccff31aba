//! The table render model: one host-agnostic snapshot per call, mirroring
//! the action bar / header / body / footer / pagination strip of the
//! original console tables.

use super::column::{Align, RowData};
use super::pagination::PaginationView;
use super::rules::SortDirection;
use super::TableEngine;
use crate::query;

/// The whole table, as the host should paint it right now. An error banner
/// wins over the loading state; both suppress the content entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Error(String),
    Loading,
    Ready(TableContent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableContent {
    pub action_bar: ActionBar,
    pub header: Vec<HeaderCell>,
    pub rows: Vec<BodyRow>,
    pub footer: Footer,
    pub pagination: Option<PaginationView>,
}

/// The strip above the table: active rule chips plus affordance flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBar {
    pub sort_chips: Vec<String>,
    pub filter_chips: Vec<String>,
    pub search_terms: Vec<String>,
    pub can_sort: bool,
    pub can_filter: bool,
    pub can_search: bool,
    /// Whether a refresh target is wired up at all.
    pub can_refresh: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column: String,
    pub caption: String,
    pub width: Option<u32>,
    pub align: Align,
    pub sortable: bool,
    /// Set when a sort rule currently targets this column.
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub cells: Vec<BodyCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub column: String,
    pub text: String,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub row_count: usize,
    pub label: String,
}

impl<T: RowData> TableEngine<T> {
    pub fn render(&self) -> TableView {
        if let Some(message) = self.error_message() {
            return TableView::Error(message.to_string());
        }
        if self.is_loading() {
            return TableView::Loading;
        }
        TableView::Ready(TableContent {
            action_bar: self.action_bar(),
            header: self.header_cells(),
            rows: self.body_rows(),
            footer: self.footer(),
            pagination: self.pagination().map(|p| p.view()),
        })
    }

    fn action_bar(&self) -> ActionBar {
        ActionBar {
            sort_chips: self
                .sort_rules()
                .iter()
                .map(|rule| format!("{} {}", rule.column, rule.direction.token()))
                .collect(),
            filter_chips: self
                .filter_rules()
                .iter()
                .map(|rule| query::to_query(std::slice::from_ref(rule)))
                .collect(),
            search_terms: self.search_terms().to_vec(),
            can_sort: self.options().sortable,
            can_filter: self.options().filterable,
            can_search: self.options().searchable,
            can_refresh: self.has_refresh(),
        }
    }

    fn header_cells(&self) -> Vec<HeaderCell> {
        self.columns()
            .iter()
            .filter(|column| !column.hide)
            .map(|column| HeaderCell {
                column: column.id.clone(),
                caption: match &column.render_header {
                    Some(render) => render(column),
                    None => column.caption.clone(),
                },
                width: column.size,
                align: column.align,
                sortable: column.sortable,
                sort: self
                    .sort_rules()
                    .iter()
                    .find(|rule| rule.column == column.id)
                    .map(|rule| rule.direction),
            })
            .collect()
    }

    fn body_rows(&self) -> Vec<BodyRow> {
        self.rows()
            .iter()
            .map(|row| BodyRow {
                cells: self
                    .columns()
                    .iter()
                    .filter(|column| !column.hide)
                    .map(|column| {
                        let value = row.cell(&column.id);
                        BodyCell {
                            column: column.id.clone(),
                            text: match &column.render_cell {
                                Some(render) => render(&value, row),
                                None => value.to_string(),
                            },
                            align: column.align,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    fn footer(&self) -> Footer {
        let row_count = self.rows().len();
        let label = match self.pagination() {
            Some(pagination) => format!(
                "Showing {} of {} {}",
                row_count,
                pagination.total,
                if pagination.total == 1 { "row" } else { "rows" }
            ),
            None => format!("{} {}", row_count, if row_count == 1 { "row" } else { "rows" }),
        };
        Footer { row_count, label }
    }
}
