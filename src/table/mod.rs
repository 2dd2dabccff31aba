//! The table engine: renders caller-supplied rows against column
//! declarations, owns the sort/filter/search rule state, and echoes every
//! rule mutation to the owning page through callbacks.
//!
//! The engine performs no data fetching, no filtering, and no sorting of its
//! own rows — it is the single source of truth for *what the user asked
//! for*, while the owning page refetches and pushes new rows back in.
//! (Purely client-side tables can use the [`client`] helpers instead of a
//! backend round trip.)

pub mod client;
pub mod column;
pub mod editor;
pub mod pagination;
pub mod render;
pub mod rules;

pub use column::{Align, CellRenderer, Column, FilterInput, HeaderRenderer, RowData};
pub use editor::{FilterDraft, SortDraft};
pub use pagination::{Pagination, PaginationView};
pub use render::{ActionBar, BodyCell, BodyRow, Footer, HeaderCell, TableContent, TableView};
pub use rules::{FilterOperator, FilterRule, SortDirection, SortRule};

/// Construction-time configuration.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub sortable: bool,
    pub filterable: bool,
    pub searchable: bool,
    pub initial_sort: Vec<SortRule>,
    pub initial_filters: Vec<FilterRule>,
    pub initial_search: Vec<String>,
    pub pagination: Option<Pagination>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            filterable: true,
            searchable: true,
            initial_sort: Vec::new(),
            initial_filters: Vec::new(),
            initial_search: Vec::new(),
            pagination: None,
        }
    }
}

#[derive(Default)]
struct Callbacks {
    on_sort_apply: Option<Box<dyn FnMut(&[SortRule])>>,
    on_filter_apply: Option<Box<dyn FnMut(&[FilterRule])>>,
    on_search_apply: Option<Box<dyn FnMut(&[String])>>,
    on_refresh: Option<Box<dyn FnMut()>>,
    on_page_change: Option<Box<dyn FnMut(u32)>>,
}

pub struct TableEngine<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    options: TableOptions,
    sort_rules: Vec<SortRule>,
    filter_rules: Vec<FilterRule>,
    search_terms: Vec<String>,
    pagination: Option<Pagination>,
    loading: bool,
    error: Option<String>,
    callbacks: Callbacks,
}

pub struct TableEngineBuilder<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    options: TableOptions,
    callbacks: Callbacks,
}

impl<T> TableEngineBuilder<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            options: TableOptions::default(),
            callbacks: Callbacks::default(),
        }
    }

    pub fn rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn on_sort_apply(mut self, callback: impl FnMut(&[SortRule]) + 'static) -> Self {
        self.callbacks.on_sort_apply = Some(Box::new(callback));
        self
    }

    pub fn on_filter_apply(mut self, callback: impl FnMut(&[FilterRule]) + 'static) -> Self {
        self.callbacks.on_filter_apply = Some(Box::new(callback));
        self
    }

    pub fn on_search_apply(mut self, callback: impl FnMut(&[String]) + 'static) -> Self {
        self.callbacks.on_search_apply = Some(Box::new(callback));
        self
    }

    pub fn on_refresh(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_refresh = Some(Box::new(callback));
        self
    }

    pub fn on_page_change(mut self, callback: impl FnMut(u32) + 'static) -> Self {
        self.callbacks.on_page_change = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> TableEngine<T> {
        TableEngine {
            columns: self.columns,
            rows: self.rows,
            sort_rules: self.options.initial_sort.clone(),
            filter_rules: self.options.initial_filters.clone(),
            search_terms: self.options.initial_search.clone(),
            pagination: self.options.pagination,
            options: self.options,
            loading: false,
            error: None,
            callbacks: self.callbacks,
        }
    }
}

impl<T> TableEngine<T> {
    pub fn builder(columns: Vec<Column<T>>) -> TableEngineBuilder<T> {
        TableEngineBuilder::new(columns)
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn sort_rules(&self) -> &[SortRule] {
        &self.sort_rules
    }

    pub fn filter_rules(&self) -> &[FilterRule] {
        &self.filter_rules
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_refresh(&self) -> bool {
        self.callbacks.on_refresh.is_some()
    }

    // --- Caller-pushed display state -------------------------------------

    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// The owning page moves the cursor after a refetch; the engine itself
    /// never mutates `page`.
    pub fn set_pagination(&mut self, pagination: Option<Pagination>) {
        self.pagination = pagination;
    }

    // --- Rule state (owned here, echoed to the caller) --------------------

    /// Replaces the sort rule list and notifies the caller. Both applying
    /// and clearing go through here so the caller always hears about it.
    pub fn apply_sort(&mut self, rules: Vec<SortRule>) {
        self.sort_rules = rules;
        if let Some(callback) = self.callbacks.on_sort_apply.as_mut() {
            callback(&self.sort_rules);
        }
    }

    pub fn reset_sort(&mut self) {
        self.apply_sort(Vec::new());
    }

    pub fn apply_filters(&mut self, rules: Vec<FilterRule>) {
        self.filter_rules = rules;
        if let Some(callback) = self.callbacks.on_filter_apply.as_mut() {
            callback(&self.filter_rules);
        }
    }

    pub fn reset_filters(&mut self) {
        self.apply_filters(Vec::new());
    }

    pub fn apply_search(&mut self, terms: Vec<String>) {
        self.search_terms = terms;
        if let Some(callback) = self.callbacks.on_search_apply.as_mut() {
            callback(&self.search_terms);
        }
    }

    pub fn refresh(&mut self) {
        if let Some(callback) = self.callbacks.on_refresh.as_mut() {
            callback();
        }
    }

    // --- Editors ----------------------------------------------------------

    /// Opens a sort editor pre-populated with the current rules, offering
    /// only columns flagged sortable.
    pub fn open_sort_editor(&self) -> SortDraft {
        SortDraft::new(&self.sort_rules, self.sortable_columns())
    }

    pub fn apply_sort_draft(&mut self, draft: SortDraft) {
        self.apply_sort(draft.into_rules());
    }

    pub fn open_filter_editor(&self) -> FilterDraft {
        FilterDraft::new(&self.filter_rules, self.filterable_columns())
    }

    pub fn apply_filter_draft(&mut self, draft: FilterDraft) {
        self.apply_filters(draft.into_rules());
    }

    pub fn sortable_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|column| column.sortable && !column.hide)
            .map(|column| column.id.clone())
            .collect()
    }

    pub fn filterable_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|column| column.filterable && !column.hide)
            .map(|column| column.id.clone())
            .collect()
    }

    // --- Pagination requests ----------------------------------------------

    /// Asks the owning page for a different page. No cursor mutation happens
    /// here; the page comes back via [`set_pagination`](Self::set_pagination).
    pub fn request_page(&mut self, page: u32) {
        if let Some(callback) = self.callbacks.on_page_change.as_mut() {
            callback(page);
        }
    }

    /// The Next button: requests `page + 1` unless the control is disabled.
    pub fn next_page(&mut self) {
        let Some(pagination) = self.pagination else {
            return;
        };
        if pagination.view().next_enabled {
            self.request_page(pagination.page + 1);
        }
    }

    /// The Prev button: requests `page - 1` unless the control is disabled.
    pub fn prev_page(&mut self) {
        let Some(pagination) = self.pagination else {
            return;
        };
        if pagination.view().prev_enabled {
            self.request_page(pagination.page - 1);
        }
    }
}
