//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the formwork crate so page
//! code can bring the whole surface in with one `use`.

// Form side
pub use crate::form::{
    FieldInput, FieldWidget, FormEngine, FormErrors, OperatorPolicy, RenderNode,
};
pub use crate::schema::{
    Condition, ConditionOp, FieldNode, FieldProps, FieldRules, FormMeta, FormSchema, LayoutNode,
    PatternRule, Renderer, RequiredRule, SelectOption, TextKind, VisibleWhen,
};

// Table side
pub use crate::table::{
    Align, Column, FilterDraft, FilterInput, FilterOperator, FilterRule, Pagination,
    PaginationView, RowData, SortDirection, SortDraft, SortRule, TableContent, TableEngine,
    TableOptions, TableView,
};

// Shared values and the query grammar
pub use crate::query;
pub use crate::value::{FileRef, FormValues, Value};

// Error types
pub use crate::error::{QueryParseError, SchemaError};
