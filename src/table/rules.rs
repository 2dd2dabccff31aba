use serde::{Deserialize, Serialize};

/// Direction of one sort rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn token(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A user-specified sort instruction. Insertion order is meaningful: the
/// first rule is the primary sort key consumed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRule {
    pub column: String,
    pub direction: SortDirection,
}

impl SortRule {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}

/// The operator set of the backend filter grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Eq,
    Ne,
    Contains,
    StartsWith,
    EndsWith,
    Gt,
    Lt,
    Ge,
    Le,
}

impl FilterOperator {
    pub const fn token(self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "startswith",
            FilterOperator::EndsWith => "endswith",
            FilterOperator::Gt => "gt",
            FilterOperator::Lt => "lt",
            FilterOperator::Ge => "ge",
            FilterOperator::Le => "le",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "eq" => Some(FilterOperator::Eq),
            "ne" => Some(FilterOperator::Ne),
            "contains" => Some(FilterOperator::Contains),
            "startswith" => Some(FilterOperator::StartsWith),
            "endswith" => Some(FilterOperator::EndsWith),
            "gt" => Some(FilterOperator::Gt),
            "lt" => Some(FilterOperator::Lt),
            "ge" => Some(FilterOperator::Ge),
            "le" => Some(FilterOperator::Le),
            _ => None,
        }
    }

    /// Function-call serialization (`contains(name,'x')`) vs the infix
    /// comparison form (`name eq 'x'`).
    pub const fn is_functional(self) -> bool {
        matches!(
            self,
            FilterOperator::Contains | FilterOperator::StartsWith | FilterOperator::EndsWith
        )
    }

    /// The subset offered in the filter editor's operator picker. The
    /// numeric comparisons are accepted by the parser but deliberately left
    /// out of the menu.
    pub fn menu() -> &'static [FilterOperator] {
        &[
            FilterOperator::Eq,
            FilterOperator::Ne,
            FilterOperator::Contains,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
        ]
    }
}

/// A user-specified filter instruction; rules combine with implicit AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRule {
    pub column: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterRule {
    pub fn new(
        column: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }
}
