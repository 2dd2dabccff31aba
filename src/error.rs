use thiserror::Error;

/// Schema authoring problems reported by `FormSchema::lint`.
///
/// These never abort a render; the form degrades per field instead. The lint
/// exists so authoring tools can surface mistakes before a page ships.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Layout references unknown field '{field_id}'")]
    DanglingLayoutField { field_id: String },

    #[error("Field '{field_id}' appears in the layout more than once")]
    DuplicateLayoutField { field_id: String },

    #[error("Visibility condition on field '{field_id}' references unknown field '{target_id}'")]
    DanglingConditionTarget { field_id: String, target_id: String },

    #[error("Field '{field_id}' renders a choice input but declares no options")]
    EmptyOptionList { field_id: String },

    #[error(
        "Field '{field_id}' is disabled but required; it will still be validated and submitted"
    )]
    DisabledRequired { field_id: String },

    #[error("Pattern rule on field '{field_id}' is not a valid regular expression: {source_text}")]
    InvalidPattern { field_id: String, source_text: String },
}

/// Errors from the strict filter-expression parser.
///
/// The lenient entry point (`query::parse`) drops malformed segments instead
/// of surfacing these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("Filter segment {index} is empty")]
    EmptySegment { index: usize },

    #[error("Unknown filter operator '{token}' in segment '{segment}'")]
    UnknownOperator { token: String, segment: String },

    #[error("Unterminated quoted value in segment '{segment}'")]
    UnterminatedValue { segment: String },

    #[error("Malformed filter segment '{segment}': {message}")]
    MalformedSegment { segment: String, message: String },
}
