use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use super::condition::VisibleWhen;
use crate::value::{FormValues, Value};

/// The closed set of input primitives a field can render as.
///
/// Each variant also fixes how raw input events are normalized into a
/// [`Value`] (see the form engine's change handling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    Text,
    Select,
    Textarea,
    Checkbox,
    Number,
    Radio,
    File,
    Date,
    Switch,
    Multiselect,
}

impl Renderer {
    /// The value a field starts with when neither initial data nor a schema
    /// default is supplied. `None` models an unset field.
    pub fn empty_value(self) -> Option<Value> {
        match self {
            Renderer::Text
            | Renderer::Select
            | Renderer::Textarea
            | Renderer::Radio
            | Renderer::Date => Some(Value::Text(String::new())),
            Renderer::Checkbox | Renderer::Switch => Some(Value::Bool(false)),
            Renderer::Multiselect => Some(Value::List(Vec::new())),
            Renderer::Number | Renderer::File => None,
        }
    }

    /// Renderers driven by a declared option list.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            Renderer::Select | Renderer::Radio | Renderer::Multiselect
        )
    }
}

/// Refinement of the `text` renderer (email/password/…). Purely a rendering
/// hint; validation comes from `rules.pattern` alone. Unrecognized hints fall
/// back to a plain text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextKind {
    Email,
    Password,
    Tel,
    Url,
    #[default]
    Plain,
}

impl<'de> serde::Deserialize<'de> for TextKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hint = String::deserialize(deserializer)?;
        Ok(match hint.to_ascii_lowercase().as_str() {
            "email" => TextKind::Email,
            "password" => TextKind::Password,
            "tel" => TextKind::Tel,
            "url" => TextKind::Url,
            _ => TextKind::Plain,
        })
    }
}

/// One selectable entry for `select`/`radio`/`multiselect` fields and for
/// dropdown table filters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The `required` rule: a bare flag or a custom message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RequiredRule {
    Flag(bool),
    Message(String),
}

impl RequiredRule {
    pub fn is_on(&self) -> bool {
        match self {
            RequiredRule::Flag(on) => *on,
            RequiredRule::Message(_) => true,
        }
    }

    pub fn custom_message(&self) -> Option<&str> {
        match self {
            RequiredRule::Flag(_) => None,
            RequiredRule::Message(msg) => Some(msg),
        }
    }
}

/// The `pattern` rule: a regex source, optionally with a custom message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatternRule {
    Source(String),
    WithMessage {
        value: String,
        #[serde(default)]
        message: Option<String>,
    },
}

impl PatternRule {
    pub fn source(&self) -> &str {
        match self {
            PatternRule::Source(src) => src,
            PatternRule::WithMessage { value, .. } => value,
        }
    }

    pub fn custom_message(&self) -> Option<&str> {
        match self {
            PatternRule::Source(_) => None,
            PatternRule::WithMessage { message, .. } => message.as_deref(),
        }
    }
}

/// The escape hatch for validation logic no declarative rule covers.
/// Receives the candidate value (`Value::Null` when unset) and the full form
/// state; an `Err` carries the message to show inline.
pub type CustomValidator = Arc<dyn Fn(&Value, &FormValues) -> Result<(), String> + Send + Sync>;

/// Named constraints on a field. Absence of a rule means the constraint does
/// not apply.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldRules {
    pub required: Option<RequiredRule>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<PatternRule>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Not deserializable; installed programmatically via
    /// [`FieldNode::validate_with`].
    #[serde(skip)]
    pub validate: Option<CustomValidator>,
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Renderer-specific configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldProps {
    /// Option list for choice renderers.
    #[serde(alias = "data")]
    pub options: Vec<SelectOption>,
    /// Display bounds for the `number` renderer (hints, not validation).
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    /// Comma-separated accepted suffixes for the `file` renderer.
    pub accept: Option<String>,
    /// Whether the `file` renderer takes more than one file.
    pub multiple: bool,
    /// Per-file size cap in bytes for the `file` renderer.
    pub max_size: Option<u64>,
    /// Whether the `multiselect` renderer offers client-side option search.
    pub searchable: bool,
    pub rows: Option<u32>,
}

impl FieldProps {
    /// Case-insensitive substring search over the option list, matching on
    /// both label and value. An empty query returns every option.
    pub fn search_options(&self, query: &str) -> Vec<&SelectOption> {
        let needle = query.to_lowercase();
        self.options
            .iter()
            .filter(|option| {
                option.label.to_lowercase().contains(&needle)
                    || option.value.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// One form field descriptor: identity, rendering, constraints, visibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldNode {
    /// Unique key within a schema; the lookup key into values and errors.
    pub id: String,
    pub label: String,
    pub renderer: Renderer,
    #[serde(default)]
    pub input_type: Option<TextKind>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub rules: FieldRules,
    #[serde(default)]
    pub props: FieldProps,
    #[serde(default)]
    pub visible_when: Option<VisibleWhen>,
    /// Presentation-only: a disabled field still validates and submits.
    #[serde(default)]
    pub disabled: bool,
}

impl FieldNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, renderer: Renderer) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            renderer,
            input_type: None,
            placeholder: None,
            default_value: None,
            rules: FieldRules::default(),
            props: FieldProps::default(),
            visible_when: None,
            disabled: false,
        }
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn rules(mut self, rules: FieldRules) -> Self {
        let validate = self.rules.validate.take();
        self.rules = rules;
        if self.rules.validate.is_none() {
            self.rules.validate = validate;
        }
        self
    }

    pub fn props(mut self, props: FieldProps) -> Self {
        self.props = props;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.props.options = options;
        self
    }

    pub fn visible_when(mut self, condition: VisibleWhen) -> Self {
        self.visible_when = Some(condition);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Installs the custom validation closure for this field.
    pub fn validate_with(
        mut self,
        validator: impl Fn(&Value, &FormValues) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.rules.validate = Some(Arc::new(validator));
        self
    }
}
