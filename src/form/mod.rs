//! The form engine: owns value/error state for one mounted form, derives
//! field visibility, validates on change and on submit, and walks the layout
//! tree into a render model.

use ahash::AHashMap;
use itertools::Itertools;
use tracing::{debug, warn};

pub mod render;
pub mod validate;
pub mod visibility;

pub use render::{FieldWidget, RenderNode};
pub use visibility::OperatorPolicy;

use crate::schema::{FieldNode, FormSchema, Renderer};
use crate::value::{FileRef, FormValues, Value};

/// Per-field inline error messages. A missing key means the field is valid.
pub type FormErrors = AHashMap<String, String>;

/// Invoked with the sanitized payload when a submit passes validation.
pub type SubmitCallback = Box<dyn FnMut(&FormValues)>;

/// A raw input event from the host UI, before renderer-specific
/// normalization. The closed shape set mirrors the input primitives: free
/// text, a boolean toggle, multiselect mutations, a file list, or a clear.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Text-like edit; also the raw form a `number` field receives.
    Text(String),
    /// Checkbox/switch state.
    Toggle(bool),
    /// Replace a multiselect's whole selection.
    Selection(Vec<String>),
    /// Toggle one multiselect option: removes it when present, appends it
    /// otherwise.
    ToggleOption(String),
    /// Replace a file field's list.
    Files(Vec<FileRef>),
    /// Unset the field.
    Clear,
}

pub struct FormEngine {
    schema: FormSchema,
    values: FormValues,
    initial: FormValues,
    errors: FormErrors,
    policy: OperatorPolicy,
    on_submit: Option<SubmitCallback>,
}

pub struct FormEngineBuilder {
    schema: FormSchema,
    initial_data: FormValues,
    policy: OperatorPolicy,
    on_submit: Option<SubmitCallback>,
}

impl FormEngineBuilder {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            initial_data: FormValues::new(),
            policy: OperatorPolicy::default(),
            on_submit: None,
        }
    }

    /// Caller-supplied values (e.g. the record being edited) that override
    /// schema defaults per field.
    pub fn initial_values(mut self, values: FormValues) -> Self {
        self.initial_data = values;
        self
    }

    pub fn operator_policy(mut self, policy: OperatorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn on_submit(mut self, callback: impl FnMut(&FormValues) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> FormEngine {
        let mut values = FormValues::new();
        for field in self.schema.fields.values() {
            let seed = self
                .initial_data
                .get(&field.id)
                .cloned()
                .or_else(|| field.default_value.clone())
                .or_else(|| field.renderer.empty_value());
            if let Some(value) = seed {
                values.insert(field.id.clone(), value);
            }
        }
        FormEngine {
            schema: self.schema,
            initial: values.clone(),
            values,
            errors: FormErrors::new(),
            policy: self.policy,
            on_submit: self.on_submit,
        }
    }
}

impl FormEngine {
    pub fn builder(schema: FormSchema) -> FormEngineBuilder {
        FormEngineBuilder::new(schema)
    }

    pub fn new(schema: FormSchema) -> Self {
        FormEngineBuilder::new(schema).build()
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field_id: &str) -> Option<&Value> {
        self.values.get(field_id)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }

    pub fn is_field_visible(&self, field: &FieldNode) -> bool {
        visibility::is_visible(field, &self.values, self.policy)
    }

    pub fn is_visible(&self, field_id: &str) -> bool {
        self.schema
            .fields
            .get(field_id)
            .is_some_and(|field| self.is_field_visible(field))
    }

    /// Runs the rule checks for one field against current form state.
    /// Hidden fields always validate clean, whatever their rules say.
    pub fn validate_field(&self, field: &FieldNode) -> Option<String> {
        if !self.is_field_visible(field) {
            return None;
        }
        validate::run_checks(field, self.values.get(&field.id), &self.values)
    }

    /// Applies one raw input event: normalize per renderer, store, sweep
    /// visibility (clearing values of fields that just became hidden), then
    /// re-validate the changed field against post-change state.
    pub fn change(&mut self, field_id: &str, input: FieldInput) {
        let normalized = {
            let Some(field) = self.schema.fields.get(field_id) else {
                warn!(field = field_id, "change for unknown field ignored");
                return;
            };
            normalize_input(field, self.values.get(field_id), input)
        };
        match normalized {
            Some(value) => {
                self.values.insert(field_id.to_string(), value);
            }
            None => {
                self.values.remove(field_id);
            }
        }

        self.clear_hidden_values();
        self.revalidate(field_id);
    }

    /// Validates every currently-visible field. On any error the submit is
    /// refused, `None` is returned, and the full error set is readable via
    /// [`errors`](Self::errors). On success the sanitized payload is passed
    /// to the submit callback and returned.
    pub fn submit(&mut self) -> Option<FormValues> {
        let mut errors = FormErrors::new();
        for field in self.schema.fields.values() {
            if !visibility::is_visible(field, &self.values, self.policy) {
                continue;
            }
            if let Some(message) =
                validate::run_checks(field, self.values.get(&field.id), &self.values)
            {
                errors.insert(field.id.clone(), message);
            }
        }
        if !errors.is_empty() {
            debug!(
                form = %self.schema.id,
                fields = %errors.keys().join(", "),
                "submit refused"
            );
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        let payload = self.sanitized_payload();
        if let Some(callback) = self.on_submit.as_mut() {
            callback(&payload);
        }
        Some(payload)
    }

    /// Restores the initialization snapshot (not an empty form) and clears
    /// every error.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }

    /// The submit payload: visible fields only, minus `number` fields whose
    /// value is not a finite number.
    fn sanitized_payload(&self) -> FormValues {
        let mut payload = FormValues::new();
        for field in self.schema.fields.values() {
            if !visibility::is_visible(field, &self.values, self.policy) {
                continue;
            }
            let Some(value) = self.values.get(&field.id) else {
                continue;
            };
            if field.renderer == Renderer::Number
                && !matches!(value, Value::Number(n) if n.is_finite())
            {
                continue;
            }
            payload.insert(field.id.clone(), value.clone());
        }
        payload
    }

    /// One sweep over every field: anything no longer visible loses its
    /// stored value, so stale hidden-field data can never reach a submit.
    fn clear_hidden_values(&mut self) {
        let hidden: Vec<String> = self
            .schema
            .fields
            .values()
            .filter(|field| !visibility::is_visible(field, &self.values, self.policy))
            .map(|field| field.id.clone())
            .collect();
        for id in hidden {
            self.values.remove(&id);
        }
    }

    fn revalidate(&mut self, field_id: &str) {
        let Some(field) = self.schema.fields.get(field_id) else {
            return;
        };
        let result = if visibility::is_visible(field, &self.values, self.policy) {
            validate::run_checks(field, self.values.get(field_id), &self.values)
        } else {
            None
        };
        match result {
            Some(message) => {
                self.errors.insert(field_id.to_string(), message);
            }
            None => {
                self.errors.remove(field_id);
            }
        }
    }
}

/// Renderer-specific normalization of a raw input event. `None` unsets the
/// field. An input whose shape does not fit the renderer leaves the stored
/// value untouched.
fn normalize_input(
    field: &FieldNode,
    current: Option<&Value>,
    input: FieldInput,
) -> Option<Value> {
    match (field.renderer, input) {
        (_, FieldInput::Clear) => None,

        // Numeric parse; unparseable or non-finite input unsets rather than
        // storing NaN.
        (Renderer::Number, FieldInput::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::Number)
        }

        (
            Renderer::Text | Renderer::Textarea | Renderer::Select | Renderer::Radio
            | Renderer::Date,
            FieldInput::Text(raw),
        ) => Some(Value::Text(raw)),

        (Renderer::Checkbox | Renderer::Switch, FieldInput::Toggle(state)) => {
            Some(Value::Bool(state))
        }

        (Renderer::Multiselect, FieldInput::Selection(items)) => {
            Some(Value::List(items.into_iter().unique().collect()))
        }
        (Renderer::Multiselect, FieldInput::ToggleOption(option)) => {
            let mut items: Vec<String> = current
                .and_then(Value::as_list)
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            match items.iter().position(|item| *item == option) {
                Some(index) => {
                    items.remove(index);
                }
                None => items.push(option),
            }
            Some(Value::List(items))
        }

        (Renderer::File, FieldInput::Files(files)) => Some(Value::Files(files)),

        (renderer, input) => {
            debug!(?renderer, ?input, "input shape does not match renderer; ignored");
            current.cloned()
        }
    }
}
