use serde::{Deserialize, Deserializer};

/// Operator of a visibility condition. Operators this engine does not know
/// deserialize to `Unknown` and are resolved by the form's
/// [`OperatorPolicy`](crate::form::OperatorPolicy) instead of failing the
/// whole schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOp {
    Equals,
    In,
    Unknown,
}

impl<'de> Deserialize<'de> for ConditionOp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(match token.to_ascii_lowercase().as_str() {
            "equals" => ConditionOp::Equals,
            "in" => ConditionOp::In,
            _ => ConditionOp::Unknown,
        })
    }
}

/// A single visibility condition: another field's current value compared
/// against a literal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Id of the referenced field.
    pub field: String,
    #[serde(alias = "operator")]
    pub op: ConditionOp,
    /// Comparison literal: a scalar for `equals`, an array for `in`.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Condition {
    pub fn equals(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            field: field.into(),
            op: ConditionOp::Equals,
            value: value.into(),
        }
    }

    pub fn one_of(field: impl Into<String>, values: Vec<&str>) -> Self {
        Self {
            field: field.into(),
            op: ConditionOp::In,
            value: serde_json::json!(values),
        }
    }
}

/// A field's `visibleWhen` declaration: one condition, or a list that must
/// all hold (implicit AND; there is no OR form).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VisibleWhen {
    One(Condition),
    All(Vec<Condition>),
}

impl VisibleWhen {
    pub fn conditions(&self) -> &[Condition] {
        match self {
            VisibleWhen::One(condition) => std::slice::from_ref(condition),
            VisibleWhen::All(conditions) => conditions,
        }
    }
}
