//! Pure visibility predicate for `visibleWhen` conditions.

use crate::schema::{Condition, ConditionOp, FieldNode};
use crate::value::{FormValues, Value};

/// How a condition with an operator this engine does not recognize resolves.
///
/// The inherited behavior is fail-open (the field stays visible). Making the
/// default an explicit, selectable policy keeps that choice visible and
/// testable instead of buried in a fallthrough branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorPolicy {
    #[default]
    FailOpen,
    FailClosed,
}

/// Evaluates a field's `visibleWhen` against current form state. No
/// declaration means visible; a list of conditions must all hold.
pub fn is_visible(field: &FieldNode, values: &FormValues, policy: OperatorPolicy) -> bool {
    match &field.visible_when {
        None => true,
        Some(visible_when) => visible_when
            .conditions()
            .iter()
            .all(|condition| condition_holds(condition, values, policy)),
    }
}

fn condition_holds(condition: &Condition, values: &FormValues, policy: OperatorPolicy) -> bool {
    let current = values.get(&condition.field);
    match condition.op {
        ConditionOp::Equals => literal_equals(current, &condition.value),
        ConditionOp::In => match condition.value.as_array() {
            Some(items) => items.iter().any(|item| literal_equals(current, item)),
            // `in` against a non-array literal can never match.
            None => false,
        },
        ConditionOp::Unknown => policy == OperatorPolicy::FailOpen,
    }
}

/// Strict equality between the referenced field's current value and a schema
/// literal. An unset field equals nothing, including an explicit null.
fn literal_equals(current: Option<&Value>, literal: &serde_json::Value) -> bool {
    current.is_some_and(|value| *value == Value::from_json(literal))
}
