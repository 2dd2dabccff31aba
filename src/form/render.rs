//! Layout walk: turns the schema's layout tree plus current engine state into
//! a host-agnostic render model, one snapshot per call.

use tracing::warn;

use super::FormEngine;
use crate::schema::{FieldNode, LayoutNode, Renderer, SelectOption, TextKind, DEFAULT_SPACING};
use crate::value::Value;

/// A renderable snapshot of one visible field: everything a host UI needs to
/// paint the input and its inline error.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWidget {
    pub id: String,
    pub label: String,
    pub renderer: Renderer,
    pub input_type: TextKind,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
    pub value: Option<Value>,
    pub error: Option<String>,
}

impl FieldWidget {
    /// What a text-like input should display: the stored value's text form,
    /// or empty when unset (a `number` field with no parseable value shows
    /// an empty box, never "NaN").
    pub fn display_text(&self) -> String {
        self.value.as_ref().map(Value::to_string).unwrap_or_default()
    }
}

/// The arrangement tree with state resolved in: containers mirror the layout
/// nodes, leaves are field widgets. Hidden and dangling fields are absent;
/// containers render even when empty.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Field(FieldWidget),
    Stack {
        spacing: f32,
        children: Vec<RenderNode>,
    },
    Grid {
        columns: u32,
        spacing: f32,
        children: Vec<RenderNode>,
    },
    Section {
        title: String,
        divider: bool,
        children: Vec<RenderNode>,
    },
}

impl FormEngine {
    /// Walks the schema's layout into a render tree against current state.
    pub fn render(&self) -> Vec<RenderNode> {
        self.schema()
            .layout
            .iter()
            .filter_map(|node| self.render_node(node))
            .collect()
    }

    fn render_node(&self, node: &LayoutNode) -> Option<RenderNode> {
        match node {
            LayoutNode::Field { id } => {
                let Some(field) = self.schema().fields.get(id) else {
                    warn!(field = %id, "layout references unknown field; skipped");
                    return None;
                };
                if !self.is_field_visible(field) {
                    return None;
                }
                Some(RenderNode::Field(self.widget(field)))
            }
            LayoutNode::Stack { spacing, children } => Some(RenderNode::Stack {
                spacing: spacing.unwrap_or(DEFAULT_SPACING),
                children: self.render_children(children),
            }),
            LayoutNode::Grid {
                columns,
                spacing,
                children,
            } => Some(RenderNode::Grid {
                columns: *columns,
                spacing: spacing.unwrap_or(DEFAULT_SPACING),
                children: self.render_children(children),
            }),
            LayoutNode::Section {
                title,
                divider,
                children,
            } => Some(RenderNode::Section {
                title: title.clone(),
                divider: *divider,
                children: self.render_children(children),
            }),
        }
    }

    fn render_children(&self, children: &[LayoutNode]) -> Vec<RenderNode> {
        children
            .iter()
            .filter_map(|child| self.render_node(child))
            .collect()
    }

    fn widget(&self, field: &FieldNode) -> FieldWidget {
        FieldWidget {
            id: field.id.clone(),
            label: field.label.clone(),
            renderer: field.renderer,
            input_type: field.input_type.unwrap_or_default(),
            placeholder: field.placeholder.clone(),
            disabled: field.disabled,
            options: field.props.options.clone(),
            value: self.value(&field.id).cloned(),
            error: self.error(&field.id).map(str::to_string),
        }
    }
}
