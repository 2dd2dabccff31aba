use serde::Deserialize;

/// Default gap, in pixels, between children of `stack` and `grid` nodes that
/// carry no explicit spacing.
pub const DEFAULT_SPACING: f32 = 16.0;

/// A node of the visual arrangement tree. Layout is pure metadata: it holds
/// no state and no field logic, only where fields sit.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutNode {
    /// Leaf referencing a [`FieldNode`](super::FieldNode) by id. A dangling
    /// id renders nothing; it is not an error.
    Field { id: String },
    /// Vertical sequence.
    Stack {
        #[serde(default)]
        spacing: Option<f32>,
        children: Vec<LayoutNode>,
    },
    /// Fixed-column grid.
    Grid {
        columns: u32,
        #[serde(default)]
        spacing: Option<f32>,
        children: Vec<LayoutNode>,
    },
    /// Titled container, optionally ruled off from what precedes it.
    Section {
        title: String,
        #[serde(default)]
        divider: bool,
        children: Vec<LayoutNode>,
    },
}

impl LayoutNode {
    pub fn field(id: impl Into<String>) -> Self {
        LayoutNode::Field { id: id.into() }
    }

    pub fn stack(children: Vec<LayoutNode>) -> Self {
        LayoutNode::Stack {
            spacing: None,
            children,
        }
    }

    pub fn grid(columns: u32, children: Vec<LayoutNode>) -> Self {
        LayoutNode::Grid {
            columns,
            spacing: None,
            children,
        }
    }

    pub fn section(title: impl Into<String>, children: Vec<LayoutNode>) -> Self {
        LayoutNode::Section {
            title: title.into(),
            divider: false,
            children,
        }
    }
}
