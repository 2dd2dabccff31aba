use ahash::AHashMap;
use serde::Deserialize;

use super::field::FieldNode;
use super::layout::LayoutNode;
use crate::error::SchemaError;

/// Form-level presentation metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormMeta {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// The complete declarative description driving one form instance: fields,
/// layout, and meta. Supplied by a page, immutable once handed to an engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub id: String,
    #[serde(default)]
    pub meta: FormMeta,
    pub fields: AHashMap<String, FieldNode>,
    #[serde(default)]
    pub layout: Vec<LayoutNode>,
}

impl FormSchema {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: FormMeta::default(),
            fields: AHashMap::new(),
            layout: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldNode) -> Self {
        self.fields.insert(field.id.clone(), field);
        self
    }

    pub fn layout(mut self, layout: Vec<LayoutNode>) -> Self {
        self.layout = layout;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    /// Authoring-time lint. Render-time behavior stays tolerant regardless of
    /// what this reports; the findings are for schema authors and tooling.
    pub fn lint(&self) -> Vec<SchemaError> {
        let mut findings = Vec::new();

        let mut seen = AHashMap::new();
        for node in &self.layout {
            self.lint_layout(node, &mut seen, &mut findings);
        }

        for field in self.fields.values() {
            if let Some(visible_when) = &field.visible_when {
                for condition in visible_when.conditions() {
                    if !self.fields.contains_key(&condition.field) {
                        findings.push(SchemaError::DanglingConditionTarget {
                            field_id: field.id.clone(),
                            target_id: condition.field.clone(),
                        });
                    }
                }
            }
            if field.renderer.is_choice() && field.props.options.is_empty() {
                findings.push(SchemaError::EmptyOptionList {
                    field_id: field.id.clone(),
                });
            }
            if field.disabled && field.rules.required.as_ref().is_some_and(|r| r.is_on()) {
                findings.push(SchemaError::DisabledRequired {
                    field_id: field.id.clone(),
                });
            }
            if let Some(pattern) = &field.rules.pattern {
                if regex::Regex::new(pattern.source()).is_err() {
                    findings.push(SchemaError::InvalidPattern {
                        field_id: field.id.clone(),
                        source_text: pattern.source().to_string(),
                    });
                }
            }
        }

        findings
    }

    fn lint_layout(
        &self,
        node: &LayoutNode,
        seen: &mut AHashMap<String, usize>,
        findings: &mut Vec<SchemaError>,
    ) {
        match node {
            LayoutNode::Field { id } => {
                if !self.fields.contains_key(id) {
                    findings.push(SchemaError::DanglingLayoutField {
                        field_id: id.clone(),
                    });
                }
                let count = seen.entry(id.clone()).or_insert(0);
                *count += 1;
                if *count == 2 {
                    findings.push(SchemaError::DuplicateLayoutField {
                        field_id: id.clone(),
                    });
                }
            }
            LayoutNode::Stack { children, .. }
            | LayoutNode::Grid { children, .. }
            | LayoutNode::Section { children, .. } => {
                for child in children {
                    self.lint_layout(child, seen, findings);
                }
            }
        }
    }
}
