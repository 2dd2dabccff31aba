//! Common test utilities for building form schemas and table fixtures.
use formwork::prelude::*;

/// Country/state schema: `state` is visible only when `country` is "US",
/// and required while visible.
#[allow(dead_code)]
pub fn country_state_schema() -> FormSchema {
    FormSchema::new("address")
        .field(
            FieldNode::new("country", "Country", Renderer::Select).options(vec![
                SelectOption::new("US", "United States"),
                SelectOption::new("FR", "France"),
            ]),
        )
        .field(
            FieldNode::new("state", "State", Renderer::Text)
                .visible_when(VisibleWhen::One(Condition::equals("country", "US")))
                .rules(FieldRules {
                    required: Some(RequiredRule::Flag(true)),
                    ..FieldRules::default()
                }),
        )
        .layout(vec![LayoutNode::stack(vec![
            LayoutNode::field("country"),
            LayoutNode::field("state"),
        ])])
}

/// A registration-style schema exercising most rule families.
#[allow(dead_code)]
pub fn registration_schema() -> FormSchema {
    FormSchema::new("registration")
        .field(
            FieldNode::new("username", "Username", Renderer::Text).rules(FieldRules {
                required: Some(RequiredRule::Flag(true)),
                min_length: Some(3),
                max_length: Some(12),
                ..FieldRules::default()
            }),
        )
        .field(
            FieldNode::new("email", "Email", Renderer::Text).rules(FieldRules {
                pattern: Some(PatternRule::WithMessage {
                    value: "^[^@]+@[^@]+$".to_string(),
                    message: Some("Enter a valid email address".to_string()),
                }),
                ..FieldRules::default()
            }),
        )
        .field(
            FieldNode::new("age", "Age", Renderer::Number).rules(FieldRules {
                min: Some(18.0),
                max: Some(120.0),
                ..FieldRules::default()
            }),
        )
        .field(
            FieldNode::new("terms", "Accept terms", Renderer::Checkbox).rules(FieldRules {
                required: Some(RequiredRule::Message(
                    "You must accept the terms".to_string(),
                )),
                ..FieldRules::default()
            }),
        )
        .field(
            FieldNode::new("tags", "Tags", Renderer::Multiselect)
                .options(vec![
                    SelectOption::new("ssl", "SSL"),
                    SelectOption::new("uptime", "Uptime"),
                    SelectOption::new("dns", "DNS"),
                ])
                .rules(FieldRules {
                    min_length: Some(1),
                    ..FieldRules::default()
                }),
        )
        .layout(vec![LayoutNode::section(
            "Account",
            vec![
                LayoutNode::field("username"),
                LayoutNode::field("email"),
                LayoutNode::field("age"),
                LayoutNode::field("terms"),
                LayoutNode::field("tags"),
            ],
        )])
}

/// Monitor-list columns for table tests.
#[allow(dead_code)]
pub fn monitor_columns() -> Vec<Column<serde_json::Value>> {
    vec![
        Column::new("name", "Name").size(220).sortable().filterable(),
        Column::new("status", "Status")
            .size(120)
            .filter_dropdown(vec![
                SelectOption::new("up", "Up"),
                SelectOption::new("down", "Down"),
            ]),
        Column::new("uptime", "Uptime %")
            .size(100)
            .align(Align::Right)
            .sortable(),
        Column::new("internal_id", "Internal id").hidden(),
    ]
}

/// Matching sample rows.
#[allow(dead_code)]
pub fn monitor_rows() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({"name": "edge-1", "status": "up", "uptime": 99.95, "internal_id": 1}),
        serde_json::json!({"name": "api-2", "status": "down", "uptime": 97.2, "internal_id": 2}),
        serde_json::json!({"name": "db-1", "status": "up", "uptime": 99.99, "internal_id": 3}),
    ]
}
