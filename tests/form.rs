//! Form engine behavior: visibility, submit gating, reset, rendering.
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::*;
use formwork::prelude::*;

#[test]
fn hiding_a_field_clears_its_stored_value() {
    let mut form = FormEngine::new(country_state_schema());

    form.change("country", FieldInput::Text("US".into()));
    assert!(form.is_visible("state"));
    form.change("state", FieldInput::Text("California".into()));
    assert_eq!(form.value("state"), Some(&Value::text("California")));

    form.change("country", FieldInput::Text("FR".into()));
    assert!(!form.is_visible("state"));
    assert_eq!(form.value("state"), None);
}

#[test]
fn reshowing_a_field_does_not_resurrect_its_old_value() {
    let mut form = FormEngine::new(country_state_schema());

    form.change("country", FieldInput::Text("US".into()));
    form.change("state", FieldInput::Text("California".into()));
    form.change("country", FieldInput::Text("FR".into()));
    form.change("country", FieldInput::Text("US".into()));

    assert!(form.is_visible("state"));
    assert_eq!(form.value("state"), None);
}

#[test]
fn hidden_field_failures_never_block_submission() {
    let mut form = FormEngine::new(country_state_schema());

    // `state` is required but hidden while country != US.
    form.change("country", FieldInput::Text("FR".into()));
    let payload = form.submit().expect("hidden required field must not block");
    assert_eq!(payload.get("country"), Some(&Value::text("FR")));
    assert!(!payload.contains_key("state"));
}

#[test]
fn any_visible_error_blocks_submission_and_all_errors_surface() {
    let mut form = FormEngine::new(registration_schema());

    assert!(form.submit().is_none());
    // Both failing required fields report, not just the first.
    assert!(form.error("username").is_some());
    assert!(form.error("terms").is_some());
}

#[test]
fn country_state_scenario() {
    let mut form = FormEngine::new(country_state_schema());

    form.change("country", FieldInput::Text("US".into()));
    assert!(form.submit().is_none());
    assert_eq!(form.error("state"), Some("This field is required"));

    // The per-field check agrees with the submit-time aggregation.
    let state = form.schema().fields.get("state").cloned().unwrap();
    assert_eq!(
        form.validate_field(&state),
        Some("This field is required".to_string())
    );

    form.change("country", FieldInput::Text("FR".into()));
    let payload = form.submit().expect("submit succeeds once state is hidden");
    assert!(!payload.contains_key("state"));
    assert!(form.errors().is_empty());
}

#[test]
fn submit_invokes_callback_with_sanitized_payload() {
    let received: Rc<RefCell<Vec<FormValues>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    let mut form = FormEngine::builder(country_state_schema())
        .on_submit(move |payload| sink.borrow_mut().push(payload.clone()))
        .build();

    form.change("country", FieldInput::Text("US".into()));
    form.change("state", FieldInput::Text("California".into()));
    assert!(form.submit().is_some());

    let calls = received.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].get("state"), Some(&Value::text("California")));
}

#[test]
fn rejected_submit_never_invokes_callback() {
    let count = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&count);
    let mut form = FormEngine::builder(country_state_schema())
        .on_submit(move |_| *sink.borrow_mut() += 1)
        .build();

    form.change("country", FieldInput::Text("US".into()));
    assert!(form.submit().is_none());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn reset_restores_the_initial_snapshot() {
    let mut initial = FormValues::new();
    initial.insert("country".to_string(), Value::text("US"));
    initial.insert("state".to_string(), Value::text("Oregon"));
    let mut form = FormEngine::builder(country_state_schema())
        .initial_values(initial)
        .build();

    form.change("state", FieldInput::Text("Nevada".into()));
    form.change("country", FieldInput::Text("FR".into()));
    assert!(form.submit().is_some());

    form.reset();
    assert_eq!(form.value("country"), Some(&Value::text("US")));
    assert_eq!(form.value("state"), Some(&Value::text("Oregon")));
    assert!(form.errors().is_empty());
}

#[test]
fn unknown_operator_fails_open_by_default() {
    let schema = FormSchema::new("policy").field(
        FieldNode::new("extra", "Extra", Renderer::Text).visible_when(VisibleWhen::One(
            Condition {
                field: "missing".to_string(),
                op: ConditionOp::Unknown,
                value: serde_json::Value::Null,
            },
        )),
    );
    let form = FormEngine::new(schema);
    assert!(form.is_visible("extra"));
}

#[test]
fn unknown_operator_can_fail_closed() {
    let schema = FormSchema::new("policy").field(
        FieldNode::new("extra", "Extra", Renderer::Text).visible_when(VisibleWhen::One(
            Condition {
                field: "missing".to_string(),
                op: ConditionOp::Unknown,
                value: serde_json::Value::Null,
            },
        )),
    );
    let form = FormEngine::builder(schema)
        .operator_policy(OperatorPolicy::FailClosed)
        .build();
    assert!(!form.is_visible("extra"));
}

#[test]
fn condition_list_is_an_implicit_and() {
    let schema = FormSchema::new("and")
        .field(FieldNode::new("kind", "Kind", Renderer::Select).options(vec![
            SelectOption::new("http", "HTTP"),
            SelectOption::new("tcp", "TCP"),
        ]))
        .field(FieldNode::new("enabled", "Enabled", Renderer::Switch))
        .field(
            FieldNode::new("port", "Port", Renderer::Number).visible_when(VisibleWhen::All(vec![
                Condition::one_of("kind", vec!["http", "tcp"]),
                Condition::equals("enabled", true),
            ])),
        );
    let mut form = FormEngine::new(schema);

    assert!(!form.is_visible("port"));
    form.change("kind", FieldInput::Text("tcp".into()));
    assert!(!form.is_visible("port"));
    form.change("enabled", FieldInput::Toggle(true));
    assert!(form.is_visible("port"));
}

#[test]
fn multiselect_toggle_is_idempotent() {
    let mut form = FormEngine::new(registration_schema());

    form.change("tags", FieldInput::ToggleOption("ssl".into()));
    form.change("tags", FieldInput::ToggleOption("uptime".into()));
    assert_eq!(
        form.value("tags"),
        Some(&Value::List(vec!["ssl".into(), "uptime".into()]))
    );

    // Toggling the same option twice restores the original selection.
    form.change("tags", FieldInput::ToggleOption("uptime".into()));
    form.change("tags", FieldInput::ToggleOption("uptime".into()));
    assert_eq!(
        form.value("tags"),
        Some(&Value::List(vec!["ssl".into(), "uptime".into()]))
    );
}

#[test]
fn multiselect_selection_never_stores_duplicates() {
    let mut form = FormEngine::new(registration_schema());
    form.change(
        "tags",
        FieldInput::Selection(vec!["ssl".into(), "ssl".into(), "dns".into()]),
    );
    assert_eq!(
        form.value("tags"),
        Some(&Value::List(vec!["ssl".into(), "dns".into()]))
    );
}

#[test]
fn option_search_is_case_insensitive_substring() {
    let schema = registration_schema();
    let tags = schema.fields.get("tags").unwrap();
    let hits = tags.props.search_options("SS");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].value, "ssl");
    assert_eq!(tags.props.search_options("").len(), 3);
}

#[test]
fn render_skips_hidden_fields_but_keeps_containers() {
    let mut form = FormEngine::new(country_state_schema());
    form.change("country", FieldInput::Text("FR".into()));

    let tree = form.render();
    assert_eq!(tree.len(), 1);
    let RenderNode::Stack { children, .. } = &tree[0] else {
        panic!("expected the stack container to survive");
    };
    // Only the country field renders; the hidden state field is absent.
    assert_eq!(children.len(), 1);
    let RenderNode::Field(widget) = &children[0] else {
        panic!("expected a field widget");
    };
    assert_eq!(widget.id, "country");
}

#[test]
fn render_ignores_dangling_layout_references() {
    let schema = FormSchema::new("dangling")
        .field(FieldNode::new("known", "Known", Renderer::Text))
        .layout(vec![LayoutNode::grid(
            2,
            vec![LayoutNode::field("known"), LayoutNode::field("ghost")],
        )]);
    let form = FormEngine::new(schema);

    let tree = form.render();
    let RenderNode::Grid { columns, children, .. } = &tree[0] else {
        panic!("expected a grid");
    };
    assert_eq!(*columns, 2);
    assert_eq!(children.len(), 1);
}

#[test]
fn render_carries_values_and_errors_into_widgets() {
    let mut form = FormEngine::new(country_state_schema());
    form.change("country", FieldInput::Text("US".into()));
    assert!(form.submit().is_none());

    let tree = form.render();
    let RenderNode::Stack { children, .. } = &tree[0] else {
        panic!("expected a stack");
    };
    let widgets: Vec<&FieldWidget> = children
        .iter()
        .filter_map(|node| match node {
            RenderNode::Field(widget) => Some(widget),
            _ => None,
        })
        .collect();
    assert_eq!(widgets.len(), 2);
    let state = widgets.iter().find(|w| w.id == "state").unwrap();
    assert_eq!(state.error.as_deref(), Some("This field is required"));
    assert_eq!(state.display_text(), "");
}

#[test]
fn number_widget_displays_empty_after_unparseable_input() {
    let mut form = FormEngine::new(registration_schema());
    form.change("age", FieldInput::Text("not a number".into()));
    assert_eq!(form.value("age"), None);

    let tree = form.render();
    let RenderNode::Section { children, .. } = &tree[0] else {
        panic!("expected a section");
    };
    let age = children
        .iter()
        .find_map(|node| match node {
            RenderNode::Field(widget) if widget.id == "age" => Some(widget),
            _ => None,
        })
        .unwrap();
    assert_eq!(age.display_text(), "");
}
