//! Validation rule behavior, one rule family at a time.
mod common;

use common::*;
use formwork::prelude::*;

fn single_field_form(field: FieldNode) -> FormEngine {
    let id = field.id.clone();
    FormEngine::new(
        FormSchema::new("single")
            .field(field)
            .layout(vec![LayoutNode::field(id)]),
    )
}

#[test]
fn required_checkbox_only_accepts_literal_true() {
    let mut form = single_field_form(
        FieldNode::new("terms", "Terms", Renderer::Checkbox).rules(FieldRules {
            required: Some(RequiredRule::Flag(true)),
            ..FieldRules::default()
        }),
    );

    // Initialized to false: fails.
    assert!(form.submit().is_none());

    // Unset entirely: still fails.
    form.change("terms", FieldInput::Clear);
    assert!(form.submit().is_none());

    form.change("terms", FieldInput::Toggle(true));
    let payload = form.submit().expect("true satisfies required");
    assert_eq!(payload.get("terms"), Some(&Value::Bool(true)));
}

#[test]
fn required_message_override_is_used() {
    let mut form = FormEngine::new(registration_schema());
    assert!(form.submit().is_none());
    assert_eq!(form.error("terms"), Some("You must accept the terms"));
}

#[test]
fn unparseable_number_input_stores_nothing() {
    let mut form = FormEngine::new(registration_schema());

    form.change("age", FieldInput::Text("abc".into()));
    assert_eq!(form.value("age"), None);

    form.change("age", FieldInput::Text("  42 ".into()));
    assert_eq!(form.value("age"), Some(&Value::Number(42.0)));

    form.change("age", FieldInput::Text("".into()));
    assert_eq!(form.value("age"), None);
}

#[test]
fn absent_number_is_excluded_from_the_payload() {
    let mut form = FormEngine::new(registration_schema());
    form.change("username", FieldInput::Text("alice".into()));
    form.change("terms", FieldInput::Toggle(true));
    form.change("tags", FieldInput::ToggleOption("ssl".into()));
    form.change("age", FieldInput::Text("oops".into()));

    let payload = form.submit().expect("age carries no range error when unset");
    assert!(!payload.contains_key("age"));
}

#[test]
fn string_length_bounds() {
    let mut form = FormEngine::new(registration_schema());
    form.change("terms", FieldInput::Toggle(true));
    form.change("tags", FieldInput::ToggleOption("ssl".into()));

    form.change("username", FieldInput::Text("ab".into()));
    assert!(form.submit().is_none());
    assert_eq!(form.error("username"), Some("Must be at least 3 characters"));

    form.change("username", FieldInput::Text("much-too-long-name".into()));
    assert!(form.submit().is_none());
    assert_eq!(form.error("username"), Some("Must be at most 12 characters"));

    form.change("username", FieldInput::Text("alice".into()));
    assert!(form.submit().is_some());
}

#[test]
fn list_length_bounds_count_elements() {
    let mut form = FormEngine::new(registration_schema());
    form.change("username", FieldInput::Text("alice".into()));
    form.change("terms", FieldInput::Toggle(true));

    // tags has min_length 1 and starts empty.
    assert!(form.submit().is_none());
    assert_eq!(form.error("tags"), Some("Select at least 1 options"));

    form.change("tags", FieldInput::ToggleOption("dns".into()));
    assert!(form.submit().is_some());
}

#[test]
fn pattern_skips_empty_strings_and_uses_custom_message() {
    let mut form = FormEngine::new(registration_schema());
    form.change("username", FieldInput::Text("alice".into()));
    form.change("terms", FieldInput::Toggle(true));
    form.change("tags", FieldInput::ToggleOption("ssl".into()));

    // Email is optional and empty: pattern does not fire.
    assert!(form.submit().is_some());

    form.change("email", FieldInput::Text("not-an-email".into()));
    assert!(form.submit().is_none());
    assert_eq!(form.error("email"), Some("Enter a valid email address"));

    form.change("email", FieldInput::Text("ops@example.com".into()));
    assert!(form.submit().is_some());
}

#[test]
fn invalid_pattern_source_degrades_to_unchecked() {
    let mut form = single_field_form(
        FieldNode::new("code", "Code", Renderer::Text).rules(FieldRules {
            pattern: Some(PatternRule::Source("([unclosed".to_string())),
            ..FieldRules::default()
        }),
    );
    form.change("code", FieldInput::Text("anything".into()));
    assert!(form.submit().is_some());
}

#[test]
fn numeric_range_bounds() {
    let mut form = FormEngine::new(registration_schema());
    form.change("username", FieldInput::Text("alice".into()));
    form.change("terms", FieldInput::Toggle(true));
    form.change("tags", FieldInput::ToggleOption("ssl".into()));

    form.change("age", FieldInput::Text("15".into()));
    assert!(form.submit().is_none());
    assert_eq!(form.error("age"), Some("Must be at least 18"));

    form.change("age", FieldInput::Text("130".into()));
    assert!(form.submit().is_none());
    assert_eq!(form.error("age"), Some("Must be at most 120"));

    form.change("age", FieldInput::Text("30".into()));
    assert!(form.submit().is_some());
}

#[test]
fn file_rules_check_count_size_and_suffix() {
    let field = FieldNode::new("report", "Report", Renderer::File)
        .rules(FieldRules {
            required: Some(RequiredRule::Flag(true)),
            ..FieldRules::default()
        })
        .props(FieldProps {
            accept: Some(".pdf,.csv".to_string()),
            max_size: Some(1024 * 1024),
            multiple: true,
            ..FieldProps::default()
        });
    let mut form = single_field_form(field);

    // Required fails on an empty file list.
    form.change("report", FieldInput::Files(vec![]));
    assert!(form.submit().is_none());

    // Oversized file.
    form.change(
        "report",
        FieldInput::Files(vec![FileRef {
            name: "big.pdf".to_string(),
            size: 2 * 1024 * 1024,
            content_type: None,
        }]),
    );
    assert!(form.submit().is_none());
    assert_eq!(
        form.error("report"),
        Some("File 'big.pdf' exceeds the maximum size")
    );

    // Wrong suffix, case-insensitively compared.
    form.change(
        "report",
        FieldInput::Files(vec![FileRef {
            name: "notes.txt".to_string(),
            size: 10,
            content_type: None,
        }]),
    );
    assert!(form.submit().is_none());
    assert_eq!(
        form.error("report"),
        Some("File 'notes.txt' is not an accepted type")
    );

    form.change(
        "report",
        FieldInput::Files(vec![FileRef {
            name: "Report.PDF".to_string(),
            size: 10,
            content_type: None,
        }]),
    );
    assert!(form.submit().is_some());
}

#[test]
fn custom_validator_sees_the_whole_form() {
    let schema = FormSchema::new("password")
        .field(FieldNode::new("password", "Password", Renderer::Text))
        .field(
            FieldNode::new("confirm", "Confirm password", Renderer::Text).validate_with(
                |value, all| {
                    let password = all
                        .get("password")
                        .and_then(Value::as_text)
                        .unwrap_or_default();
                    if value.as_text() == Some(password) {
                        Ok(())
                    } else {
                        Err("Passwords do not match".to_string())
                    }
                },
            ),
        );
    let mut form = FormEngine::new(schema);

    form.change("password", FieldInput::Text("hunter2".into()));
    form.change("confirm", FieldInput::Text("hunter".into()));
    assert!(form.submit().is_none());
    assert_eq!(form.error("confirm"), Some("Passwords do not match"));

    form.change("confirm", FieldInput::Text("hunter2".into()));
    assert!(form.submit().is_some());
}

#[test]
fn change_revalidates_only_the_changed_field() {
    let mut form = FormEngine::new(registration_schema());

    // A change on username reports its own error immediately...
    form.change("username", FieldInput::Text("ab".into()));
    assert_eq!(form.error("username"), Some("Must be at least 3 characters"));
    // ...without dragging untouched fields' errors in before any submit.
    assert!(form.error("terms").is_none());
    assert!(form.error("tags").is_none());
}

#[test]
fn disabled_fields_still_validate_and_submit() {
    let mut form = single_field_form(
        FieldNode::new("locked", "Locked", Renderer::Text)
            .disabled()
            .rules(FieldRules {
                required: Some(RequiredRule::Flag(true)),
                ..FieldRules::default()
            }),
    );

    assert!(form.submit().is_none());
    form.change("locked", FieldInput::Text("fixed".into()));
    let payload = form.submit().expect("disabled fields are not exempt");
    assert_eq!(payload.get("locked"), Some(&Value::text("fixed")));
}
