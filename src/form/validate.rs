//! Pure, field-scoped rule checks.
//!
//! Checks run in a fixed order and the first failing check wins; a field
//! surfaces at most one message at a time:
//!
//! 1. `required` (checkbox/switch demand literal `true`; file demands a
//!    non-empty file list)
//! 2. string length bounds
//! 3. element-count bounds for list values
//! 4. `pattern` (strings only, empty string exempt)
//! 5. numeric range
//! 6. per-file size and accepted-suffix checks
//! 7. the custom `validate` closure
//!
//! The length/pattern/range branches gate on the runtime shape of the value,
//! not on the renderer, so a rule silently passes when the value shape does
//! not apply to it.

use regex::Regex;
use tracing::warn;

use crate::schema::{FieldNode, Renderer, RequiredRule};
use crate::value::{FormValues, Value};

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";
pub(crate) const PATTERN_MESSAGE: &str = "Invalid format";

/// Runs every applicable rule for one field. `None` means valid. Visibility
/// is the caller's concern: hidden fields are never passed in.
pub fn run_checks(field: &FieldNode, value: Option<&Value>, all: &FormValues) -> Option<String> {
    let rules = &field.rules;

    if let Some(required) = rules.required.as_ref().filter(|rule| rule.is_on()) {
        if required_violated(field.renderer, value) {
            return Some(required_message(required));
        }
    }

    let Some(value) = value else {
        // Unset and not required: the remaining shape checks have nothing to
        // inspect, but the custom hook still gets its say.
        return run_custom(field, &Value::Null, all);
    };

    if let Value::Text(text) = value {
        let length = text.chars().count();
        if let Some(min) = rules.min_length {
            if length < min {
                return Some(format!("Must be at least {} characters", min));
            }
        }
        if let Some(max) = rules.max_length {
            if length > max {
                return Some(format!("Must be at most {} characters", max));
            }
        }
    }

    if let Value::List(items) = value {
        if let Some(min) = rules.min_length {
            if items.len() < min {
                return Some(format!("Select at least {} options", min));
            }
        }
        if let Some(max) = rules.max_length {
            if items.len() > max {
                return Some(format!("Select at most {} options", max));
            }
        }
    }

    if let Some(pattern) = &rules.pattern {
        if let Value::Text(text) = value {
            // Empty string is required's business, not pattern's.
            if !text.is_empty() {
                match Regex::new(pattern.source()) {
                    Ok(re) => {
                        if !re.is_match(text) {
                            return Some(
                                pattern.custom_message().unwrap_or(PATTERN_MESSAGE).to_string(),
                            );
                        }
                    }
                    Err(_) => {
                        warn!(field = %field.id, "pattern rule is not a valid regex; skipping");
                    }
                }
            }
        }
    }

    if let Value::Number(number) = value {
        if let Some(min) = rules.min {
            if *number < min {
                return Some(format!("Must be at least {}", min));
            }
        }
        if let Some(max) = rules.max {
            if *number > max {
                return Some(format!("Must be at most {}", max));
            }
        }
    }

    if field.renderer == Renderer::File {
        if let Value::Files(files) = value {
            for file in files {
                if let Some(cap) = field.props.max_size {
                    if file.size > cap {
                        return Some(format!("File '{}' exceeds the maximum size", file.name));
                    }
                }
                if let Some(accept) = field.props.accept.as_deref() {
                    if !suffix_accepted(&file.name, accept) {
                        return Some(format!("File '{}' is not an accepted type", file.name));
                    }
                }
            }
        }
    }

    run_custom(field, value, all)
}

fn run_custom(field: &FieldNode, value: &Value, all: &FormValues) -> Option<String> {
    let validate = field.rules.validate.as_ref()?;
    validate(value, all).err()
}

fn required_message(rule: &RequiredRule) -> String {
    rule.custom_message().unwrap_or(REQUIRED_MESSAGE).to_string()
}

fn required_violated(renderer: Renderer, value: Option<&Value>) -> bool {
    match renderer {
        // Only literal true satisfies a required toggle.
        Renderer::Checkbox | Renderer::Switch => !matches!(value, Some(Value::Bool(true))),
        Renderer::File => match value {
            Some(Value::Files(files)) => files.is_empty(),
            _ => true,
        },
        _ => match value {
            None | Some(Value::Null) => true,
            Some(Value::Text(text)) => text.is_empty(),
            Some(_) => false,
        },
    }
}

/// `accept` is a comma-separated suffix list (".pdf, .csv"); a file passes
/// when its name ends with any entry, case-insensitively.
fn suffix_accepted(file_name: &str, accept: &str) -> bool {
    let name = file_name.to_ascii_lowercase();
    accept
        .split(',')
        .map(str::trim)
        .filter(|suffix| !suffix.is_empty())
        .any(|suffix| name.ends_with(&suffix.to_ascii_lowercase()))
}
