//! Bridges `validator` derive output into [`CoreError`].

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Run the `validator` rules on `value`.
///
/// Failures are flattened into a single [`CoreError::Validation`] message,
/// one `path: reason` pair per failing rule, sorted by field name. Nested
/// structs contribute dotted paths such as `new_project.title`.
pub fn validate<T: Validate>(value: &T) -> Result<(), CoreError> {
    value.validate().map_err(|errors| {
        let mut messages = Vec::new();
        collect("", &errors, &mut messages);
        CoreError::Validation(messages.join("; "))
    })
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    match &err.message {
                        Some(msg) => out.push(format!("{path}: {msg}")),
                        None => out.push(format!("{path}: failed {}", err.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
