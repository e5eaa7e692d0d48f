//! Helpers for turning `validator` output into human-readable messages.

use validator::{ValidationErrors, ValidationErrorsKind};

/// Flatten validation errors into a single `field: message; field: message`
/// string, sorted by field name so output is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect(errors, "", &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect(inner, &format!("{path}[{idx}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 5, message = "must be at least 5 characters"))]
        comment: String,
        #[validate(range(min = 1, max = 5))]
        rating: i32,
    }

    #[test]
    fn describe_lists_every_failing_field() {
        let sample = Sample {
            comment: "hey".into(),
            rating: 9,
        };
        let errors = sample.validate().unwrap_err();
        let msg = describe(&errors);
        assert_eq!(msg, "comment: must be at least 5 characters; rating: range");
    }

    #[test]
    fn describe_is_empty_for_no_errors() {
        assert_eq!(describe(&ValidationErrors::new()), "");
    }
}
