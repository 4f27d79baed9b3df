use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for CoreError {
    /// Flatten field errors into a single `field: message` list, sorted by
    /// field name so the text is stable across runs. Field names are given
    /// in their camelCase wire form.
    fn from(errors: ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(|e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        format!("{}: {message}", camel_case(&field))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        parts.sort();
        CoreError::Validation(parts.join("; "))
    }
}

/// `duration_sec` -> `durationSec`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;

    #[test]
    fn snake_case_fields_become_camel_case() {
        assert_eq!(camel_case("duration_sec"), "durationSec");
        assert_eq!(camel_case("niche"), "niche");
        assert_eq!(camel_case("max_titles_per_region"), "maxTitlesPerRegion");
    }

    #[test]
    fn validation_message_names_the_wire_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "duration_sec",
            ValidationError::new("range").with_message("must be between 10 and 120 seconds".into()),
        );
        errors.add("count", ValidationError::new("range"));

        let CoreError::Validation(message) = CoreError::from(errors);
        assert_eq!(
            message,
            "count: range; durationSec: must be between 10 and 120 seconds"
        );
    }
}
