//! Pure form validation.
//!
//! Fail-fast: the outcome names the first failing field in template
//! declaration order. Advisory findings become warnings and never block
//! submission. The filesystem is never consulted.

use std::path::Path;

use crate::app::field::FieldKind;
use crate::app::form_state::FormState;
use crate::app::template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Warning(String),
    Error {
        field: &'static str,
        message: String,
    },
}

impl ValidationOutcome {
    /// Whether the save action may run. Warnings are advisory only.
    pub fn allows_submit(&self) -> bool {
        !matches!(self, Self::Error { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Warning(msg) | Self::Error { message: msg, .. } => Some(msg),
        }
    }
}

pub fn validate(form: &FormState) -> ValidationOutcome {
    let mut warning: Option<String> = None;

    for field in form.fields() {
        let value = field.value.trim();

        if value.is_empty() {
            if field.spec.required {
                return ValidationOutcome::Error {
                    field: field.spec.id,
                    message: format!("Please enter {}", field.spec.label.to_lowercase()),
                };
            }
            continue;
        }

        match field.spec.kind {
            FieldKind::Port => match value.parse::<u16>() {
                Err(_) => {
                    return ValidationOutcome::Error {
                        field: field.spec.id,
                        message: "Invalid port".to_string(),
                    };
                }
                Ok(0) => {
                    return ValidationOutcome::Error {
                        field: field.spec.id,
                        message: "Port must be greater than 0".to_string(),
                    };
                }
                Ok(_) => {}
            },
            FieldKind::Url => {
                if let Err(message) = check_url(value) {
                    return ValidationOutcome::Error {
                        field: field.spec.id,
                        message,
                    };
                }
            }
            FieldKind::Path => {
                if warning.is_none() {
                    warning = extension_warning(form, value);
                }
            }
            FieldKind::Text | FieldKind::Secret => {}
        }
    }

    match warning {
        Some(message) => ValidationOutcome::Warning(message),
        None => ValidationOutcome::Valid,
    }
}

/// Minimal structural check: a scheme and a non-empty host.
/// Scheme grammar per RFC 3986: a letter, then letters/digits/`+`/`-`/`.`.
fn check_url(value: &str) -> Result<(), String> {
    let Some((scheme, rest)) = value.split_once("://") else {
        return Err("Invalid URL: missing scheme".to_string());
    };
    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_ok {
        return Err("Invalid URL: missing scheme".to_string());
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        return Err("Invalid URL: missing host".to_string());
    }
    Ok(())
}

fn extension_warning(form: &FormState, value: &str) -> Option<String> {
    let expected = template::expected_extensions(form.kind());
    if expected.is_empty() {
        return None;
    }
    let extension = Path::new(value)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    match extension {
        Some(ext) if expected.contains(&ext.as_str()) => None,
        _ => Some(format!(
            "Unexpected file extension (expected .{})",
            expected.join(" or .")
        )),
    }
}
