use std::str::FromStr;

use crate::error::RenderError;
use crate::placeholder::contains_token;

fn violation(path: &str, message: impl Into<String>) -> RenderError {
    RenderError::SchemaViolation { path: path.to_owned(), message: message.into() }
}

/// A required field must be present.
pub fn require<T>(path: &str, value: Option<T>, errors: &mut Vec<RenderError>) -> Option<T> {
    if value.is_none() {
        errors.push(violation(path, "required field is missing"));
    }
    value
}

/// A required identifier must be present and non-blank.
pub fn require_identifier(
    path: &str,
    value: Option<&String>,
    errors: &mut Vec<RenderError>,
) -> String {
    match require(path, value, errors) {
        Some(v) => {
            check_identifier(path, v, errors);
            v.clone()
        }
        None => String::new(),
    }
}

/// Identifiers must not be blank.
pub fn check_identifier(path: &str, value: &str, errors: &mut Vec<RenderError>) {
    if value.trim().is_empty() {
        errors.push(violation(path, "must not be empty"));
    }
}

/// Port must be within 1..=65535.
pub fn check_port(path: &str, port: i64, errors: &mut Vec<RenderError>) -> u16 {
    match u16::try_from(port) {
        Ok(p) if p > 0 => p,
        _ => {
            errors.push(violation(path, format!("port must be between 1 and 65535, got {port}")));
            0
        }
    }
}

/// Value must be greater than zero.
pub fn check_positive(path: &str, value: i64, errors: &mut Vec<RenderError>) -> u32 {
    match u32::try_from(value) {
        Ok(v) if v > 0 => v,
        _ => {
            errors.push(violation(path, format!("must be a positive integer, got {value}")));
            0
        }
    }
}

/// Value must not be negative.
pub fn check_non_negative(path: &str, value: i64, errors: &mut Vec<RenderError>) -> u32 {
    match u32::try_from(value) {
        Ok(v) => v,
        Err(_) => {
            errors.push(violation(path, format!("must be a non-negative integer, got {value}")));
            0
        }
    }
}

/// Percentage must be within 0..=100.
pub fn check_percent(path: &str, value: i64, errors: &mut Vec<RenderError>) -> u8 {
    match u8::try_from(value) {
        Ok(v) if v <= 100 => v,
        _ => {
            errors.push(violation(path, format!("must be between 0 and 100, got {value}")));
            0
        }
    }
}

/// Parse an enumerated string, recording the parser's message on failure.
///
/// A value still holding a token has already been reported and is skipped.
pub fn check_enum<T>(path: &str, value: &str, errors: &mut Vec<RenderError>) -> Option<T>
where
    T: FromStr<Err = String>,
{
    if contains_token(value) {
        return None;
    }
    match value.parse::<T>() {
        Ok(v) => Some(v),
        Err(message) => {
            errors.push(violation(path, message));
            None
        }
    }
}

/// A sequence that must hold at least one entry.
pub fn check_non_empty<T>(path: &str, items: &[T], errors: &mut Vec<RenderError>) {
    if items.is_empty() {
        errors.push(violation(path, "must contain at least one entry"));
    }
}
