#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod placeholder;
mod substitute;
mod types;
mod unique;
mod validate;

use std::collections::HashMap;

use serde_json::Value;

use crate::unique::UniqueKeys;

pub use error::{ErrorReport, RenderError, Result, UnresolvedEntry, ViolationEntry};
pub use placeholder::is_identifier;
pub use substitute::placeholders;
pub use types::*;

/// Parse a template and render it against `env`.
pub fn render(
    input: &str,
    format: Format,
    env: &HashMap<String, String>,
) -> Result<ResolvedDescriptor> {
    let template = parse_raw(input, format)?;
    render_value(&template, env)
}

/// Render an already-parsed template, detecting its kind from its top-level keys.
pub fn render_value(template: &Value, env: &HashMap<String, String>) -> Result<ResolvedDescriptor> {
    render_as(template, DescriptorKind::detect(template), env)
}

/// Render an already-parsed template against the schema for `kind`.
///
/// Substitution and validation both run to completion, so the error lists every
/// missing placeholder and every violation. Nothing is returned unless the
/// whole render succeeds.
pub fn render_as(
    template: &Value,
    kind: DescriptorKind,
    env: &HashMap<String, String>,
) -> Result<ResolvedDescriptor> {
    let mut errors = Vec::new();

    let document = substitute::substitute(template, env, &mut errors);
    let descriptor = validate::resolve(kind, &document, &mut errors);

    tracing::debug!(%kind, errors = errors.len(), "rendered descriptor");

    match (descriptor, RenderError::collect(errors)) {
        (Some(descriptor), None) => Ok(ResolvedDescriptor::new(kind, document, descriptor)),
        (_, Some(err)) => Err(err),
        (None, None) => Err(RenderError::SchemaViolation {
            path: "(root)".to_owned(),
            message: format!("document is not a valid {kind} descriptor"),
        }),
    }
}

/// Parse a template into a JSON tree without substituting or validating.
///
/// An object that repeats a key is malformed.
pub fn parse_raw(input: &str, format: Format) -> Result<Value> {
    let parsed = match format {
        Format::Json => serde_json::from_str::<UniqueKeys>(input).map_err(|e| e.to_string()),
        Format::Hcl => hcl::from_str::<UniqueKeys>(input).map_err(|e| e.to_string()),
    };
    parsed.map(|UniqueKeys(tree)| tree).map_err(RenderError::MalformedInput)
}
