use std::collections::HashMap;

use crate::error::RenderError;
use crate::placeholder::contains_token;
use crate::substitute::index_path;

/// Check that `names` (indexed within the sequence at `parent_path`) are unique.
///
/// `what` names the thing being counted, e.g. "container name". Names still
/// holding a token are skipped; substitution already reported them.
pub fn check_unique<'a>(
    parent_path: &str,
    field: &str,
    what: &str,
    names: impl IntoIterator<Item = (usize, &'a str)>,
    errors: &mut Vec<RenderError>,
) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, name) in names.into_iter().filter(|(_, name)| !contains_token(name)) {
        if let Some(first) = seen.get(name) {
            errors.push(RenderError::SchemaViolation {
                path: format!("{}.{field}", index_path(parent_path, index)),
                message: format!(
                    "duplicate {what} '{name}' (first defined at {})",
                    index_path(parent_path, *first)
                ),
            });
        } else {
            seen.insert(name, index);
        }
    }
}

/// Check that a set-valued array holds no repeated entries.
pub fn check_set(path: &str, items: &[String], errors: &mut Vec<RenderError>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, item) in items.iter().enumerate().filter(|(_, item)| !contains_token(item)) {
        if let Some(first) = seen.get(item.as_str()) {
            errors.push(RenderError::SchemaViolation {
                path: index_path(path, index),
                message: format!(
                    "duplicate entry '{item}' (first at {})",
                    index_path(path, *first)
                ),
            });
        } else {
            seen.insert(item.as_str(), index);
        }
    }
}

/// Environment and secret variable names of one container must not overlap.
pub fn check_env_secret_disjoint<'a>(
    container_path: &str,
    env_names: impl IntoIterator<Item = &'a str>,
    secret_names: impl IntoIterator<Item = (usize, &'a str)>,
    errors: &mut Vec<RenderError>,
) {
    let env: Vec<&str> = env_names.into_iter().filter(|name| !contains_token(name)).collect();
    for (index, name) in secret_names {
        if env.contains(&name) {
            errors.push(RenderError::SchemaViolation {
                path: format!("{}.name", index_path(&format!("{container_path}.secrets"), index)),
                message: format!(
                    "'{name}' is defined both as an environment variable and a secret"
                ),
            });
        }
    }
}
