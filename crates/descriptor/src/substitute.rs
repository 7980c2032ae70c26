use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::error::RenderError;
use crate::placeholder::{self, Segment};

/// Dotted path of an object member.
pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() { key.to_owned() } else { format!("{parent}.{key}") }
}

/// Path of an array element.
pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Display form of a path; the document root has an empty path.
pub(crate) fn display_path(path: &str) -> String {
    if path.is_empty() { "(root)".to_owned() } else { path.to_owned() }
}

/// Replace every `${NAME}` in the string values of `template` with `env[NAME]`.
///
/// Single pass: substituted text is never scanned again. Missing names are
/// reported once each, at their first occurrence, and left in place so that
/// validation can still run over the rest of the tree. Object keys are
/// substituted too; two keys of one object that resolve to the same string are
/// a violation.
pub fn substitute(
    template: &Value,
    env: &HashMap<String, String>,
    errors: &mut Vec<RenderError>,
) -> Value {
    let mut walker = Walker { env, reported: HashSet::new(), errors };
    walker.walk("", template)
}

/// Every distinct placeholder name in `template`, in first-occurrence order.
pub fn placeholders(template: &Value) -> Vec<String> {
    let mut names = Vec::new();
    collect_names(template, &mut names);
    names
}

fn collect_names(value: &Value, names: &mut Vec<String>) {
    match value {
        Value::String(s) => collect_str_names(s, names),
        Value::Array(items) => items.iter().for_each(|v| collect_names(v, names)),
        Value::Object(map) => {
            for (key, v) in map {
                collect_str_names(key, names);
                collect_names(v, names);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

fn collect_str_names(s: &str, names: &mut Vec<String>) {
    // Malformed tokens are reported by `substitute`, not here.
    let mut ignored = Vec::new();
    for segment in placeholder::scan("", s, &mut ignored) {
        if let Segment::Placeholder(name) = segment
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_owned());
        }
    }
}

struct Walker<'a> {
    env: &'a HashMap<String, String>,
    reported: HashSet<String>,
    errors: &'a mut Vec<RenderError>,
}

impl Walker<'_> {
    fn walk(&mut self, path: &str, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.substitute_str(path, s)),
            Value::Array(items) => Value::Array(
                items.iter().enumerate().map(|(i, v)| self.walk(&index_path(path, i), v)).collect(),
            ),
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, v) in map {
                    let member_path = child_path(path, key);
                    let resolved_key = self.substitute_str(&member_path, key);
                    let resolved = self.walk(&member_path, v);
                    if out.contains_key(&resolved_key) {
                        self.errors.push(RenderError::SchemaViolation {
                            path: member_path,
                            message: format!("key resolves to '{resolved_key}', already defined"),
                        });
                    } else {
                        out.insert(resolved_key, resolved);
                    }
                }
                Value::Object(out)
            }
            other => other.clone(),
        }
    }

    fn substitute_str(&mut self, path: &str, value: &str) -> String {
        if !placeholder::contains_token(value) {
            return value.to_owned();
        }

        let field = display_path(path);
        let mut out = String::with_capacity(value.len());
        for segment in placeholder::scan(&field, value, self.errors) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match self.env.get(name) {
                    Some(resolved) => out.push_str(resolved),
                    None => {
                        if self.reported.insert(name.to_owned()) {
                            self.errors.push(RenderError::UnresolvedPlaceholder {
                                path: field.clone(),
                                name: name.to_owned(),
                            });
                        }
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}
