use serde::Serialize;

/// Errors that can occur when rendering a descriptor template.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The template is not well-formed structured data.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A `${NAME}` token has no matching entry in the environment.
    #[error("{path}: unresolved placeholder '${{{name}}}'")]
    UnresolvedPlaceholder { path: String, name: String },
    /// A field or invariant check failed.
    #[error("{path}: {message}")]
    SchemaViolation { path: String, message: String },
    /// Multiple errors collected during a render pass.
    #[error("{}", display_multiple(.0))]
    Multiple(Vec<RenderError>),
}

fn display_multiple(errors: &[RenderError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n")
}

impl RenderError {
    /// Collapse a list of collected errors into a single error.
    ///
    /// Returns `None` for an empty list.
    pub fn collect(mut errors: Vec<RenderError>) -> Option<RenderError> {
        match errors.len() {
            0 => None,
            1 => Some(errors.remove(0)),
            _ => Some(RenderError::Multiple(errors)),
        }
    }

    /// All leaf errors, with nested `Multiple`s flattened.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &RenderError> + '_> {
        match self {
            RenderError::Multiple(errors) => Box::new(errors.iter().flat_map(|e| e.iter())),
            other => Box::new(std::iter::once(other)),
        }
    }

    /// Names of every placeholder that failed to resolve, in report order.
    pub fn unresolved_names(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|e| match e {
                RenderError::UnresolvedPlaceholder { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every schema violation as `(path, message)`.
    pub fn violations(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|e| match e {
                RenderError::SchemaViolation { path, message } => {
                    Some((path.as_str(), message.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn is_malformed(&self) -> bool {
        self.iter().any(|e| matches!(e, RenderError::MalformedInput(_)))
    }

    /// Serializable summary of this error, for machine-readable output.
    pub fn report(&self) -> ErrorReport {
        let mut report = ErrorReport::default();
        for e in self.iter() {
            match e {
                RenderError::MalformedInput(msg) => report.malformed = Some(msg.clone()),
                RenderError::UnresolvedPlaceholder { path, name } => report
                    .unresolved
                    .push(UnresolvedEntry { name: name.clone(), path: path.clone() }),
                RenderError::SchemaViolation { path, message } => report
                    .violations
                    .push(ViolationEntry { path: path.clone(), message: message.clone() }),
                RenderError::Multiple(_) => {}
            }
        }
        report
    }
}

/// Aggregated render failure, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malformed: Option<String>,
    pub unresolved: Vec<UnresolvedEntry>,
    pub violations: Vec<ViolationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnresolvedEntry {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationEntry {
    pub path: String,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, RenderError>;
