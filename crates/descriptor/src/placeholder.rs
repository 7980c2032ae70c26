use crate::error::RenderError;

/// A segment of a scanned string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text between placeholder tokens.
    Literal(&'a str),
    /// `${NAME}`, holding `NAME`.
    Placeholder(&'a str),
}

/// Split a string value into literal text and `${NAME}` tokens.
///
/// A `$` not followed by `{` is literal. An unclosed `${` or a token whose
/// body is not an identifier pushes a schema violation at `path`; the offending
/// text is kept as a literal so scanning can continue.
pub fn scan<'a>(path: &str, value: &'a str, errors: &mut Vec<RenderError>) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut rest = value;

    loop {
        match rest.find("${") {
            None => {
                if !rest.is_empty() {
                    segments.push(Segment::Literal(rest));
                }
                break;
            }
            Some(start) => {
                if start > 0 {
                    segments.push(Segment::Literal(&rest[..start]));
                }

                let after_dollar_brace = &rest[start + 2..];
                match after_dollar_brace.find('}') {
                    None => {
                        errors.push(RenderError::SchemaViolation {
                            path: path.to_owned(),
                            message: format!("invalid placeholder: unclosed '${{' in '{value}'"),
                        });
                        segments.push(Segment::Literal(&rest[start..]));
                        break;
                    }
                    Some(end) => {
                        let name = &after_dollar_brace[..end];
                        if is_identifier(name) {
                            segments.push(Segment::Placeholder(name));
                        } else {
                            errors.push(RenderError::SchemaViolation {
                                path: path.to_owned(),
                                message: format!(
                                    "invalid placeholder '${{{name}}}': expected an identifier"
                                ),
                            });
                            segments.push(Segment::Literal(&rest[start..start + end + 3]));
                        }
                        rest = &after_dollar_brace[end + 1..];
                    }
                }
            }
        }
    }

    segments
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether a string holds anything that looks like a token, well-formed or not.
pub fn contains_token(value: &str) -> bool {
    value.contains("${")
}
