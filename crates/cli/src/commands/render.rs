use std::path::Path;

use serde::Serialize;

use crate::args::InputArgs;
use crate::error::CliError;
use crate::output::{self, OutputMode};

/// Render and emit the resolved descriptor. The descriptor is JSON in every
/// output mode, so `--json` has no effect here.
pub fn render(input: &InputArgs, output: Option<&Path>) -> Result<(), CliError> {
    let env = crate::env::assemble(input)?;
    let resolved = super::render_input(input, &env)?;

    let mut text = resolved.to_json_pretty();
    text.push('\n');

    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| CliError::io_at(path, e))?;
            tracing::info!(path = %path.display(), "wrote resolved descriptor");
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ValidateResult {
    valid: bool,
    kind: String,
}

pub fn validate(input: &InputArgs, mode: OutputMode) -> Result<(), CliError> {
    let env = crate::env::assemble(input)?;
    let resolved = super::render_input(input, &env)?;

    let result = ValidateResult { valid: true, kind: resolved.kind().to_string() };
    output::print(mode, &result, |r| println!("ok ({} descriptor)", r.kind));
    Ok(())
}
