mod render;
mod vars;

pub use vars::VarStatus;

use std::collections::HashMap;

use berth_descriptor::{Format, ResolvedDescriptor};

use crate::args::{Command, InputArgs};
use crate::error::CliError;
use crate::output::OutputMode;

pub fn dispatch(cmd: Command, mode: OutputMode) -> Result<(), CliError> {
    match cmd {
        Command::Render { input, output } => render::render(&input, output.as_deref()),

        Command::Validate { input } => render::validate(&input, mode),

        Command::Vars { input } => vars::vars(&input, mode),
    }
}

/// Read and parse the template named by `input`.
fn load_template(input: &InputArgs) -> Result<serde_json::Value, CliError> {
    let text =
        std::fs::read_to_string(&input.file).map_err(|e| CliError::io_at(&input.file, e))?;
    let format = Format::from_path(&input.file);
    tracing::debug!(file = %input.file.display(), ?format, "loaded template");
    Ok(berth_descriptor::parse_raw(&text, format)?)
}

/// Render the template named by `input` against `env`.
fn render_input(
    input: &InputArgs,
    env: &HashMap<String, String>,
) -> Result<ResolvedDescriptor, CliError> {
    let template = load_template(input)?;
    let resolved = match input.kind.forced() {
        Some(kind) => berth_descriptor::render_as(&template, kind, env)?,
        None => berth_descriptor::render_value(&template, env)?,
    };
    tracing::info!(file = %input.file.display(), kind = %resolved.kind(), "rendered");
    Ok(resolved)
}
