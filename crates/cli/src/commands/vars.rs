use serde::Serialize;

use crate::args::InputArgs;
use crate::error::CliError;
use crate::output::{self, OutputMode};

/// A placeholder referenced by a template and whether the environment sets it.
#[derive(Debug, Clone, Serialize)]
pub struct VarStatus {
    pub name: String,
    pub resolved: bool,
}

pub fn vars(input: &InputArgs, mode: OutputMode) -> Result<(), CliError> {
    let env = crate::env::assemble(input)?;
    let template = super::load_template(input)?;

    let vars: Vec<VarStatus> = berth_descriptor::placeholders(&template)
        .into_iter()
        .map(|name| VarStatus { resolved: env.contains_key(&name), name })
        .collect();

    output::print(mode, &vars, |v| output::table::print_vars(v));
    Ok(())
}
