use std::collections::HashMap;
use std::path::Path;

use crate::args::InputArgs;
use crate::error::CliError;

/// Build the substitution environment for a render.
///
/// Sources, lowest precedence first: the process environment, each env file
/// in order, then `--set` overrides.
pub fn assemble(args: &InputArgs) -> Result<HashMap<String, String>, CliError> {
    let mut env = HashMap::new();

    if !args.no_process_env {
        // Non-UTF-8 variables can never match a placeholder.
        env.extend(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        );
    }

    for path in &args.env_files {
        let values = read_env_file(path)?;
        tracing::debug!(path = %path.display(), count = values.len(), "loaded env file");
        env.extend(values);
    }

    for set in &args.sets {
        let (key, value) = parse_set(set)?;
        env.insert(key, value);
    }

    Ok(env)
}

/// Read `KEY=VALUE` pairs from a dotenv file without touching the process environment.
fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, CliError> {
    let iter = dotenv::from_path_iter(path).map_err(|e| env_file_error(path, e))?;
    iter.map(|item| item.map_err(|e| env_file_error(path, e))).collect()
}

fn env_file_error(path: &Path, err: dotenv::Error) -> CliError {
    match err {
        dotenv::Error::Io(e) => CliError::io_at(path, e),
        other => CliError::Arg(format!("{}: {other}", path.display())),
    }
}

/// Parse a `--set KEY=VALUE` argument.
fn parse_set(arg: &str) -> Result<(String, String), CliError> {
    let Some((key, value)) = arg.split_once('=') else {
        return Err(CliError::Arg(format!("invalid --set '{arg}': expected KEY=VALUE")));
    };
    if key.is_empty() {
        return Err(CliError::Arg(format!("invalid --set '{arg}': empty key")));
    }
    if !berth_descriptor::is_identifier(key) {
        tracing::warn!("--set key '{key}' is not a valid placeholder name and will never match");
    }
    Ok((key.to_owned(), value.to_owned()))
}
