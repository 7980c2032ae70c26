#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod args;
mod commands;
mod env;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::error::CliError;
use crate::output::OutputMode;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    if let Err(e) = commands::dispatch(cli.command, mode) {
        report_error(&e, mode);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn report_error(err: &CliError, mode: OutputMode) {
    match (err, mode) {
        (CliError::Render(e), OutputMode::Json) => output::json::eprint_json(&e.report()),
        (CliError::Render(e), OutputMode::Human) => {
            eprintln!("error: render failed");
            output::table::eprint_report(&e.report());
        }
        (other, OutputMode::Json) => {
            output::json::eprint_json(&serde_json::json!({ "error": other.to_string() }))
        }
        (other, OutputMode::Human) => eprintln!("error: {other}"),
    }
}
