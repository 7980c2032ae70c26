use std::path::PathBuf;

use berth_descriptor::DescriptorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Berth: render deployment descriptors with runtime substitutions.
#[derive(Debug, Parser)]
#[command(name = "berth", version, about)]
pub struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a descriptor template and print the resolved descriptor.
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Write the resolved descriptor here instead of stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Render a descriptor template and report problems without printing it.
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List the placeholders a template references.
    Vars {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Template and environment source shared by every command.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to the descriptor template (`.json` or `.hcl`).
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Schema to validate against.
    #[arg(long, value_enum, default_value_t = KindArg::Auto)]
    pub kind: KindArg,

    /// Dotenv file with substitution values (repeatable, later files win).
    #[arg(long = "env-file", value_name = "PATH", env = "BERTH_ENV_FILE")]
    pub env_files: Vec<PathBuf>,

    /// Substitution value (KEY=VALUE), overrides every other source.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub sets: Vec<String>,

    /// Do not read substitution values from the process environment.
    #[arg(long)]
    pub no_process_env: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Detect from the document's top-level keys.
    Auto,
    Service,
    Task,
    Fragment,
}

impl KindArg {
    pub fn forced(self) -> Option<DescriptorKind> {
        match self {
            KindArg::Auto => None,
            KindArg::Service => Some(DescriptorKind::Service),
            KindArg::Task => Some(DescriptorKind::Task),
            KindArg::Fragment => Some(DescriptorKind::Fragment),
        }
    }
}
