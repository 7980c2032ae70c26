use berth_descriptor::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The template could not be rendered.
    #[error("render failed:\n{0}")]
    Render(#[from] RenderError),

    /// I/O errors (reading templates and env files, writing output).
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Argument validation errors.
    #[error("{0}")]
    Arg(String),
}

impl CliError {
    /// Attach the offending path to an I/O error.
    pub fn io_at(path: &std::path::Path, err: std::io::Error) -> Self {
        CliError::Io(std::io::Error::new(err.kind(), format!("{}: {err}", path.display())))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Render(e) if e.is_malformed() => 65, // EX_DATAERR
            CliError::Render(_) => 1,
            CliError::Io(_) => 4,
            CliError::Arg(_) => 64, // EX_USAGE
        }
    }
}
