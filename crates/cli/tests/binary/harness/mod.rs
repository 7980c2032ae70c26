use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Pre-configured `assert_cmd::Command` for the `berth` binary.
///
/// Clears berth-specific env vars to prevent test environment leaks.
pub fn berth_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_berth"));
    cmd.env_remove("BERTH_ENV_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Path to a sample descriptor shipped in the workspace.
pub fn descriptor(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../descriptors").join(name)
}

/// Scratch directory holding templates and env files for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Write `contents` to `name` and return its path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `berth <subcommand> -f <template> --no-process-env`.
    pub fn berth(&self, subcommand: &str, template: &Path) -> Command {
        let mut cmd = berth_cmd();
        cmd.arg(subcommand).arg("-f").arg(template).arg("--no-process-env");
        cmd
    }
}
