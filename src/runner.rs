//! Shell-outs to external tools behind a swappable capability.
//!
//! Every step in the bootstrap sequence reaches the system through
//! [`CommandRunner`], so tests can substitute a scripted fake instead of
//! invoking real package managers.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of one external-tool invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Capability for invoking external tools
pub trait CommandRunner {
    /// Run `program` with `args`, capturing exit status and output.
    ///
    /// Returns an error when the program could not be started at all
    /// (typically: not on PATH). A started program that exits non-zero is
    /// an `Ok` with a non-zero status.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs commands against the real system, rooted at the project directory
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .output()
            .with_context(|| format!("Failed to run {} {}", program, args.join(" ")))?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
