use anyhow::{Context, Result};
use std::process::Command;

pub fn execute() -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;

    println!("🔄 Starting development server (ctrl-c to stop)...");

    let status = Command::new("npm")
        .current_dir(&root)
        .args(["run", "dev"])
        .status()
        .context("Failed to run npm run dev")?;

    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("Development server exited with an error")
    }
}
