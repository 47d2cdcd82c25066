use anyhow::{Context, Result};
use std::process::Command;

pub fn execute() -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;

    println!("📦 Updating dependencies...");

    let status = Command::new("npm")
        .current_dir(&root)
        .arg("update")
        .status()
        .context("Failed to run npm update")?;

    if status.success() {
        println!("✅ Dependencies updated");
        Ok(())
    } else {
        anyhow::bail!("Update failed")
    }
}
