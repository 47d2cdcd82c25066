use anyhow::{Context, Result};
use std::process::Command;

pub fn execute() -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;

    println!("🔍 Auditing dependencies...");

    let status = Command::new("npm")
        .current_dir(&root)
        .arg("audit")
        .status()
        .context("Failed to run npm audit")?;

    if status.success() {
        println!("✅ No known vulnerabilities");
        Ok(())
    } else {
        anyhow::bail!("Audit reported findings")
    }
}
