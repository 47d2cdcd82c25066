use anyhow::{Context, Result};
use std::process::Command;

use primer::git;
use primer::runner::SystemRunner;

pub fn execute() -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;

    let runner = SystemRunner::new(&root);
    match git::describe(&runner)? {
        Some(version) => println!("📦 Building {version}..."),
        None => println!("📦 Building..."),
    }

    let status = Command::new("npm")
        .current_dir(&root)
        .args(["run", "build"])
        .status()
        .context("Failed to run npm run build")?;

    if status.success() {
        println!("✅ Build complete");
        Ok(())
    } else {
        anyhow::bail!("Build failed")
    }
}
