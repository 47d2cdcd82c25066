use anyhow::{Context, Result};

use primer::git;
use primer::runner::SystemRunner;

pub fn execute(tag: &str) -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;

    let runner = SystemRunner::new(&root);
    git::create_tag(&runner, tag)?;

    let version = git::describe(&runner)?.unwrap_or_else(|| tag.to_string());
    println!("🏷️  Tagged {version}");
    Ok(())
}
