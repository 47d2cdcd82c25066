//! Package-manager steps.

use anyhow::{bail, Context, Result};

use crate::sequencer::StepContext;

pub fn install(ctx: &mut StepContext) -> Result<String> {
    let output = ctx
        .runner
        .run("npm", &["install"])
        .context("Failed to run npm install")?;

    if !output.success() {
        bail!("npm install failed: {}", first_line(&output.stderr));
    }
    Ok("dependencies installed".to_string())
}

pub fn audit(ctx: &mut StepContext) -> Result<String> {
    let output = ctx
        .runner
        .run("npm", &["audit"])
        .context("Failed to run npm audit")?;

    if !output.success() {
        bail!("npm audit reported findings");
    }
    Ok("no known vulnerabilities".to_string())
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("").trim()
}
