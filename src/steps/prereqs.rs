//! Prerequisite probes - package manager, runtime version, container engine.

use anyhow::{bail, Result};

use crate::sequencer::StepContext;

/// Oldest node major the generated project supports
pub const MIN_NODE_MAJOR: u32 = 18;

pub fn check_npm(ctx: &mut StepContext) -> Result<String> {
    match ctx.runner.run("npm", &["--version"]) {
        Ok(output) if output.success() => Ok(format!("npm {}", output.stdout.trim())),
        _ => bail!("npm is not installed"),
    }
}

pub fn check_node_version(ctx: &mut StepContext) -> Result<String> {
    let output = match ctx.runner.run("node", &["--version"]) {
        Ok(output) if output.success() => output,
        _ => bail!("node is not installed"),
    };

    let version = output.stdout.trim().to_string();
    match major_version(&version) {
        Some(major) if major >= MIN_NODE_MAJOR => Ok(format!("node {version}")),
        Some(_) => bail!("node {version} is below the required v{MIN_NODE_MAJOR}"),
        None => bail!("could not parse node version from '{version}'"),
    }
}

pub fn check_docker(ctx: &mut StepContext) -> Result<String> {
    match ctx.runner.run("docker", &["--version"]) {
        Ok(output) if output.success() => {
            Ok(output.stdout.lines().next().unwrap_or("").trim().to_string())
        }
        _ => bail!("docker is not installed; container builds will be unavailable"),
    }
}

/// Parse the major component out of `v20.11.0`-style output
pub fn major_version(version: &str) -> Option<u32> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()?
        .parse()
        .ok()
}
