//! Template artifacts written into the project.
//!
//! Contents are opaque template outputs owned by the external ecosystem
//! (CI runner, container engine); the only substitution is the project
//! name.

use anyhow::{Context, Result};
use std::fs;

use crate::sequencer::StepContext;

const CI_WORKFLOW: &str = include_str!("../../resources/templates/ci.yml.tmpl");
const DOCKERFILE: &str = include_str!("../../resources/templates/Dockerfile.tmpl");
const DOCKERIGNORE: &str = include_str!("../../resources/templates/dockerignore.tmpl");
const README: &str = include_str!("../../resources/templates/README.md.tmpl");

pub const WORKFLOW_PATH: &str = ".github/workflows/ci.yml";

pub fn write_ci_workflow(ctx: &mut StepContext, project_name: &str) -> Result<String> {
    let dir = ctx.root.join(".github").join("workflows");
    fs::create_dir_all(&dir).context("Failed to create .github/workflows")?;

    let content = CI_WORKFLOW.replace("{{.name}}", project_name);
    fs::write(dir.join("ci.yml"), content).context("Failed to write ci.yml")?;
    Ok(format!("wrote {WORKFLOW_PATH}"))
}

pub fn write_dockerfile(ctx: &mut StepContext, project_name: &str) -> Result<String> {
    let content = DOCKERFILE.replace("{{.name}}", project_name);
    fs::write(ctx.root.join("Dockerfile"), content).context("Failed to write Dockerfile")?;
    fs::write(ctx.root.join(".dockerignore"), DOCKERIGNORE)
        .context("Failed to write .dockerignore")?;
    Ok("wrote Dockerfile".to_string())
}

/// An existing README is never overwritten
pub fn write_readme(ctx: &mut StepContext, project_name: &str) -> Result<String> {
    let path = ctx.root.join("README.md");
    if path.exists() {
        return Ok("already present".to_string());
    }

    let content = README.replace("{{.name}}", project_name);
    fs::write(&path, content).context("Failed to write README.md")?;
    Ok("wrote README.md".to_string())
}
