//! The bootstrap step catalogue.
//!
//! Steps are defined once at process start and executed exactly once per
//! run, in fixed order. Severity policy: missing prerequisites and failed
//! artifact writes are fatal; container-engine absence and audit findings
//! are advisory.

pub mod env_file;
pub mod packages;
pub mod prereqs;
pub mod scaffold;
pub mod vcs;

use crate::sequencer::Step;

/// The full `up` sequence, in execution order
pub fn default_sequence(project_name: &str) -> Vec<Step<'_>> {
    vec![
        Step::fatal("check npm", prereqs::check_npm),
        Step::fatal("check node version", prereqs::check_node_version),
        Step::advisory("check docker", prereqs::check_docker),
        Step::fatal("collect configuration", move |ctx| {
            env_file::ensure(ctx, project_name)
        }),
        Step::fatal("install packages", packages::install),
        Step::advisory("audit packages", packages::audit),
        Step::fatal("write ci workflow", move |ctx| {
            scaffold::write_ci_workflow(ctx, project_name)
        }),
        Step::fatal("write dockerfile", move |ctx| {
            scaffold::write_dockerfile(ctx, project_name)
        }),
        Step::fatal("write readme", move |ctx| {
            scaffold::write_readme(ctx, project_name)
        }),
        Step::fatal("initialize git repository", vcs::init_repository),
    ]
}
