//! Version-control helpers for the bootstrap sequence.
//!
//! Thin wrappers over the `git` executable, routed through the command
//! runner so tests never need a real repository.

use anyhow::{Context, Result};

use crate::runner::CommandRunner;

/// Check whether the project directory already belongs to a repository
pub fn is_initialized(runner: &dyn CommandRunner) -> Result<bool> {
    match runner.run("git", &["rev-parse", "--git-dir"]) {
        Ok(output) => Ok(output.success()),
        // git missing entirely counts as "not initialized"; the init step
        // will surface the real error
        Err(_) => Ok(false),
    }
}

/// Initialize a repository in the project directory
pub fn init(runner: &dyn CommandRunner) -> Result<()> {
    let output = runner
        .run("git", &["init"])
        .context("Failed to run git init")?;

    if !output.success() {
        anyhow::bail!("git init failed: {}", output.stderr.trim());
    }
    Ok(())
}

/// Create a lightweight tag
pub fn create_tag(runner: &dyn CommandRunner, name: &str) -> Result<()> {
    let output = runner
        .run("git", &["tag", name])
        .context("Failed to run git tag")?;

    if !output.success() {
        anyhow::bail!("git tag failed: {}", output.stderr.trim());
    }
    Ok(())
}

/// Latest `git describe` output, if the repository has any history
pub fn describe(runner: &dyn CommandRunner) -> Result<Option<String>> {
    match runner.run("git", &["describe", "--tags", "--always"]) {
        Ok(output) if output.success() => Ok(Some(output.stdout.trim().to_string())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandOutput;
    use std::cell::RefCell;

    /// Answers every git invocation from a canned script
    struct ScriptedGit {
        rev_parse_status: i32,
        init_status: i32,
        calls: RefCell<Vec<String>>,
    }

    impl CommandRunner for ScriptedGit {
        fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            let status = match args.first() {
                Some(&"rev-parse") => self.rev_parse_status,
                Some(&"init") => self.init_status,
                _ => 0,
            };
            Ok(CommandOutput {
                status,
                stdout: String::new(),
                stderr: if status == 0 {
                    String::new()
                } else {
                    "fatal: scripted failure".to_string()
                },
            })
        }
    }

    #[test]
    fn initialized_when_rev_parse_succeeds() -> Result<()> {
        let git = ScriptedGit {
            rev_parse_status: 0,
            init_status: 0,
            calls: RefCell::new(Vec::new()),
        };
        assert!(is_initialized(&git)?);
        Ok(())
    }

    #[test]
    fn not_initialized_when_rev_parse_fails() -> Result<()> {
        let git = ScriptedGit {
            rev_parse_status: 128,
            init_status: 0,
            calls: RefCell::new(Vec::new()),
        };
        assert!(!is_initialized(&git)?);
        Ok(())
    }

    #[test]
    fn init_failure_surfaces_stderr() {
        let git = ScriptedGit {
            rev_parse_status: 128,
            init_status: 1,
            calls: RefCell::new(Vec::new()),
        };
        let err = init(&git).unwrap_err();
        assert!(err.to_string().contains("scripted failure"));
    }

    #[test]
    fn tag_failure_surfaces_stderr() {
        struct RejectingGit;
        impl CommandRunner for RejectingGit {
            fn run(&self, _program: &str, _args: &[&str]) -> Result<CommandOutput> {
                Ok(CommandOutput {
                    status: 128,
                    stdout: String::new(),
                    stderr: "fatal: tag 'v0.1.0' already exists".to_string(),
                })
            }
        }
        let err = create_tag(&RejectingGit, "v0.1.0").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn describe_is_none_without_history() -> Result<()> {
        struct NoHistory;
        impl CommandRunner for NoHistory {
            fn run(&self, _program: &str, _args: &[&str]) -> Result<CommandOutput> {
                Ok(CommandOutput {
                    status: 128,
                    stdout: String::new(),
                    stderr: "fatal: no names found".to_string(),
                })
            }
        }
        assert_eq!(describe(&NoHistory)?, None);
        Ok(())
    }
}
