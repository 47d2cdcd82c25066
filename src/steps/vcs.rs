//! Version-control initialization.

use anyhow::Result;

use crate::git;
use crate::sequencer::StepContext;

/// Initialize git in the project directory. Safe to repeat: an existing
/// repository is detected and left alone.
pub fn init_repository(ctx: &mut StepContext) -> Result<String> {
    if git::is_initialized(ctx.runner)? {
        return Ok("already initialized".to_string());
    }

    git::init(ctx.runner)?;
    Ok("initialized empty repository".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CommandOutput, CommandRunner};
    use std::cell::RefCell;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct RecordingGit {
        initialized: RefCell<bool>,
        calls: RefCell<Vec<String>>,
    }

    impl CommandRunner for RecordingGit {
        fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
            let call = format!("{} {}", program, args.join(" "));
            self.calls.borrow_mut().push(call);

            let status = match args.first() {
                Some(&"rev-parse") => {
                    if *self.initialized.borrow() {
                        0
                    } else {
                        128
                    }
                }
                Some(&"init") => {
                    *self.initialized.borrow_mut() = true;
                    0
                }
                _ => 0,
            };
            Ok(CommandOutput {
                status,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn repeated_runs_leave_state_unchanged() -> Result<()> {
        let temp = TempDir::new()?;
        let runner = RecordingGit {
            initialized: RefCell::new(false),
            calls: RefCell::new(Vec::new()),
        };

        let mut input = Cursor::new(Vec::new());
        let mut ctx = StepContext {
            root: temp.path(),
            runner: &runner,
            input: &mut input,
        };

        assert_eq!(init_repository(&mut ctx)?, "initialized empty repository");
        assert_eq!(init_repository(&mut ctx)?, "already initialized");

        // exactly one git init across both runs
        let calls = runner.calls.borrow();
        assert_eq!(calls.iter().filter(|c| c.as_str() == "git init").count(), 1);
        Ok(())
    }

    #[test]
    fn existing_repository_is_not_reinitialized() -> Result<()> {
        let temp = TempDir::new()?;
        let runner = RecordingGit {
            initialized: RefCell::new(true),
            calls: RefCell::new(Vec::new()),
        };

        let mut input = Cursor::new(Vec::new());
        let mut ctx = StepContext {
            root: temp.path(),
            runner: &runner,
            input: &mut input,
        };

        assert_eq!(init_repository(&mut ctx)?, "already initialized");
        assert!(!runner.calls.borrow().iter().any(|c| c == "git init"));
        Ok(())
    }
}
