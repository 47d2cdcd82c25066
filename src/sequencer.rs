//! Bootstrap sequencer - an ordered list of steps with fatal/advisory gating.
//!
//! Steps run strictly in order. A failed `Fatal` step stops the sequence;
//! a failed `Advisory` step is surfaced as a warning and the sequence
//! continues. Every executed step appends exactly one entry to the log.
//! No rollback of earlier steps is attempted.

use anyhow::Result;
use colored::Colorize;
use std::io::BufRead;
use std::path::Path;

use crate::logger::BootstrapLog;
use crate::runner::CommandRunner;

/// How a step failure affects the rest of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Failure aborts the sequence
    Fatal,
    /// Failure is logged and the sequence continues
    Advisory,
}

/// Everything a step action may touch: the project directory, the command
/// runner, and the operator input stream.
pub struct StepContext<'a> {
    pub root: &'a Path,
    pub runner: &'a dyn CommandRunner,
    pub input: &'a mut dyn BufRead,
}

type Action<'a> = Box<dyn Fn(&mut StepContext) -> Result<String> + 'a>;

/// One discrete unit of setup work. The action's `Ok` value is a short
/// detail message recorded in the log ("already initialized", "node v20.11.0").
pub struct Step<'a> {
    pub name: &'static str,
    pub severity: Severity,
    action: Action<'a>,
}

impl<'a> Step<'a> {
    pub fn fatal(
        name: &'static str,
        action: impl Fn(&mut StepContext) -> Result<String> + 'a,
    ) -> Self {
        Self {
            name,
            severity: Severity::Fatal,
            action: Box::new(action),
        }
    }

    pub fn advisory(
        name: &'static str,
        action: impl Fn(&mut StepContext) -> Result<String> + 'a,
    ) -> Self {
        Self {
            name,
            severity: Severity::Advisory,
            action: Box::new(action),
        }
    }
}

/// Outcome of one full sequence run
#[derive(Debug)]
pub struct RunSummary {
    /// Steps that actually executed (the failed fatal step included)
    pub executed: usize,
    /// Advisory failures encountered along the way
    pub warnings: usize,
    /// Name of the fatal step that stopped the sequence, if any
    pub failed: Option<String>,
}

impl RunSummary {
    pub fn succeeded(&self) -> bool {
        self.failed.is_none()
    }
}

/// Executes an ordered list of steps against a step context
pub struct Sequencer {
    log: BootstrapLog,
}

impl Sequencer {
    pub fn new(log: BootstrapLog) -> Self {
        Self { log }
    }

    /// Run `steps` in order, short-circuiting on the first fatal failure.
    ///
    /// Errors from the sequencer itself (log I/O) propagate as `Err`; step
    /// failures are reported through the summary.
    pub fn run(&mut self, steps: Vec<Step<'_>>, ctx: &mut StepContext<'_>) -> Result<RunSummary> {
        let mut summary = RunSummary {
            executed: 0,
            warnings: 0,
            failed: None,
        };

        for step in steps {
            summary.executed += 1;

            match (step.action)(ctx) {
                Ok(detail) => {
                    self.log.append(&format!("{}: {}", step.name, detail))?;
                    println!("   {} {} {}", "✓".green().bold(), step.name, detail.dimmed());
                }
                Err(e) => {
                    self.log.append(&format!("{}: {}", step.name, e))?;
                    match step.severity {
                        Severity::Fatal => {
                            println!("   {} {} - {}", "✗".red().bold(), step.name, e);
                            summary.failed = Some(step.name.to_string());
                            break;
                        }
                        Severity::Advisory => {
                            println!("   {} {} - {}", "⚠".yellow().bold(), step.name, e);
                            summary.warnings += 1;
                        }
                    }
                }
            }
        }

        Ok(summary)
    }
}
