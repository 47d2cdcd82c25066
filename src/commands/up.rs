use anyhow::{Context, Result};
use colored::Colorize;
use std::io;

use primer::logger::{BootstrapLog, LOG_FILE};
use primer::runner::SystemRunner;
use primer::sequencer::{Sequencer, StepContext};
use primer::steps;

pub fn execute(name: Option<String>) -> Result<i32> {
    let root = std::env::current_dir().context("Failed to get current directory")?;
    let project_name = match name {
        Some(name) => name,
        None => root
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("app")
            .to_string(),
    };

    println!("🚀 Bootstrapping {}\n", project_name.bold());

    let log = BootstrapLog::open(root.join(LOG_FILE))?;
    let runner = SystemRunner::new(&root);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut ctx = StepContext {
        root: &root,
        runner: &runner,
        input: &mut input,
    };

    let sequence = steps::default_sequence(&project_name);
    let summary = Sequencer::new(log).run(sequence, &mut ctx)?;

    if let Some(failed) = &summary.failed {
        println!("\n{} Bootstrap halted at '{}'", "✗".red().bold(), failed);
        println!("   See {LOG_FILE} for details");
        return Ok(1);
    }

    if summary.warnings > 0 {
        println!(
            "\n{} Bootstrap complete with {} warning(s)",
            "⚠".yellow().bold(),
            summary.warnings
        );
    } else {
        println!("\n{} Bootstrap complete", "✓".green().bold());
    }
    println!("   Next: primer dev");
    Ok(0)
}
