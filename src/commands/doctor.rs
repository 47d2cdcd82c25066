use anyhow::Result;
use colored::Colorize;

use primer::environment::{Environment, TOOLS};

pub fn execute(json: bool) -> Result<()> {
    let environment = Environment::detect()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&environment)?);
        return Ok(());
    }

    println!("{}", "🏥 Toolchain".bold());
    println!("   OS: {} {}", environment.os, environment.arch);
    println!();

    for name in TOOLS {
        let status = match environment.tool(name) {
            Some(info) if info.available => format!(
                "{} {}",
                "✓".green().bold(),
                info.version.as_deref().unwrap_or("installed").dimmed()
            ),
            _ => format!("{} not installed", "✗".red().bold()),
        };
        println!("   {name:<10} {status}");
    }

    Ok(())
}
