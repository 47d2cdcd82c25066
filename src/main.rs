use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Bootstrap web front-end projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full bootstrap sequence against the current directory
    Up {
        /// Project name used in generated files (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Check toolchain health
    Doctor {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Build the project with the package manager
    Build,

    /// Update dependencies to their latest allowed versions
    Update,

    /// Run the test suite
    Test,

    /// Start the development server
    Dev,

    /// Audit dependencies for known vulnerabilities
    Audit,

    /// Tag the current commit as a release
    Release {
        /// Tag name (e.g. v0.1.0)
        tag: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Up { name } => {
            let exit_code = commands::up::execute(name)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Doctor { json } => {
            commands::doctor::execute(json)?;
        }
        Commands::Build => {
            commands::build::execute()?;
        }
        Commands::Update => {
            commands::update::execute()?;
        }
        Commands::Test => {
            commands::test::execute()?;
        }
        Commands::Dev => {
            commands::dev::execute()?;
        }
        Commands::Audit => {
            commands::audit::execute()?;
        }
        Commands::Release { tag } => {
            commands::release::execute(&tag)?;
        }
    }

    Ok(())
}
