//! Local configuration - the two `.env.local` entries.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub const ENV_FILE: &str = ".env.local";

const APP_NAME_KEY: &str = "APP_NAME";
const API_BASE_URL_KEY: &str = "API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Contents of `.env.local`, round-tripped through `KEY=value` lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLocal {
    pub app_name: String,
    pub api_base_url: String,
}

impl EnvLocal {
    /// Load from `<root>/.env.local`. `None` when the file does not exist.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = root.join(ENV_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut env = EnvLocal {
            app_name: String::new(),
            api_base_url: String::new(),
        };
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                match key.trim() {
                    APP_NAME_KEY => env.app_name = value.trim().to_string(),
                    API_BASE_URL_KEY => env.api_base_url = value.trim().to_string(),
                    _ => {}
                }
            }
        }
        Ok(Some(env))
    }

    /// Write to `<root>/.env.local`, replacing any existing file
    pub fn write(&self, root: &Path) -> Result<()> {
        let content = format!(
            "{}={}\n{}={}\n",
            APP_NAME_KEY, self.app_name, API_BASE_URL_KEY, self.api_base_url
        );
        fs::write(root.join(ENV_FILE), content)
            .with_context(|| format!("Failed to write {}", ENV_FILE))
    }

    /// Ask the operator for both values, blocking on `input` until supplied.
    /// Empty answers fall back to the bracketed defaults.
    pub fn collect(input: &mut dyn BufRead, default_name: &str) -> Result<Self> {
        let answer = prompt(input, &format!("App name [{default_name}]"))?;
        let app_name = if answer.is_empty() {
            default_name.to_string()
        } else {
            answer
        };

        let answer = prompt(input, &format!("API base URL [{DEFAULT_API_BASE_URL}]"))?;
        let api_base_url = if answer.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            answer
        };

        Ok(Self {
            app_name,
            api_base_url,
        })
    }
}

fn prompt(input: &mut dyn BufRead, question: &str) -> Result<String> {
    print!("{question}: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read operator input")?;
    Ok(answer.trim().to_string())
}
