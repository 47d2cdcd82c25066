//! Web-toolchain detection for the doctor report.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::process::Command;

/// Tools probed for the report, in display order
pub const TOOLS: [&str; 6] = ["node", "npm", "yarn", "pnpm", "git", "docker"];

#[derive(Debug, Serialize, Deserialize)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub current_dir: String,
    pub tools: HashMap<String, ToolInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInfo {
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

impl Environment {
    pub fn detect() -> Result<Self> {
        let mut environment = Environment {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            current_dir: env::current_dir()?.display().to_string(),
            tools: HashMap::new(),
        };

        for tool_name in TOOLS {
            let mut tool_info = ToolInfo {
                available: false,
                version: None,
                path: None,
            };

            if let Ok(path) = which::which(tool_name) {
                tool_info.available = true;
                tool_info.path = Some(path.display().to_string());

                if let Ok(output) = Command::new(tool_name).arg("--version").output() {
                    let version_str = String::from_utf8_lossy(&output.stdout);
                    if !version_str.is_empty() {
                        tool_info.version =
                            Some(version_str.lines().next().unwrap_or("").trim().to_string());
                    }
                }
            }

            environment.tools.insert(tool_name.to_string(), tool_info);
        }

        Ok(environment)
    }

    pub fn tool(&self, name: &str) -> Option<&ToolInfo> {
        self.tools.get(name)
    }
}
