//! Append-only bootstrap log.
//!
//! The log is an explicitly passed handle rather than an ambient path; the
//! sequencer is its only writer during a run.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const LOG_FILE: &str = "bootstrap.log";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only log sink, one timestamped line per message
pub struct BootstrapLog {
    file: File,
}

impl BootstrapLog {
    /// Open the log at `path`, creating it if needed. Existing entries are
    /// preserved across runs.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .with_context(|| format!("Failed to open log file {}", path.as_ref().display()))?;
        Ok(Self { file })
    }

    /// Append one `<timestamp> - <message>` line
    pub fn append(&mut self, message: &str) -> Result<()> {
        let line = format!("{} - {}\n", Local::now().format(TIMESTAMP_FORMAT), message);
        self.file
            .write_all(line.as_bytes())
            .context("Failed to write to bootstrap log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn entries_are_appended_in_order() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join(LOG_FILE);

        let mut log = BootstrapLog::open(&path)?;
        log.append("first")?;
        log.append("second")?;

        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - first"));
        assert!(lines[1].ends_with(" - second"));
        Ok(())
    }

    #[test]
    fn lines_carry_a_wellformed_timestamp_prefix() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join(LOG_FILE);

        let mut log = BootstrapLog::open(&path)?;
        log.append("checkpoint")?;

        let content = fs::read_to_string(&path)?;
        let line = content.lines().next().unwrap();
        let (timestamp, rest) = line.split_once(" - ").unwrap();
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, "checkpoint");
        Ok(())
    }

    #[test]
    fn reopening_preserves_existing_entries() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join(LOG_FILE);

        BootstrapLog::open(&path)?.append("run one")?;
        BootstrapLog::open(&path)?.append("run two")?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.lines().count(), 2);
        Ok(())
    }
}
