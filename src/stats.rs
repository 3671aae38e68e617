//! Completed-match records, appended to a JSON-lines file.
//!
//! The engine never touches this module; the binary writes one record per
//! finished game and reads them back for the `stats` listing.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::game::Side;

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player: String,
    pub winner: Side,
    /// Shots the player fired over the whole game.
    pub shots: u32,
    /// Game length as `MM:SS`.
    pub duration: String,
}

/// Format a game length in seconds as the stored `MM:SS` form.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Append-only match log, one JSON record per line.
pub struct MatchLog {
    path: PathBuf,
}

impl MatchLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MatchLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file on first use.
    pub fn append(&self, record: &MatchRecord) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        log::debug!(
            "recorded match for {}: winner {}, duration {}",
            record.player,
            record.winner,
            record.duration
        );
        Ok(())
    }

    /// Read every record in append order. A missing file is an empty log.
    pub fn load(&self) -> anyhow::Result<Vec<MatchRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}
