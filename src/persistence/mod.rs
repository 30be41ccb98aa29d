//! Flat-file leaderboard store
//!
//! Plain-text, append-friendly format. Lines alternate score and elapsed
//! milliseconds, each followed by a `#label` comment for readability:
//!
//! ```text
//! 1520 #score
//! 93211 #time
//! ```
//!
//! A missing file loads as an empty leaderboard; a malformed pair is
//! skipped with a warning instead of failing the load.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::highscores::Entry;

pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every persisted entry in file order (oldest first).
    pub fn load(&self) -> io::Result<Vec<Entry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no score file at {:?}, starting fresh", self.path);
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        let mut values = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            // everything after '#' is a human-readability comment
            let data = line.split('#').next().unwrap_or("").trim();
            if data.is_empty() {
                continue;
            }
            match data.parse::<u64>() {
                Ok(value) => values.push(value),
                Err(_) => log::warn!("skipping unparsable score line: {line:?}"),
            }
        }

        if values.len() % 2 != 0 {
            log::warn!("score file has a dangling value, dropping it");
            values.pop();
        }

        let entries: Vec<Entry> = values
            .chunks_exact(2)
            .map(|pair| Entry {
                score: pair[0] as u32,
                time_millis: pair[1],
            })
            .collect();
        log::info!("loaded {} leaderboard entries", entries.len());
        Ok(entries)
    }

    /// Append one entry. Creates the file on first save; never rewrites
    /// existing lines.
    pub fn append(&self, entry: Entry) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} #score", entry.score)?;
        writeln!(file, "{} #time", entry.time_millis)?;
        log::info!("appended leaderboard entry to {:?}", self.path);
        Ok(())
    }
}
