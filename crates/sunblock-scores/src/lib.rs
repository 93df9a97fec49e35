//! Highscore persistence for Sunblock.
//!
//! The simulation core only emits a final score at round end; this crate
//! owns the table on disk. Format: one `name,score` record per line,
//! sorted descending by score, truncated to the top 10 on save. A missing
//! file reads as an empty table and malformed lines are skipped.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept on disk.
pub const MAX_ENTRIES: usize = 10;

/// A single highscore record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: u32,
}

/// Load the table. A missing file yields an empty list; lines that do not
/// parse as `name,score` are skipped.
pub fn load(path: &Path) -> Vec<HighscoreEntry> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    let mut entries: Vec<HighscoreEntry> = contents
        .lines()
        .filter_map(|line| {
            // Names may contain commas; the score is after the last one.
            let (name, score) = line.rsplit_once(',')?;
            let score = score.trim().parse().ok()?;
            Some(HighscoreEntry {
                name: name.to_string(),
                score,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// The top `n` entries, highest score first.
pub fn top(path: &Path, n: usize) -> Vec<HighscoreEntry> {
    let mut entries = load(path);
    entries.truncate(n);
    entries
}

/// Append a finished round's score, re-sort descending, truncate to the
/// top 10, and rewrite the file.
pub fn record(path: &Path, name: &str, score: u32) -> Result<(), String> {
    let mut entries = load(path);
    entries.push(HighscoreEntry {
        name: name.to_string(),
        score,
    });
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
    save(path, &entries)
}

/// Write the table as newline-delimited `name,score` records.
fn save(path: &Path, entries: &[HighscoreEntry]) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create highscore directory: {e}"))?;
    }
    let mut contents = String::new();
    for entry in entries {
        contents.push_str(&format!("{},{}\n", entry.name, entry.score));
    }
    fs::write(path, contents).map_err(|e| format!("Failed to write highscore file: {e}"))
}
