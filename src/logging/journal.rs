//! Append-only detection journal with size limits and rotation.
//!
//! Persists classified detections as JSON lines so triage runs leave a
//! reviewable trail. Enforces per-file size limits and rotates old files
//! to keep growth bounded.

use crate::triage::record::ClassifiedRecord;
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Failed to open detection journal: {0}")]
    OpenError(#[from] std::io::Error),

    #[error("Failed to serialize journal entry: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Size limits for the journal file.
#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// Maximum size of the current file in bytes before rotation.
    pub max_file_bytes: u64,
    /// Rotated files to keep (journal.jsonl.1, journal.jsonl.2, ...).
    pub max_rotated_files: u32,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024, // 10 MB
            max_rotated_files: 5,
        }
    }
}

/// Append-only detection journal with automatic rotation.
pub struct DetectionJournal {
    path: PathBuf,
    config: JournalConfig,
}

impl DetectionJournal {
    /// Open (or create) a journal at the given path.
    pub fn open(path: &Path, config: JournalConfig) -> Result<Self, JournalError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create the file if it doesn't exist
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            config,
        })
    }

    /// Append one classified detection.
    ///
    /// Records without a timestamp are stamped with the journaling time.
    pub fn record(&self, entry: &ClassifiedRecord) -> Result<(), JournalError> {
        self.rotate_if_needed()?;

        let mut value = serde_json::to_value(entry)?;
        if entry.record.timestamp.is_none() {
            value["timestamp"] = serde_json::Value::String(Utc::now().to_rfc3339());
        }

        let mut line = serde_json::to_string(&value)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }

    /// Rotate journal files if the current file exceeds the size limit.
    fn rotate_if_needed(&self) -> Result<(), JournalError> {
        let size = match fs::metadata(&self.path) {
            Ok(m) => m.len(),
            Err(_) => return Ok(()), // File doesn't exist yet
        };

        if size < self.config.max_file_bytes {
            return Ok(());
        }

        // Shift rotated files: .3 -> .4, .2 -> .3, .1 -> .2
        // Delete the oldest if beyond max_rotated_files
        for i in (1..=self.config.max_rotated_files).rev() {
            let src = self.rotated_path(i);
            let dst = self.rotated_path(i + 1);
            if src.exists() {
                if i == self.config.max_rotated_files {
                    let _ = fs::remove_file(&src);
                } else {
                    let _ = fs::rename(&src, &dst);
                }
            }
        }

        // Move current to .1
        let _ = fs::rename(&self.path, self.rotated_path(1));

        // Create fresh file
        File::create(&self.path)?;

        Ok(())
    }

    fn rotated_path(&self, n: u32) -> PathBuf {
        let name = self.path.file_name().unwrap_or_default().to_string_lossy();
        self.path.with_file_name(format!("{}.{}", name, n))
    }
}
