//! One JSON file per date under a fixed root directory

use crate::date::parse_date_key;
use crate::error::{Result, StoreError};
use crate::io::write_json_pretty;
use crate::types::IndexDocument;
use chrono::NaiveDate;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDEX_EXTENSION: &str = "json";

/// Durable mapping from date key to [`IndexDocument`]
#[derive(Debug, Clone)]
pub struct IndexStore {
    root: PathBuf,
}

impl IndexStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the store directory (and missing parents) if absent
    pub fn ensure_ready(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| StoreError::io(&self.root, e))
    }

    /// Path of the file holding `date`. The key is used verbatim.
    pub fn path_for(&self, date: &str) -> PathBuf {
        self.root.join(format!("{date}.{INDEX_EXTENSION}"))
    }

    /// Store `document` under `date`, replacing whatever was there
    pub fn write(&self, date: &str, document: &IndexDocument) -> Result<PathBuf> {
        let path = self.path_for(date);
        write_json_pretty(&path, document).map_err(|e| StoreError::io(&path, e))?;
        Ok(path)
    }

    /// Load the document stored for `date`
    pub fn read(&self, date: &str) -> Result<IndexDocument> {
        let path = self.path_for(date);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    date: date.to_string(),
                })
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt { path, source })
    }

    /// Date keys on or after `since`, oldest first.
    ///
    /// Files whose stem is not a valid calendar date are ignored.
    pub fn list_dates(&self, since: NaiveDate) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| StoreError::io(&self.root, e))?;

        let mut dated = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.root, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(INDEX_EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match parse_date_key(key) {
                Some(date) if date >= since => dated.push((date, key.to_string())),
                Some(_) => {}
                None => tracing::debug!(file = %path.display(), "skipping index file with malformed date key"),
            }
        }

        dated.sort();
        Ok(dated.into_iter().map(|(_, key)| key).collect())
    }
}
