//! Configuration for index building and retrieval

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the index directory
pub const INDEX_DIR_ENV: &str = "MEMDEX_INDEX_DIR";

/// Indexer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding one `<date>.json` per day
    pub index_dir: PathBuf,

    /// Window size for searches when `--days` is omitted
    pub default_days: u32,

    /// Sentiment tag given to topics without one
    pub default_sentiment: String,

    /// Participants given to topics without any
    pub default_participants: Vec<String>,

    /// Appended to the date to form a topic's blog reference
    pub blog_ref_suffix: String,

    /// Informational figure copied into every document's stats
    pub token_savings: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            index_dir: PathBuf::from("memory").join("index"),
            default_days: 7,
            default_sentiment: "casual".to_string(),
            default_participants: vec!["chenmj".to_string()],
            blog_ref_suffix: "-chat-with-channing/".to_string(),
            token_savings: "93-96%".to_string(),
        }
    }

    /// Default location of the optional override file
    pub fn default_path() -> PathBuf {
        PathBuf::from("memory").join("memdex.json")
    }

    /// Load overrides from `path` on top of the defaults.
    ///
    /// A missing or unparsable file yields the defaults. `MEMDEX_INDEX_DIR`
    /// wins over both.
    pub fn load(path: &Path) -> Self {
        let mut config = match Self::read_file(path) {
            Ok(Some(cf)) => Self::new().merge(cf),
            Ok(None) => Self::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::new()
            }
        };

        if let Ok(dir) = std::env::var(INDEX_DIR_ENV) {
            if !dir.is_empty() {
                config.index_dir = PathBuf::from(dir);
            }
        }
        config
    }

    fn read_file(path: &Path) -> anyhow::Result<Option<ConfigFile>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cf = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(cf))
    }

    fn merge(mut self, cf: ConfigFile) -> Self {
        if let Some(dir) = cf.index_dir {
            self.index_dir = dir;
        }
        if let Some(days) = cf.default_days {
            self.default_days = days;
        }
        if let Some(sentiment) = cf.default_sentiment {
            self.default_sentiment = sentiment;
        }
        if let Some(participants) = cf.default_participants {
            self.default_participants = participants;
        }
        if let Some(suffix) = cf.blog_ref_suffix {
            self.blog_ref_suffix = suffix;
        }
        if let Some(savings) = cf.token_savings {
            self.token_savings = savings;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    index_dir: Option<PathBuf>,
    default_days: Option<u32>,
    default_sentiment: Option<String>,
    default_participants: Option<Vec<String>>,
    blog_ref_suffix: Option<String>,
    token_savings: Option<String>,
}
