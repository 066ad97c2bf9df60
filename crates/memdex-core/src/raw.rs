//! Raw conversation input handed to the builder

use serde::Deserialize;

/// A day's conversation as produced by the topic extractor
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConversation {
    #[serde(default)]
    pub session_key: Option<String>,
    #[serde(default)]
    pub topics: Vec<RawTopic>,
    #[serde(default)]
    pub actions: Option<RawActions>,
    #[serde(default)]
    pub context_snapshot: Option<String>,
}

/// A topic before defaults are applied
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTopic {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub decisions: Option<Vec<String>>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub participants: Option<Vec<String>>,
    #[serde(default)]
    pub time_range: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActions {
    #[serde(default)]
    pub tasks_triggered: Option<Vec<String>>,
    #[serde(default)]
    pub tasks_paused: Option<Vec<String>>,
    #[serde(default)]
    pub skills_created: Option<Vec<String>>,
    #[serde(default)]
    pub files_modified: Option<Vec<String>>,
}

impl RawTopic {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
