//! Index document types

use serde::{Deserialize, Serialize};

/// One day's worth of indexed conversation topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,
    #[serde(default)]
    pub topics: Vec<TopicEntry>,
    #[serde(default)]
    pub actions: Actions,
    #[serde(default)]
    pub context_snapshot: String,
    #[serde(default)]
    pub stats: Stats,
}

/// A normalized topic inside an [`IndexDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub decisions: Vec<String>,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub blog_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<serde_json::Value>,
}

/// Actions taken during the day's conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actions {
    #[serde(default)]
    pub tasks_triggered: Vec<String>,
    #[serde(default)]
    pub tasks_paused: Vec<String>,
    #[serde(default)]
    pub skills_created: Vec<String>,
    #[serde(default)]
    pub files_modified: Vec<String>,
}

/// Counts derived from the document's topics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub total_topics: usize,
    pub problem_solving: usize,
    pub architecture_design: usize,
    pub token_savings: String,
}
